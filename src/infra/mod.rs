// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Concerns that touch the outside world:
//
//   glove.rs  : Pretrained vector reader
//                Streams a zipped GloVe text file and keeps the
//                vectors of vocabulary tokens, unit-normalised.
//                Implements the VectorSource trait from Layer 3.
//
//   metrics.rs: Accuracy reporting
//                Formats and records the per-step and per-test-
//                batch accuracy lines printed during a run.

/// Zipped GloVe vector file reader
pub mod glove;

/// Training and evaluation accuracy records
pub mod metrics;
