// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything between "nothing" and GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   CorpusGenerator    → synthetic odd/even number-word sequences
//       │
//       ▼
//   (Vocabulary is built here, in the domain layer)
//       │
//       ▼
//   split_train_test   → shuffle, then 50/50 train/test
//       │
//       ▼
//   SequenceDataset    → parallel sequences / labels / lengths
//       │
//       ▼
//   BatchSampler       → random batch, tokens encoded to indices
//       │
//       ▼
//   ClassifierBatcher  → stacks the batch into tensors
//
// Each module is responsible for exactly one step.

/// Generates the synthetic odd/even corpus
pub mod corpus;

/// Parallel-collection storage for one split
pub mod dataset;

/// Shuffles and splits data into train/test sets
pub mod splitter;

/// Draws random batches and encodes them through the vocabulary
pub mod sampler;

/// Converts sampled batches into Burn tensors
pub mod batcher;
