// ============================================================
// Layer 5: ML / Model Layer (Burn)
// ============================================================
// All Burn framework code lives here (plus the tensor batcher
// in the data layer, which only builds input tensors).
//
//   embedding.rs: Initial embedding table, from GloVe or random
//   gru.rs      : GRU cell and its length-masked unroll
//   model.rs    : Embedding → biGRU → linear classifier,
//                  softmax cross-entropy and accuracy
//   trainer.rs  : RMSProp step loop and held-out evaluation
//
// Reference: Burn Book §3 (Building Blocks), §5 (Training)
//            Cho et al. (2014) GRU
//            Pennington et al. (2014) GloVe

/// Embedding matrix assembly
pub mod embedding;

/// Masked GRU cell
pub mod gru;

/// Bidirectional GRU classifier
pub mod model;

/// Training loop and evaluation
pub mod trainer;
