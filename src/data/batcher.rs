// ============================================================
// Layer 4: Classifier Batcher
// ============================================================
// Converts a SentenceBatch (plain Rust vectors) into tensors
// on the target device.
//
// How batching works here:
//   Input:  N encoded sequences of length T, N one-hot labels of
//           width C, N true lengths
//   Output: inputs [N, T] Int, labels [N, C] Float, mask [N, T] Float
//
//   The mask carries the true lengths in a form the recurrent
//   encoder can multiply with: mask[i][t] = 1.0 when t < len(i),
//   0.0 otherwise.
//
//   All rows are already padded to T, so we flatten and reshape:
//   [s1_t1, ..., s1_tT, s2_t1, ..., sN_tT] → [N, T]
//
// Reference: Burn Book §4 (Batcher)

use burn::{prelude::*, tensor::TensorData};

use crate::data::sampler::SentenceBatch;

/// A batch of sequences ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct ClassifierBatch<B: Backend> {
    /// Vocabulary indices: shape: [batch_size, time_steps]
    pub inputs: Tensor<B, 2, Int>,

    /// One-hot targets: shape: [batch_size, num_classes]
    pub labels: Tensor<B, 2>,

    /// Length mask: shape: [batch_size, time_steps]
    /// 1.0 = real token, 0.0 = padding
    pub mask: Tensor<B, 2>,
}

/// Holds the target device so tensors are created on the correct GPU/CPU.
#[derive(Clone, Debug)]
pub struct ClassifierBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> ClassifierBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    pub fn batch(&self, items: &SentenceBatch) -> ClassifierBatch<B> {
        let batch_size  = items.len();
        let time_steps  = items.inputs.first().map_or(0, Vec::len);
        let num_classes = items.labels.first().map_or(0, Vec::len);

        // Burn Int tensors are built from i32
        let input_flat: Vec<i32> = items
            .inputs
            .iter()
            .flat_map(|ids| ids.iter().map(|&x| x as i32))
            .collect();

        let label_flat: Vec<f32> = items
            .labels
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();

        let mask_flat: Vec<f32> = items
            .seqlens
            .iter()
            .flat_map(|&len| (0..time_steps).map(move |t| if t < len { 1.0 } else { 0.0 }))
            .collect();

        let inputs = Tensor::<B, 2, Int>::from_ints(
            TensorData::new(input_flat, [batch_size, time_steps]), &self.device
        );

        let labels = Tensor::<B, 2>::from_floats(
            TensorData::new(label_flat, [batch_size, num_classes]), &self.device
        );

        let mask = Tensor::<B, 2>::from_floats(
            TensorData::new(mask_flat, [batch_size, time_steps]), &self.device
        );

        ClassifierBatch { inputs, labels, mask }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn sample_batch() -> SentenceBatch {
        SentenceBatch {
            inputs:         vec![vec![0, 1, 2, 2], vec![3, 4, 3, 2]],
            labels:         vec![vec![0.0, 1.0], vec![1.0, 0.0]],
            seqlens:        vec![2, 3],
            source_indices: vec![7, 11],
        }
    }

    #[test]
    fn test_shapes() {
        let batcher = ClassifierBatcher::<TestBackend>::new(Default::default());
        let batch   = batcher.batch(&sample_batch());

        assert_eq!(batch.inputs.dims(), [2, 4]);
        assert_eq!(batch.labels.dims(), [2, 2]);
        assert_eq!(batch.mask.dims(),   [2, 4]);
    }

    #[test]
    fn test_mask_follows_true_lengths() {
        let batcher = ClassifierBatcher::<TestBackend>::new(Default::default());
        let mask: Vec<f32> = batcher
            .batch(&sample_batch())
            .mask
            .into_data()
            .to_vec::<f32>()
            .unwrap();

        assert_eq!(mask, vec![1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_labels_copied_row_major() {
        let batcher = ClassifierBatcher::<TestBackend>::new(Default::default());
        let labels: Vec<f32> = batcher
            .batch(&sample_batch())
            .labels
            .into_data()
            .to_vec::<f32>()
            .unwrap();

        assert_eq!(labels, vec![0.0, 1.0, 1.0, 0.0]);
    }
}
