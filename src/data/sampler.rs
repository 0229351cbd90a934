// ============================================================
// Layer 4: Batch Sampler
// ============================================================
// Draws one random batch from a dataset split.
//
// Each call picks `batch_size` distinct positions uniformly at
// random (no repeats inside a batch), but calls are independent
// of each other: there is no epoch, so an example may show up
// in consecutive batches or never at all.
//
// The sampled token sequences are encoded through the
// vocabulary here, so everything downstream works on indices.

use anyhow::{ensure, Context, Result};
use rand::{seq::index, Rng};

use crate::data::dataset::SequenceDataset;
use crate::domain::vocabulary::Vocabulary;

/// A sampled batch: element `i` of every field comes from
/// `source_indices[i]` in the split it was drawn from.
#[derive(Debug, Clone)]
pub struct SentenceBatch {
    pub inputs:         Vec<Vec<usize>>,
    pub labels:         Vec<Vec<f32>>,
    pub seqlens:        Vec<usize>,
    pub source_indices: Vec<usize>,
}

impl SentenceBatch {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }
}

pub struct BatchSampler {
    batch_size: usize,
}

impl BatchSampler {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    pub fn sample<R: Rng + ?Sized>(
        &self,
        data:  &SequenceDataset,
        vocab: &Vocabulary,
        rng:   &mut R,
    ) -> Result<SentenceBatch> {
        ensure!(!data.is_empty(), "cannot sample from an empty split");
        ensure!(
            self.batch_size <= data.len(),
            "batch size ({}) exceeds split size ({})",
            self.batch_size,
            data.len()
        );

        let picks = index::sample(rng, data.len(), self.batch_size).into_vec();

        let mut inputs  = Vec::with_capacity(picks.len());
        let mut labels  = Vec::with_capacity(picks.len());
        let mut seqlens = Vec::with_capacity(picks.len());

        for &i in &picks {
            let ids = vocab
                .encode(&data.sequences[i])
                .with_context(|| format!("Cannot encode sequence {}", i))?;
            inputs.push(ids);
            labels.push(data.labels[i].clone());
            seqlens.push(data.seqlens[i]);
        }

        Ok(SentenceBatch { inputs, labels, seqlens, source_indices: picks })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sequence::{LabeledSequence, Parity};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    const WORDS: [&str; 6] = ["One", "Two", "Three", "Four", "Five", "Six"];

    /// Example i starts with WORDS[i % 6], has length 1 + i % 6 and
    /// label i % 2, so every field can be traced back to its source.
    fn dataset(n: usize) -> (SequenceDataset, Vocabulary) {
        let samples: Vec<LabeledSequence> = (0..n)
            .map(|i| {
                let mut tokens = vec![WORDS[i % 6].to_string()];
                tokens.resize(6, "PAD_TOKEN".to_string());
                let parity = if i % 2 == 1 { Parity::Odd } else { Parity::Even };
                LabeledSequence::new(tokens, 1 + i % 6, parity)
            })
            .collect();
        let vocab = Vocabulary::from_corpus(&samples);
        (SequenceDataset::from_samples(samples, 2).unwrap(), vocab)
    }

    #[test]
    fn test_batch_fields_are_aligned() {
        let (ds, vocab) = dataset(60);
        let mut rng     = StdRng::seed_from_u64(3);
        let batch       = BatchSampler::new(16).sample(&ds, &vocab, &mut rng).unwrap();

        assert_eq!(batch.len(), 16);
        for (k, &src) in batch.source_indices.iter().enumerate() {
            let expected_ids = vocab.encode(&ds.sequences[src]).unwrap();
            assert_eq!(batch.inputs[k], expected_ids);
            assert_eq!(batch.labels[k], ds.labels[src]);
            assert_eq!(batch.seqlens[k], ds.seqlens[src]);
        }
    }

    #[test]
    fn test_no_repeats_within_a_batch() {
        let (ds, vocab) = dataset(40);
        let mut rng     = StdRng::seed_from_u64(9);
        let batch       = BatchSampler::new(40).sample(&ds, &vocab, &mut rng).unwrap();

        let unique: HashSet<usize> = batch.source_indices.iter().copied().collect();
        assert_eq!(unique.len(), 40);
    }

    #[test]
    fn test_encoded_length_is_fixed() {
        let (ds, vocab) = dataset(20);
        let mut rng     = StdRng::seed_from_u64(5);
        let batch       = BatchSampler::new(8).sample(&ds, &vocab, &mut rng).unwrap();
        assert!(batch.inputs.iter().all(|ids| ids.len() == 6));
    }

    #[test]
    fn test_oversized_batch_is_an_error() {
        let (ds, vocab) = dataset(4);
        let mut rng     = StdRng::seed_from_u64(0);
        assert!(BatchSampler::new(5).sample(&ds, &vocab, &mut rng).is_err());
    }

    #[test]
    fn test_empty_split_is_an_error() {
        let (_, vocab) = dataset(4);
        let empty      = SequenceDataset::default();
        let mut rng    = StdRng::seed_from_u64(0);
        let err        = BatchSampler::new(1).sample(&empty, &vocab, &mut rng).unwrap_err();
        assert!(err.to_string().contains("empty split"));
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let (ds, _) = dataset(4);
        let vocab   = Vocabulary::from_tokens(["One"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(BatchSampler::new(4).sample(&ds, &vocab, &mut rng).is_err());
    }
}
