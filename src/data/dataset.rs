use anyhow::{Context, Result};

use crate::domain::sequence::{one_hot, LabeledSequence};

/// One split of the corpus stored as three parallel collections.
/// Position `i` in each vector describes the same example.
#[derive(Debug, Clone, Default)]
pub struct SequenceDataset {
    pub sequences: Vec<Vec<String>>,
    pub labels:    Vec<Vec<f32>>,
    pub seqlens:   Vec<usize>,
}

impl SequenceDataset {
    pub fn from_samples(samples: Vec<LabeledSequence>, num_classes: usize) -> Result<Self> {
        let mut ds = Self {
            sequences: Vec::with_capacity(samples.len()),
            labels:    Vec::with_capacity(samples.len()),
            seqlens:   Vec::with_capacity(samples.len()),
        };
        for (i, s) in samples.into_iter().enumerate() {
            let label = one_hot(s.label(), num_classes)
                .with_context(|| format!("Cannot label sample {}", i))?;
            ds.labels.push(label);
            ds.seqlens.push(s.true_len);
            ds.sequences.push(s.tokens);
        }
        Ok(ds)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
