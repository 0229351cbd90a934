// ============================================================
// Layer 5: Embedding Matrix
// ============================================================
// The initial value of the model's embedding weights, assembled
// on the CPU before any tensor exists.
//
// Two ways to build it:
//   from_pretrained : row i is the unit vector of token i; the
//                      padding row stays zero. Any other token
//                      without a vector is an error.
//   random_uniform  : every entry drawn from U(-1, 1), used
//                      when pretrained vectors are disabled.
//
// Either way row count == vocabulary size and the weights stay
// trainable once they are copied into the model.

use anyhow::{bail, Result};
use burn::{prelude::*, tensor::TensorData};
use rand::Rng;

use crate::domain::token::is_padding;
use crate::domain::vectors::PretrainedVectors;
use crate::domain::vocabulary::Vocabulary;

/// Dense row-major [rows, dim] table indexed by vocabulary index.
#[derive(Debug, Clone)]
pub struct EmbeddingMatrix {
    rows:   usize,
    dim:    usize,
    values: Vec<f32>,
}

impl EmbeddingMatrix {
    pub fn zeros(rows: usize, dim: usize) -> Self {
        Self { rows, dim, values: vec![0.0; rows * dim] }
    }

    /// Copy each token's pretrained vector into its vocabulary row.
    pub fn from_pretrained(vocab: &Vocabulary, vectors: &PretrainedVectors) -> Result<Self> {
        let mut matrix = Self::zeros(vocab.len(), vectors.dim());
        let mut missing = Vec::new();

        for (index, token) in vocab.iter() {
            if is_padding(token) {
                continue;
            }
            match vectors.get(token) {
                Some(v) => matrix.row_mut(index).copy_from_slice(v),
                None    => missing.push(token.to_string()),
            }
        }

        if !missing.is_empty() {
            bail!(
                "No pretrained vector for vocabulary token(s): {}",
                missing.join(", ")
            );
        }

        tracing::debug!(
            "Embedding matrix built from pretrained vectors: {}x{}",
            matrix.rows,
            matrix.dim
        );
        Ok(matrix)
    }

    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, dim: usize, rng: &mut R) -> Self {
        let values = (0..rows * dim).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
        Self { rows, dim, values }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    fn row_mut(&mut self, index: usize) -> &mut [f32] {
        &mut self.values[index * self.dim..(index + 1) * self.dim]
    }

    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 2> {
        Tensor::<B, 2>::from_floats(
            TensorData::new(self.values.clone(), [self.rows, self.dim]),
            device,
        )
    }
}

#[cfg(test)]
impl EmbeddingMatrix {
    pub fn row(&self, index: usize) -> &[f32] {
        &self.values[index * self.dim..(index + 1) * self.dim]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
