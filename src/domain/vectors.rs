// ============================================================
// Layer 3: Pretrained Vector Table
// ============================================================
// Token → unit-length vector, restricted to vocabulary tokens.
// Every stored vector has exactly `dim` components and an L2
// norm of 1.0 (up to float rounding).

use anyhow::{bail, Result};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PretrainedVectors {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl PretrainedVectors {
    pub fn new(dim: usize) -> Self {
        Self { dim, vectors: HashMap::new() }
    }

    /// L2-normalise `values` and store them under `token`.
    ///
    /// Fails if the vector has the wrong dimension or a zero norm,
    /// since neither can be turned into a unit vector.
    pub fn insert_normalized(&mut self, token: &str, mut values: Vec<f32>) -> Result<()> {
        if values.len() != self.dim {
            bail!(
                "Vector for '{}' has {} components, expected {}",
                token,
                values.len(),
                self.dim
            );
        }

        let norm = values.iter().map(|x| x * x).sum::<f32>().sqrt();
        if !norm.is_finite() || norm == 0.0 {
            bail!("Vector for '{}' cannot be normalised (norm = {})", token, norm);
        }

        for v in values.iter_mut() {
            *v /= norm;
        }
        self.vectors.insert(token.to_string(), values);
        Ok(())
    }

    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }
}
