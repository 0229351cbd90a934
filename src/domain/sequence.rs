// ============================================================
// Layer 3: LabeledSequence Domain Type
// ============================================================
// One training example: a fixed-length run of number words,
// how many of them are real (the rest are PAD_TOKEN), and
// whether the words came from odd or even digits.
//
// Example (time_steps = 6):
//   tokens   = ["Nine", "One", "Three", PAD, PAD, PAD]
//   true_len = 3
//   parity   = Odd  → label 1 → one-hot [0, 1]

use anyhow::{ensure, Result};

/// Which digit family a sequence was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Class index used for the one-hot label: odd = 1, even = 0
    pub fn label(self) -> usize {
        match self {
            Parity::Odd  => 1,
            Parity::Even => 0,
        }
    }
}

/// A padded token sequence with its true length and class.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSequence {
    /// Exactly `time_steps` tokens, right-padded with PAD_TOKEN
    pub tokens: Vec<String>,

    /// Number of leading tokens that are not padding
    pub true_len: usize,

    pub parity: Parity,
}

impl LabeledSequence {
    pub fn new(tokens: Vec<String>, true_len: usize, parity: Parity) -> Self {
        Self { tokens, true_len, parity }
    }

    pub fn label(&self) -> usize {
        self.parity.label()
    }
}

#[cfg(test)]
impl LabeledSequence {
    /// The meaningful (unpadded) prefix of the sequence
    pub fn content(&self) -> &[String] {
        &self.tokens[..self.true_len.min(self.tokens.len())]
    }

    /// True when every position from true_len onward is padding
    pub fn is_well_padded(&self) -> bool {
        self.tokens[self.true_len.min(self.tokens.len())..]
            .iter()
            .all(|t| crate::domain::token::is_padding(t))
    }
}

/// Build a one-hot vector with a single 1.0 at `label`.
pub fn one_hot(label: usize, num_classes: usize) -> Result<Vec<f32>> {
    ensure!(
        label < num_classes,
        "label ({}) must be less than num_classes ({})",
        label,
        num_classes
    );
    let mut v = vec![0.0f32; num_classes];
    v[label] = 1.0;
    Ok(v)
}
