// ============================================================
// Layer 4: Synthetic Corpus Generator
// ============================================================
// Produces the toy odd/even dataset.
//
// For every index i in 0..samples_per_class:
//   1. draw one true length L uniformly from [min_len, time_steps]
//   2. draw L odd digits and, separately, L even digits
//      (with replacement)
//   3. map each digit to its word, pad both to time_steps
//
// The odd sample and the even sample of the same index share
// the same true length, so the two classes have identical
// length distributions and only the words tell them apart.
//
// Output order: every odd sample (label 1) first, then every
// even sample (label 0). Vocabulary construction depends on
// this order, so shuffling happens later, in the splitter.
//
// Example (time_steps = 6, L = 4):
//   odd:  "Five Nine One Five PAD_TOKEN PAD_TOKEN"   label 1
//   even: "Two Eight Eight Four PAD_TOKEN PAD_TOKEN" label 0

use anyhow::{ensure, Context, Result};
use rand::{seq::SliceRandom, Rng};

use crate::domain::sequence::{LabeledSequence, Parity};
use crate::domain::token::{digit_to_word, EVEN_DIGITS, ODD_DIGITS, PAD_TOKEN};

pub struct CorpusGenerator {
    /// Number of sequences generated for each class
    samples_per_class: usize,
    /// Padded length of every sequence
    time_steps: usize,
    /// Shortest allowed true length
    min_len: usize,
}

impl CorpusGenerator {
    pub fn new(samples_per_class: usize, time_steps: usize, min_len: usize) -> Self {
        Self { samples_per_class, time_steps, min_len }
    }

    /// Generate `2 * samples_per_class` sequences: odd class, then even class.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<LabeledSequence>> {
        ensure!(self.min_len > 0, "minimum sequence length must be at least 1");
        ensure!(
            self.min_len <= self.time_steps,
            "minimum sequence length ({}) exceeds time_steps ({})",
            self.min_len,
            self.time_steps
        );

        let mut odd  = Vec::with_capacity(self.samples_per_class);
        let mut even = Vec::with_capacity(self.samples_per_class);

        for _ in 0..self.samples_per_class {
            let true_len = rng.gen_range(self.min_len..=self.time_steps);
            odd.push(self.draw(&ODD_DIGITS, true_len, Parity::Odd, rng)?);
            even.push(self.draw(&EVEN_DIGITS, true_len, Parity::Even, rng)?);
        }

        odd.extend(even);
        tracing::debug!("Generated {} synthetic sequences", odd.len());
        Ok(odd)
    }

    /// Draw `true_len` digits from `pool`, map to words and pad.
    fn draw<R: Rng + ?Sized>(
        &self,
        pool:     &[u8],
        true_len: usize,
        parity:   Parity,
        rng:      &mut R,
    ) -> Result<LabeledSequence> {
        let mut tokens = Vec::with_capacity(self.time_steps);
        for _ in 0..true_len {
            let digit = *pool.choose(rng).context("digit pool is empty")?;
            let word  = digit_to_word(digit)
                .with_context(|| format!("No word for digit {}", digit))?;
            tokens.push(word.to_string());
        }
        tokens.resize(self.time_steps, PAD_TOKEN.to_string());
        Ok(LabeledSequence::new(tokens, true_len, parity))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn corpus(n: usize) -> Vec<LabeledSequence> {
        let mut rng = StdRng::seed_from_u64(7);
        CorpusGenerator::new(n, 6, 3).generate(&mut rng).unwrap()
    }

    #[test]
    fn test_corpus_size_and_class_order() {
        let c = corpus(50);
        assert_eq!(c.len(), 100);
        assert!(c[..50].iter().all(|s| s.parity == Parity::Odd));
        assert!(c[50..].iter().all(|s| s.parity == Parity::Even));
    }

    #[test]
    fn test_lengths_and_padding() {
        for s in corpus(500) {
            assert_eq!(s.tokens.len(), 6);
            assert!((3..=6).contains(&s.true_len));
            assert!(s.is_well_padded());
            assert!(s.content().iter().all(|t| t != PAD_TOKEN));
        }
    }

    #[test]
    fn test_words_match_parity() {
        let odd_words:  Vec<&str> = ODD_DIGITS.iter().filter_map(|d| digit_to_word(*d)).collect();
        let even_words: Vec<&str> = EVEN_DIGITS.iter().filter_map(|d| digit_to_word(*d)).collect();

        for s in corpus(200) {
            let allowed = match s.parity {
                Parity::Odd  => &odd_words,
                Parity::Even => &even_words,
            };
            assert!(s.content().iter().all(|t| allowed.contains(&t.as_str())));
        }
    }

    #[test]
    fn test_mirrored_classes_share_lengths() {
        let c = corpus(100);
        for i in 0..100 {
            assert_eq!(c[i].true_len, c[i + 100].true_len);
        }
    }

    #[test]
    fn test_invalid_min_len() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(CorpusGenerator::new(10, 6, 7).generate(&mut rng).is_err());
        assert!(CorpusGenerator::new(10, 6, 0).generate(&mut rng).is_err());
    }
}
