// ============================================================
// Layer 3: Vocabulary
// ============================================================
// Bijective token ↔ index mapping.
//
// Indices are handed out in first-encounter order while
// scanning the corpus, starting at 0, so they always form the
// contiguous range [0, len). The mapping is frozen once built:
// lookups of unknown tokens return an error instead of growing
// the vocabulary.
//
// Example:
//   "One Three PAD_TOKEN PAD_TOKEN ..."   → One=0 Three=1 PAD_TOKEN=2
//   "Two Four PAD_TOKEN ..."              → Two=3 Four=4

use anyhow::{anyhow, Result};
use std::collections::HashMap;

use crate::domain::sequence::LabeledSequence;

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    word_to_index: HashMap<String, usize>,
    index_to_word: Vec<String>,
}

impl Vocabulary {
    /// Build from any token stream, in stream order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            let token = token.as_ref();
            if !vocab.word_to_index.contains_key(token) {
                vocab.word_to_index.insert(token.to_string(), vocab.index_to_word.len());
                vocab.index_to_word.push(token.to_string());
            }
        }
        vocab
    }

    /// Build from every token of every sequence, padding included.
    pub fn from_corpus(corpus: &[LabeledSequence]) -> Self {
        Self::from_tokens(corpus.iter().flat_map(|s| s.tokens.iter()))
    }

    pub fn index_of(&self, token: &str) -> Result<usize> {
        self.word_to_index
            .get(token)
            .copied()
            .ok_or_else(|| anyhow!("Token '{}' is not in the vocabulary", token))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.word_to_index.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.index_to_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_word.is_empty()
    }

    /// (index, token) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.index_to_word.iter().enumerate().map(|(i, w)| (i, w.as_str()))
    }

    /// Encode a token sequence into indices, failing on the first unknown token
    pub fn encode(&self, tokens: &[String]) -> Result<Vec<usize>> {
        tokens.iter().map(|t| self.index_of(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sequence::Parity;
    use crate::domain::token::PAD_TOKEN;

    fn padded(words: &[&str], parity: Parity) -> LabeledSequence {
        let mut tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let true_len = tokens.len();
        tokens.resize(6, PAD_TOKEN.to_string());
        LabeledSequence::new(tokens, true_len, parity)
    }

    #[test]
    fn test_first_encounter_order() {
        let corpus = vec![
            padded(&["One", "Three"], Parity::Odd),
            padded(&["One", "Three"], Parity::Odd),
            padded(&["Two", "Four"], Parity::Even),
            padded(&["Two", "Four"], Parity::Even),
        ];
        let vocab = Vocabulary::from_corpus(&corpus);

        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.index_of("One").unwrap(), 0);
        assert_eq!(vocab.index_of("Three").unwrap(), 1);
        assert_eq!(vocab.index_of(PAD_TOKEN).unwrap(), 2);
        assert_eq!(vocab.index_of("Two").unwrap(), 3);
        assert_eq!(vocab.index_of("Four").unwrap(), 4);
    }

    #[test]
    fn test_indices_are_contiguous_and_bijective() {
        let vocab = Vocabulary::from_tokens(["b", "a", "b", "c", "a", "d"]);
        let indices: Vec<usize> = vocab.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, (0..vocab.len()).collect::<Vec<_>>());

        for (i, w) in vocab.iter() {
            assert_eq!(vocab.index_of(w).unwrap(), i);
        }
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let vocab = Vocabulary::from_tokens(["One"]);
        let err = vocab.index_of("Eleven").unwrap_err();
        assert!(err.to_string().contains("Eleven"));
        // Lookups must never grow the vocabulary
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_encode() {
        let vocab = Vocabulary::from_tokens(["One", "Two"]);
        let ids = vocab.encode(&["Two".to_string(), "One".to_string()]).unwrap();
        assert_eq!(ids, vec![1, 0]);
        assert!(vocab.encode(&["Three".to_string()]).is_err());
    }

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::from_tokens(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert_eq!(vocab.iter().count(), 0);
    }
}
