// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The application layer asks for pretrained vectors through
// this trait, so it never knows whether they come from a zipped
// GloVe file on disk or from somewhere else.
//
// Implementations:
//   - GloveArchive → streams a zip archive of "word v1 v2 ..." lines

use anyhow::Result;

use crate::domain::vectors::PretrainedVectors;
use crate::domain::vocabulary::Vocabulary;

// ─── VectorSource ─────────────────────────────────────────────────────────────
/// Any component that can supply pretrained vectors for a vocabulary.
pub trait VectorSource {
    /// Return unit-length vectors for as many vocabulary tokens as the
    /// source contains. Missing tokens are left absent; it is up to the
    /// caller to decide whether that is fatal.
    fn lookup(&self, vocab: &Vocabulary) -> Result<PretrainedVectors>;
}
