// ============================================================
// Layer 6: GloVe Archive Reader
// ============================================================
// Pulls pretrained vectors for the vocabulary out of a zipped
// GloVe text file.
//
// File format (one member inside the zip):
//   the 0.27204 -0.06203 -0.1884 ... (300 values)
//   One -0.14628 0.21394 0.40815 ...
//
// The member is several gigabytes uncompressed, so it is read
// line by line through a BufReader over the zip entry and never
// held in memory. Only lines whose first field is a vocabulary
// token get their numbers parsed.
//
// Rules:
//   - the padding token is never looked up; its row stays zero
//   - the first line for a token wins, later duplicates are skipped
//   - scanning stops once every non-padding token has a vector
//   - a malformed number or a wrong-length vector is fatal
//   - tokens still missing at the end are only warned about here;
//     EmbeddingMatrix::from_pretrained turns that into an error

use anyhow::{anyhow, Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};
use zip::ZipArchive;

use crate::domain::token::is_padding;
use crate::domain::traits::VectorSource;
use crate::domain::vectors::PretrainedVectors;
use crate::domain::vocabulary::Vocabulary;

/// A zip archive holding one GloVe-format text member.
pub struct GloveArchive {
    path:   PathBuf,
    member: String,
    dim:    usize,
}

impl GloveArchive {
    pub fn new(path: impl Into<PathBuf>, member: impl Into<String>, dim: usize) -> Self {
        Self { path: path.into(), member: member.into(), dim }
    }
}

impl VectorSource for GloveArchive {
    fn lookup(&self, vocab: &Vocabulary) -> Result<PretrainedVectors> {
        tracing::info!(
            "Scanning '{}' (member '{}') for {} tokens",
            self.path.display(),
            self.member,
            vocab.len()
        );

        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open vector archive '{}'", self.path.display()))?;
        let mut archive = ZipArchive::new(BufReader::new(file))
            .with_context(|| format!("'{}' is not a readable zip archive", self.path.display()))?;
        let entry = archive.by_name(&self.member).with_context(|| {
            format!(
                "Archive '{}' has no member '{}'",
                self.path.display(),
                self.member
            )
        })?;

        scan_vectors(BufReader::new(entry), vocab, self.dim)
    }
}

/// Stream `word v1 v2 ...` lines and keep the vectors of vocabulary tokens.
pub fn scan_vectors<R: BufRead>(
    reader: R,
    vocab:  &Vocabulary,
    dim:    usize,
) -> Result<PretrainedVectors> {
    let wanted = vocab.iter().filter(|(_, t)| !is_padding(t)).count();
    let mut vectors = PretrainedVectors::new(dim);
    let mut lines_read = 0usize;

    for (line_no, line) in reader.split(b'\n').enumerate() {
        if vectors.len() == wanted {
            break;
        }
        let line = line.with_context(|| format!("Read error at line {}", line_no + 1))?;
        lines_read += 1;

        let mut fields = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|f| !f.is_empty());

        // Tokens that are not valid UTF-8 cannot be vocabulary members
        let Some(word) = fields.next().and_then(|w| std::str::from_utf8(w).ok()) else {
            continue;
        };
        if is_padding(word) || !vocab.contains(word) || vectors.contains(word) {
            continue;
        }

        let values = fields
            .map(|f| parse_value(f, word, line_no + 1))
            .collect::<Result<Vec<f32>>>()?;
        vectors
            .insert_normalized(word, values)
            .with_context(|| format!("Bad vector at line {}", line_no + 1))?;
    }

    if vectors.len() < wanted {
        let missing: Vec<&str> = vocab
            .iter()
            .map(|(_, t)| t)
            .filter(|t| !is_padding(t) && !vectors.contains(t))
            .collect();
        tracing::warn!("No pretrained vector found for: {}", missing.join(", "));
    }

    tracing::info!(
        "Found {}/{} vectors after reading {} lines",
        vectors.len(),
        wanted,
        lines_read
    );
    Ok(vectors)
}

fn parse_value(field: &[u8], word: &str, line_no: usize) -> Result<f32> {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse::<f32>().ok())
        .ok_or_else(|| {
            anyhow!(
                "Malformed value '{}' for token '{}' at line {}",
                String::from_utf8_lossy(field),
                word,
                line_no
            )
        })
}
