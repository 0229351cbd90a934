// ============================================================
// Layer 2: TrainUseCase
// ============================================================
// Orchestrates the full pipeline in order:
//
//   Step 1: Seed the random generator        (here)
//   Step 2: Generate the odd/even corpus     (Layer 4 - data)
//   Step 3: Build the vocabulary             (Layer 3 - domain)
//   Step 4: Build the embedding matrix       (Layer 6 - infra + Layer 5 - ml)
//   Step 5: Split train/test                 (Layer 4 - data)
//   Step 6: Build the split datasets         (Layer 4 - data)
//   Step 7: Run training + evaluation        (Layer 5 - ml)

use anyhow::{ensure, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    corpus::CorpusGenerator,
    dataset::SequenceDataset,
    splitter::split_train_test,
};
use crate::domain::{traits::VectorSource, vocabulary::Vocabulary};
use crate::infra::{glove::GloveArchive, metrics::TrainingReport};
use crate::ml::{embedding::EmbeddingMatrix, trainer::run_training};

// ─── Training Configuration ──────────────────────────────────────────────────
// Every knob of a run. Defaults reproduce the classic setup:
// 300-d GloVe 840B vectors, batches of 128, 32 GRU units per
// direction, 1000 RMSProp steps, 5 test batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub glove_path:        String,
    pub glove_member:      String,
    /// Initialise embeddings from GloVe (true) or U(-1, 1) (false)
    pub pretrained:        bool,
    pub glove_size:        usize,
    /// Embedding width when `pretrained` is false
    pub embedding_dim:     usize,
    pub batch_size:        usize,
    pub num_classes:       usize,
    pub hidden_size:       usize,
    pub time_steps:        usize,
    pub min_seq_len:       usize,
    pub samples_per_class: usize,
    pub train_fraction:    f64,
    pub train_steps:       usize,
    pub log_every:         usize,
    pub eval_batches:      usize,
    pub learning_rate:     f64,
    pub rms_decay:         f32,
    pub rms_epsilon:       f32,
    pub dropout:           f64,
    pub seed:              Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            glove_path:        "../glove.840B.300d.zip".to_string(),
            glove_member:      "glove.840B.300d.txt".to_string(),
            pretrained:        true,
            glove_size:        300,
            embedding_dim:     64,
            batch_size:        128,
            num_classes:       2,
            hidden_size:       32,
            time_steps:        6,
            min_seq_len:       3,
            samples_per_class: 10_000,
            train_fraction:    0.5,
            train_steps:       1000,
            log_every:         100,
            eval_batches:      5,
            learning_rate:     1e-3,
            rms_decay:         0.9,
            rms_epsilon:       1e-10,
            dropout:           0.0,
            seed:              None,
        }
    }
}

impl TrainConfig {
    /// Width of the embedding vectors the model will see
    pub fn effective_embedding_dim(&self) -> usize {
        if self.pretrained { self.glove_size } else { self.embedding_dim }
    }

    /// Reject settings that would panic or silently misbehave later.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.num_classes == 2, "odd/even labels need num_classes = 2, got {}", self.num_classes);
        ensure!(self.batch_size > 0, "batch_size must be positive");
        ensure!(self.hidden_size > 0, "hidden_size must be positive");
        ensure!(self.effective_embedding_dim() > 0, "embedding dimension must be positive");
        ensure!(
            self.min_seq_len >= 1 && self.min_seq_len <= self.time_steps,
            "min_seq_len ({}) must be in 1..={}",
            self.min_seq_len,
            self.time_steps
        );
        ensure!(self.log_every > 0, "log_every must be positive");
        ensure!(
            self.train_fraction > 0.0 && self.train_fraction < 1.0,
            "train_fraction must be strictly between 0 and 1"
        );
        ensure!(
            (0.0..1.0).contains(&self.dropout),
            "dropout must be in [0, 1)"
        );

        let total = 2 * self.samples_per_class;
        let train = ((total as f64) * self.train_fraction).round() as usize;
        ensure!(
            self.batch_size <= train.min(total - train),
            "batch_size ({}) is larger than a split ({} train / {} test)",
            self.batch_size,
            train,
            total - train
        );
        Ok(())
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end
    pub fn execute(&self) -> Result<TrainingReport> {
        let cfg = &self.config;
        cfg.validate()?;
        tracing::debug!("Effective config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Random generator ──────────────────────────────────────────
        // Unseeded runs differ every time, like the classic script.
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        // ── Step 2: Synthetic corpus ──────────────────────────────────────────
        let generator = CorpusGenerator::new(cfg.samples_per_class, cfg.time_steps, cfg.min_seq_len);
        let corpus    = generator.generate(&mut rng)?;
        tracing::info!("Generated {} sequences", corpus.len());

        // ── Step 3: Vocabulary (before shuffling, first-encounter order) ──────
        let vocab = Vocabulary::from_corpus(&corpus);
        tracing::info!("Vocabulary size: {}", vocab.len());

        // ── Step 4: Embedding matrix ──────────────────────────────────────────
        let embeddings = build_embeddings(cfg, &vocab, &mut rng)?;

        // ── Step 5: Train / test split ────────────────────────────────────────
        let (train_samples, test_samples) = split_train_test(corpus, cfg.train_fraction, &mut rng);
        tracing::info!(
            "Split: {} train, {} test",
            train_samples.len(),
            test_samples.len()
        );

        // ── Step 6: Parallel-collection datasets ──────────────────────────────
        let train_data = SequenceDataset::from_samples(train_samples, cfg.num_classes)?;
        let test_data  = SequenceDataset::from_samples(test_samples, cfg.num_classes)?;

        // ── Step 7: Training loop (Layer 5) ───────────────────────────────────
        run_training(cfg, &vocab, &embeddings, &train_data, &test_data, &mut rng)
    }
}

/// Pretrained vectors from the GloVe archive, or a random matrix when disabled.
fn build_embeddings(
    cfg:   &TrainConfig,
    vocab: &Vocabulary,
    rng:   &mut StdRng,
) -> Result<EmbeddingMatrix> {
    ensure!(!vocab.is_empty(), "Cannot build embeddings for an empty vocabulary");
    if cfg.pretrained {
        let source  = GloveArchive::new(&cfg.glove_path, &cfg.glove_member, cfg.glove_size);
        let vectors = source.lookup(vocab)?;
        EmbeddingMatrix::from_pretrained(vocab, &vectors)
    } else {
        tracing::info!("Pretrained vectors disabled, using random embeddings");
        Ok(EmbeddingMatrix::random_uniform(vocab.len(), cfg.embedding_dim, rng))
    }
}
