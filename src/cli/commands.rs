// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Defines the `train` subcommand and all its flags. Every
// default equals the classic constant, so running `train` with
// no flags reproduces the standard experiment.

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the odd/even corpus, train the biGRU classifier, evaluate it
    Train(TrainArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Zip archive holding the GloVe vectors
    #[arg(long, default_value = "../glove.840B.300d.zip")]
    pub glove_path: String,

    /// Name of the text file inside the archive
    #[arg(long, default_value = "glove.840B.300d.txt")]
    pub glove_member: String,

    /// Skip GloVe and initialise embeddings uniformly in [-1, 1)
    #[arg(long)]
    pub no_pretrained: bool,

    /// Dimensionality of the pretrained vectors
    #[arg(long, default_value_t = 300)]
    pub glove_size: usize,

    /// Embedding width used with --no-pretrained
    #[arg(long, default_value_t = 64)]
    pub embedding_dim: usize,

    #[arg(long, default_value_t = 128)]
    pub batch_size: usize,

    #[arg(long, default_value_t = 2)]
    pub num_classes: usize,

    /// GRU units per direction
    #[arg(long, default_value_t = 32)]
    pub hidden_size: usize,

    /// Padded sequence length
    #[arg(long, default_value_t = 6)]
    pub time_steps: usize,

    /// Shortest true sequence length
    #[arg(long, default_value_t = 3)]
    pub min_seq_len: usize,

    /// Sequences generated per class
    #[arg(long, default_value_t = 10_000)]
    pub samples_per_class: usize,

    /// Share of the corpus used for training; the rest is held out
    #[arg(long, default_value_t = 0.5)]
    pub train_fraction: f64,

    /// Number of optimisation steps
    #[arg(long, default_value_t = 1000)]
    pub steps: usize,

    /// Report training-batch accuracy every N steps
    #[arg(long, default_value_t = 100)]
    pub log_every: usize,

    /// Number of held-out batches evaluated after training
    #[arg(long, default_value_t = 5)]
    pub eval_batches: usize,

    /// RMSProp learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// RMSProp decay of the squared-gradient average
    #[arg(long, default_value_t = 0.9)]
    pub rms_decay: f32,

    /// Dropout applied to the concatenated GRU states
    #[arg(long, default_value_t = 0.0)]
    pub dropout: f64,

    /// Seed for reproducible runs (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            glove_path:        a.glove_path,
            glove_member:      a.glove_member,
            pretrained:        !a.no_pretrained,
            glove_size:        a.glove_size,
            embedding_dim:     a.embedding_dim,
            batch_size:        a.batch_size,
            num_classes:       a.num_classes,
            hidden_size:       a.hidden_size,
            time_steps:        a.time_steps,
            min_seq_len:       a.min_seq_len,
            samples_per_class: a.samples_per_class,
            train_fraction:    a.train_fraction,
            train_steps:       a.steps,
            log_every:         a.log_every,
            eval_batches:      a.eval_batches,
            learning_rate:     a.lr,
            rms_decay:         a.rms_decay,
            dropout:           a.dropout,
            seed:              a.seed,
            ..TrainConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use crate::cli::commands::Commands;
    use crate::application::train_use_case::TrainConfig;
    use clap::Parser;

    #[test]
    fn test_defaults_match_classic_setup() {
        let cli = Cli::parse_from(["glove-bigru", "train"]);
        let Commands::Train(args) = cli.command;
        let cfg: TrainConfig = args.into();

        assert!(cfg.pretrained);
        assert_eq!(cfg.batch_size, 128);
        assert_eq!(cfg.hidden_size, 32);
        assert_eq!(cfg.time_steps, 6);
        assert_eq!(cfg.train_steps, 1000);
        assert_eq!(cfg.eval_batches, 5);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "glove-bigru", "train", "--no-pretrained", "--steps", "10", "--seed", "5",
        ]);
        let Commands::Train(args) = cli.command;
        let cfg: TrainConfig = args.into();

        assert!(!cfg.pretrained);
        assert_eq!(cfg.train_steps, 10);
        assert_eq!(cfg.seed, Some(5));
    }
}
