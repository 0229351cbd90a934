// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// `clap` and hands everything else to Layer 2 (application).

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, TrainArgs};

#[derive(Parser, Debug)]
#[command(
    name = "glove-bigru",
    version = "0.1.0",
    about = "Classify odd/even number-word sequences with GloVe embeddings and a biGRU."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. The CLI layer only routes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => Self::run_train(args),
        }
    }

    fn run_train(args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!(
            "Starting run (pretrained vectors: {})",
            if args.no_pretrained { "off".to_string() } else { args.glove_path.clone() }
        );

        let report = TrainUseCase::new(args.into()).execute()?;
        tracing::info!(
            "Done: {} step accuracies, {} test batches",
            report.steps.len(),
            report.test_batches.len()
        );
        Ok(())
    }
}
