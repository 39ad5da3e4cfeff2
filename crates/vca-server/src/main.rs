//! Veterinary chat assistant server
//!
//! A retrieval-augmented question-answering service: requests carry a
//! message (and optionally an image), the service retrieves conversational
//! and corpus context, and a remote chat model generates the answer.

// Force-link vca-providers to ensure linkme registrations are included
extern crate vca_providers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for the veterinary chat assistant
#[derive(Parser, Debug)]
#[command(name = "vca")]
#[command(about = "Veterinary chat assistant - retrieval-augmented question answering over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Server subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Embed a corpus directory and write the index snapshot
    Index {
        /// Corpus directory: one subdirectory per species, text files inside
        #[arg(long)]
        corpus: PathBuf,
        /// Output path for the snapshot file
        #[arg(long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Serve) => vca_server::run(cli.config.as_deref()).await,
        Some(Command::Index { corpus, out }) => {
            vca_server::build_snapshot(cli.config.as_deref(), &corpus, &out).await
        }
    }
}
