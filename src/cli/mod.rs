//! CLI definitions for the `penwright` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Penwright CLI
#[derive(Parser, Debug)]
#[command(name = "penwright", version, about = "LLM content enrichment and review summaries")]
pub struct Cli {
    /// TOML pricing file (overrides PENWRIGHT_PRICING_FILE)
    #[arg(long, global = true)]
    pub pricing_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price one usage record
    Cost(CostArgs),
    /// List the pricing table
    Pricing,
    /// Run a content-enrichment request from a JSON file
    Enrich(EnrichArgs),
    /// Run a summary job from a JSON file
    Summarize(SummarizeArgs),
}

#[derive(Parser, Debug)]
pub struct CostArgs {
    /// Model id, including dated snapshots (e.g. gpt-4.1-2025-04-14)
    pub model: String,

    #[arg(long, default_value_t = 0)]
    pub input: u64,

    #[arg(long, default_value_t = 0)]
    pub output: u64,

    /// Cached input tokens (part of --input)
    #[arg(long, default_value_t = 0)]
    pub cached: u64,
}

#[derive(Parser, Debug)]
pub struct EnrichArgs {
    /// Path to a content-enrichment request
    pub request: PathBuf,

    /// Model override
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SummarizeArgs {
    /// Path to a summary request
    pub request: PathBuf,

    /// Run the pipeline only; skip storage and notification
    #[arg(long)]
    pub dry_run: bool,
}
