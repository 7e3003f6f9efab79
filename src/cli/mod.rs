//! CLI argument parsing for plagiscan
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ClusterArgs, CompareArgs, ReportArgs, ScoreArgs, SnapshotArgs};
pub use plagiscan_core::format::OutputFormat;
use parse::parse_format;

/// Plagiscan - submission similarity scoring and plagiarism clustering
#[derive(Parser, Debug)]
#[command(name = "plagiscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (warn, debug, ...) or a full tracing directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the global config.toml)
    #[arg(long, global = true, env = "PLAGISCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Similarity of two text files
    Compare(CompareArgs),

    /// Score a new submission against the snapshot's history
    Score(ScoreArgs),

    /// List pairs of submissions at or above the similarity threshold
    Pairs(ClusterArgs),

    /// Group mutually similar submissions for review
    Cluster(ClusterArgs),

    /// Plagiarism overview of one assignment
    Report(ReportArgs),

    /// Show the effective configuration
    Config,
}
