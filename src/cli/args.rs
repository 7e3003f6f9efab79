//! Argument structures for subcommands

use clap::Args;
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// First text file
    pub file_a: PathBuf,

    /// Second text file
    pub file_b: PathBuf,
}

/// Where the submissions come from and which assignment to use
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Snapshot file (.json, .yaml) or directory of submission files
    #[arg(long, short)]
    pub snapshot: PathBuf,

    /// Assignment ID (required when the snapshot holds several assignments)
    #[arg(long, short)]
    pub assignment: Option<String>,
}

/// Arguments for the score command
#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// ID of the student handing in the new submission
    #[arg(long)]
    pub student: String,

    /// Text file of the new submission
    pub file: PathBuf,
}

/// Arguments shared by the pairs and cluster commands
#[derive(Args, Debug, Clone)]
pub struct ClusterArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Minimum similarity percentage that links two submissions (0-100)
    #[arg(long, short)]
    pub threshold: Option<u8>,

    /// Also link submissions handed in by the same student
    #[arg(long)]
    pub include_same_student: bool,
}

/// Arguments for the report command
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Cluster threshold override (0-100)
    #[arg(long, short)]
    pub threshold: Option<u8>,

    /// Stored score at or above which a submission is flagged (0-100)
    #[arg(long)]
    pub flag_threshold: Option<u8>,
}
