//! Command trait and context for dispatching commands

use std::time::Instant;

use plagiscan_core::config::{ConfigSource, EngineConfig};
use plagiscan_core::error::{PlagiscanError, Result};
use plagiscan_core::snapshot::Snapshot;
use plagiscan_core::Submission;
use tracing::debug;

use crate::cli::{Cli, SnapshotArgs};

/// One assignment's submissions taken from a snapshot
pub struct AssignmentSubmissions {
    pub assignment_id: String,
    pub submissions: Vec<Submission>,
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a EngineConfig,
    pub source: &'a ConfigSource,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: &'a EngineConfig,
        source: &'a ConfigSource,
        start: Instant,
    ) -> Self {
        Self {
            cli,
            config,
            source,
            start,
        }
    }

    /// Load the snapshot and select the requested assignment
    ///
    /// With `allow_empty` an assignment without submissions is accepted
    /// (scoring the first submission of an assignment). Otherwise it is a
    /// data error.
    pub fn load_assignment(
        &self,
        args: &SnapshotArgs,
        allow_empty: bool,
    ) -> Result<AssignmentSubmissions> {
        let snapshot = Snapshot::load(&args.snapshot, args.assignment.as_deref())?;
        let assignment_id = snapshot.resolve_assignment(args.assignment.as_deref())?;
        let submissions = snapshot.for_assignment(&assignment_id);

        if submissions.is_empty() && !allow_empty {
            return Err(PlagiscanError::not_found("assignment", &assignment_id));
        }

        debug!(
            elapsed = ?self.start.elapsed(),
            assignment = %assignment_id,
            submissions = submissions.len(),
            "load_assignment"
        );

        Ok(AssignmentSubmissions {
            assignment_id,
            submissions,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("plagiscan {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Submission similarity scoring and plagiarism clustering.");
        println!();
        println!("Run `plagiscan --help` for usage information.");
        Ok(())
    }
}
