//! Command implementations for all plagiscan commands

use plagiscan_core::cluster::ClusterOptions;
use plagiscan_core::config::{validate_threshold, EngineConfig};
use plagiscan_core::error::Result;

use crate::cli::{ClusterArgs, Commands, ReportArgs, ScoreArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{cluster, compare, config, pairs, report, score};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Compare(args) => compare::execute(ctx.cli, &args.file_a, &args.file_b),
            Commands::Score(args) => execute_score(ctx, args),
            Commands::Pairs(args) => execute_pairs(ctx, args),
            Commands::Cluster(args) => execute_cluster(ctx, args),
            Commands::Report(args) => execute_report(ctx, args),
            Commands::Config => config::execute(ctx.cli, ctx.config, ctx.source),
        }
    }
}

fn execute_score(ctx: &CommandContext, args: &ScoreArgs) -> Result<()> {
    let history = ctx.load_assignment(&args.snapshot, true)?;
    score::execute(
        ctx.cli,
        &history.assignment_id,
        &args.student,
        &args.file,
        &history.submissions,
    )
}

fn execute_pairs(ctx: &CommandContext, args: &ClusterArgs) -> Result<()> {
    let options = cluster_options(ctx.config, args)?;
    let loaded = ctx.load_assignment(&args.snapshot, false)?;
    pairs::execute(ctx.cli, &loaded.assignment_id, &loaded.submissions, &options)
}

fn execute_cluster(ctx: &CommandContext, args: &ClusterArgs) -> Result<()> {
    let options = cluster_options(ctx.config, args)?;
    let loaded = ctx.load_assignment(&args.snapshot, false)?;
    cluster::execute(ctx.cli, &loaded.assignment_id, &loaded.submissions, &options)
}

fn execute_report(ctx: &CommandContext, args: &ReportArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(threshold) = args.threshold {
        validate_threshold("--threshold", threshold)?;
        config.cluster_threshold = threshold;
    }
    if let Some(threshold) = args.flag_threshold {
        validate_threshold("--flag-threshold", threshold)?;
        config.flag_threshold = threshold;
    }

    let loaded = ctx.load_assignment(&args.snapshot, false)?;
    report::execute(ctx.cli, &loaded.assignment_id, &loaded.submissions, &config)
}

/// Cluster options from the config, with command-line overrides applied
fn cluster_options(config: &EngineConfig, args: &ClusterArgs) -> Result<ClusterOptions> {
    let mut options = ClusterOptions::from(config);
    if let Some(threshold) = args.threshold {
        validate_threshold("--threshold", threshold)?;
        options.threshold = threshold;
    }
    if args.include_same_student {
        options.ignore_same_student = false;
    }
    Ok(options)
}
