//! Command dispatch logic for plagiscan

use std::time::Instant;

use plagiscan_core::config::EngineConfig;
use plagiscan_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let (config, source) = EngineConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), source = %source, "resolve_config");

    let ctx = CommandContext::new(cli, &config, &source, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
