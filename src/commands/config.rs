//! `plagiscan config` command - show the effective configuration

use plagiscan_core::config::{global, ConfigSource, EngineConfig};
use plagiscan_core::error::{PlagiscanError, Result};
use plagiscan_core::format::records_value;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

/// Execute the config command
pub fn execute(cli: &Cli, config: &EngineConfig, source: &ConfigSource) -> Result<()> {
    let source_label = match source {
        ConfigSource::Defaults => format!("defaults (no file at {})", global::source_display()),
        other => other.to_string(),
    };

    output_by_format_result!(cli.format,
        json => {
            print_json(&json!({
                "source": source.to_string(),
                "config": config,
            }))?;
            Ok::<(), PlagiscanError>(())
        },
        human => {
            if !cli.quiet {
                println!("# source: {}", source_label);
            }
            println!("cluster_threshold = {}", config.cluster_threshold);
            println!("flag_threshold = {}", config.flag_threshold);
            println!("ignore_same_student = {}", config.ignore_same_student);
        },
        records => {
            print_records_header("config", &[("source", &records_value(&source.to_string()))]);
            println!(
                "K cluster_threshold={} flag_threshold={} ignore_same_student={}",
                config.cluster_threshold, config.flag_threshold, config.ignore_same_student
            );
        }
    )
}
