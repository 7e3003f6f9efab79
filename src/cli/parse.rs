//! Value parsers for CLI arguments

use plagiscan_core::format::OutputFormat;

/// Parse `--format`, accepting any case
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
