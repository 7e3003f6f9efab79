//! Format output dispatch helpers

/// Dispatch output by format when the JSON branch returns a `Result` and the
/// human and records branches only print.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&clusters),
///     human => { println!("{} clusters", clusters.len()); },
///     records => { print_records_header("cluster", &[]); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
