//! Shared output formatting helpers for commands

use plagiscan_core::error::Result;
use serde::Serialize;

pub use crate::output_by_format_result;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the Records header line
///
/// ```ignore
/// print_records_header("cluster", &[("assignment", "a1"), ("threshold", "70")]);
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    let mut parts = vec![
        "H plagiscan=1 records=1".to_string(),
        format!("mode={}", mode),
    ];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}
