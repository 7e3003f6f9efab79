//! Helper functions shared by commands

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use plagiscan_core::error::{PlagiscanError, Result};

/// Read a submission text file
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PlagiscanError::not_found("file", path.display()),
        _ => PlagiscanError::io_operation("read", path.display(), e),
    })
}
