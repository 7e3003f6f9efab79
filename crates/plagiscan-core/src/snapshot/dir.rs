use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{PlagiscanError, Result};
use crate::submission::Submission;

/// Whether the file's guessed type allows reading it as plain text
///
/// Unknown extensions are treated as text.
fn is_text_file(path: &Path) -> bool {
    match mime_guess::from_path(path).first() {
        Some(mime) => mime.type_() == mime_guess::mime::TEXT,
        None => true,
    }
}

/// Submission id for a file: its path below `dir`, `/`-separated
///
/// Unique within one walk, unlike the stem (`alice.txt` and `late/alice.md`).
fn relative_id(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Read every regular file under `dir` as one submission
///
/// The path below `dir` becomes the submission id; the file stem becomes
/// the student id and student name. The
/// assignment id is `assignment_override` or the directory's own name.
/// Files are visited in file name order so the result is deterministic.
/// Non-text files (PDFs, images, ...) are kept without content.
pub fn load_dir(dir: &Path, assignment_override: Option<&str>) -> Result<Vec<Submission>> {
    let assignment_id = match assignment_override {
        Some(id) => id.to_string(),
        None => dir
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .ok_or_else(|| PlagiscanError::InvalidSnapshot {
                path: dir.to_path_buf(),
                reason: "cannot derive an assignment id from the directory name".to_string(),
            })?,
    };

    let mut submissions = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        if stem.starts_with('.') {
            continue;
        }

        let mut sub = Submission::new(
            relative_id(dir, path),
            assignment_id.clone(),
            stem.clone(),
            stem,
        );
        sub.file_url = entry.file_name().to_str().map(|s| s.to_string());

        if is_text_file(path) {
            match fs::read_to_string(path) {
                Ok(content) => sub.file_content = Some(content),
                // Not valid UTF-8: keep the submission, skip comparison
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    warn!(path = %path.display(), "skipping non UTF-8 submission content");
                }
                Err(e) => {
                    return Err(PlagiscanError::io_operation(
                        "read submission",
                        path.display(),
                        e,
                    ))
                }
            }
        } else {
            debug!(path = %path.display(), "non-text submission, no content");
        }

        submissions.push(sub);
    }

    Ok(submissions)
}
