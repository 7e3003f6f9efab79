//! Submission snapshots
//!
//! A snapshot is the immutable list of submissions the caller hands to the
//! engine. It can be read from a JSON or YAML file holding either a bare
//! array of submissions or `{ "submissions": [...] }`, or from a directory
//! with one text file per submission.

mod dir;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PlagiscanError, Result};
use crate::submission::Submission;

pub use dir::load_dir;

/// Ordered collection of submissions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    submissions: Vec<Submission>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    List(Vec<Submission>),
    Wrapped { submissions: Vec<Submission> },
}

impl From<SnapshotFile> for Vec<Submission> {
    fn from(file: SnapshotFile) -> Self {
        match file {
            SnapshotFile::List(list) => list,
            SnapshotFile::Wrapped { submissions } => submissions,
        }
    }
}

impl Snapshot {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Snapshot { submissions }
    }

    /// Load a snapshot from a file or directory
    ///
    /// `assignment_override` sets the assignment of directory snapshots; it
    /// is ignored for files, which carry their own assignment ids.
    pub fn load(path: &Path, assignment_override: Option<&str>) -> Result<Self> {
        if !path.exists() {
            return Err(PlagiscanError::SnapshotNotFound {
                path: path.to_path_buf(),
            });
        }

        let snapshot = if path.is_dir() {
            Snapshot::new(load_dir(path, assignment_override)?)
        } else {
            Self::load_file(path)?
        };

        debug!(
            path = %path.display(),
            submissions = snapshot.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PlagiscanError::io_operation("read snapshot", path.display(), e))?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let parsed: std::result::Result<SnapshotFile, String> = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };

        let file = parsed.map_err(|reason| PlagiscanError::InvalidSnapshot {
            path: path.to_path_buf(),
            reason,
        })?;

        let submissions: Vec<Submission> = file.into();
        if let Some(sub) = submissions
            .iter()
            .find(|s| s.plagiarism_score.is_some_and(|score| score > 100))
        {
            return Err(PlagiscanError::InvalidSnapshot {
                path: path.to_path_buf(),
                reason: format!(
                    "submission '{}' has plagiarismScore {} (expected 0-100)",
                    sub.id,
                    sub.score_or_zero()
                ),
            });
        }

        Ok(Snapshot::new(submissions))
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Distinct assignment ids in first-seen order
    pub fn assignments(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for sub in &self.submissions {
            if !ids.contains(&sub.assignment_id.as_str()) {
                ids.push(&sub.assignment_id);
            }
        }
        ids
    }

    /// Submissions of one assignment, in snapshot order
    pub fn for_assignment(&self, assignment_id: &str) -> Vec<Submission> {
        self.submissions
            .iter()
            .filter(|s| s.assignment_id == assignment_id)
            .cloned()
            .collect()
    }

    /// Pick the assignment to work on
    ///
    /// An explicit id is taken as-is; an assignment with no submissions yet
    /// is valid and simply has an empty history. Without an id the snapshot
    /// must hold exactly one assignment.
    pub fn resolve_assignment(&self, requested: Option<&str>) -> Result<String> {
        if let Some(id) = requested {
            if id.trim().is_empty() {
                crate::bail_usage!("--assignment must not be blank");
            }
            return Ok(id.to_string());
        }

        match self.assignments().as_slice() {
            [only] => Ok(only.to_string()),
            [] => Err(PlagiscanError::UsageError(
                "snapshot holds no submissions; pass --assignment".to_string(),
            )),
            many => Err(PlagiscanError::UsageError(format!(
                "snapshot holds {} assignments ({}); pass --assignment",
                many.len(),
                many.join(", ")
            ))),
        }
    }
}
