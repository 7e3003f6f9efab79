//! Submission data model
//!
//! Field names serialize in camelCase so snapshots exported by the portal
//! load without translation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::text::has_tokens;

/// One student's attempt at one assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub student_name: String,

    #[serde(default)]
    pub roll_number: String,

    /// Extracted text; absent for non-text uploads such as PDFs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    /// Stored once at creation, never recomputed by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plagiarism_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Submission {
    /// Create a submission with no content and no stored score
    pub fn new(
        id: impl Into<String>,
        assignment_id: impl Into<String>,
        student_id: impl Into<String>,
        student_name: impl Into<String>,
    ) -> Self {
        Submission {
            id: id.into(),
            assignment_id: assignment_id.into(),
            student_id: student_id.into(),
            student_name: student_name.into(),
            roll_number: String::new(),
            file_content: None,
            file_url: None,
            plagiarism_score: None,
            submitted_at: None,
            marks: None,
            feedback: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.file_content = Some(content.into());
        self
    }

    pub fn with_roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = roll_number.into();
        self
    }

    pub fn with_score(mut self, score: u8) -> Self {
        self.plagiarism_score = Some(score);
        self
    }

    /// Text content if it holds at least one token
    pub fn usable_content(&self) -> Option<&str> {
        self.file_content
            .as_deref()
            .filter(|content| has_tokens(content))
    }

    pub fn has_usable_content(&self) -> bool {
        self.usable_content().is_some()
    }

    /// Stored plagiarism score, treating a missing score as 0
    pub fn score_or_zero(&self) -> u8 {
        self.plagiarism_score.unwrap_or(0)
    }
}

/// Check that a submission set belongs to one assignment and has unique ids
///
/// All-to-all sweeps require this; violating it is a caller bug.
pub fn ensure_single_assignment(submissions: &[Submission]) -> Result<()> {
    let mut seen_ids = HashSet::new();
    let mut assignment: Option<&str> = None;

    for sub in submissions {
        match assignment {
            None => assignment = Some(sub.assignment_id.as_str()),
            Some(expected) if expected != sub.assignment_id => {
                crate::bail_input!(
                    "submission set",
                    format!(
                        "submissions span assignments '{}' and '{}'",
                        expected, sub.assignment_id
                    )
                );
            }
            Some(_) => {}
        }

        if !seen_ids.insert(sub.id.as_str()) {
            crate::bail_input!(
                "submission set",
                format!("duplicate submission id '{}'", sub.id)
            );
        }
    }

    Ok(())
}
