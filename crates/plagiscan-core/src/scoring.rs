//! Plagiarism score for a newly arriving submission
//!
//! The score is the highest similarity between the new text and any prior
//! submission to the same assignment by a different student. The caller
//! passes the history as it was before the new submission was added.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::similarity::{round_score, similarity_of_sets};
use crate::submission::Submission;
use crate::text::TokenSet;
use crate::trace_time;

/// Detailed result of scoring one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    /// Rounded plagiarism score (0-100)
    pub score: u8,
    /// Unrounded maximum similarity
    pub precise: f64,
    /// ID of the prior submission that produced the maximum, if any was compared
    pub best_match: Option<String>,
    /// Number of prior submissions compared against
    pub compared: usize,
}

impl ScoreOutcome {
    fn empty() -> Self {
        ScoreOutcome {
            score: 0,
            precise: 0.0,
            best_match: None,
            compared: 0,
        }
    }
}

/// Compute the plagiarism score for `new_text`
///
/// Returns 0 when there is nothing to compare against. Blank assignment or
/// submitter ids are rejected once there is history to filter.
pub fn score_submission(
    new_text: &str,
    assignment_id: &str,
    submitter_id: &str,
    prior: &[Submission],
) -> Result<u8> {
    score_submission_detailed(new_text, assignment_id, submitter_id, prior).map(|o| o.score)
}

/// Like [`score_submission`] but also reports which prior submission matched
#[tracing::instrument(skip(new_text, prior), fields(prior = prior.len()))]
pub fn score_submission_detailed(
    new_text: &str,
    assignment_id: &str,
    submitter_id: &str,
    prior: &[Submission],
) -> Result<ScoreOutcome> {
    let start = Instant::now();

    if prior.is_empty() {
        debug!("no prior submissions");
        return Ok(ScoreOutcome::empty());
    }

    if assignment_id.trim().is_empty() {
        crate::bail_input!("score", "assignment id must not be blank");
    }
    if submitter_id.trim().is_empty() {
        crate::bail_input!("score", "submitter id must not be blank");
    }

    let candidates: Vec<(&Submission, &str)> = prior
        .iter()
        .filter(|s| s.assignment_id == assignment_id && s.student_id != submitter_id)
        .filter_map(|s| s.usable_content().map(|c| (s, c)))
        .collect();

    if candidates.is_empty() {
        debug!("no comparable history");
        return Ok(ScoreOutcome::empty());
    }

    let new_set = TokenSet::from_text(new_text);
    let mut outcome = ScoreOutcome::empty();

    for (sub, content) in &candidates {
        let score = similarity_of_sets(&new_set, &TokenSet::from_text(content));
        // Strictly greater keeps the first-seen match on ties
        if outcome.best_match.is_none() || score > outcome.precise {
            outcome.precise = score;
            outcome.best_match = Some(sub.id.clone());
        }
    }

    outcome.compared = candidates.len();
    outcome.score = round_score(outcome.precise);

    debug!(
        compared = outcome.compared,
        score = outcome.score,
        best_match = ?outcome.best_match,
        "score_submission"
    );
    trace_time!(start, "score_submission");

    Ok(outcome)
}
