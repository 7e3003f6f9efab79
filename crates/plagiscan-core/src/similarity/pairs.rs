use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::validate_threshold;
use crate::error::Result;
use crate::similarity::{round_score, similarity_of_sets};
use crate::submission::{ensure_single_assignment, Submission};
use crate::text::TokenSet;
use crate::trace_time;

/// Two submissions whose similarity met the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPair {
    /// Submission ID of the earlier submission in input order
    pub first: String,
    /// Submission ID of the later submission in input order
    pub second: String,
    #[serde(skip)]
    pub first_index: usize,
    #[serde(skip)]
    pub second_index: usize,
    /// Similarity percentage (0.0 to 100.0)
    pub similarity: f64,
}

impl SimilarPair {
    /// Similarity rounded to a whole percentage
    pub fn score(&self) -> u8 {
        round_score(self.similarity)
    }
}

/// Find all pairs of submissions with similarity >= `threshold` percent
///
/// Submissions without usable content are skipped. When `ignore_same_student`
/// is set, two submissions from the same student are never paired. Results
/// are sorted by similarity in descending order, ties in input order.
#[tracing::instrument(skip(submissions), fields(submissions = submissions.len()))]
pub fn find_similar_pairs(
    submissions: &[Submission],
    threshold: u8,
    ignore_same_student: bool,
) -> Result<Vec<SimilarPair>> {
    let start = Instant::now();
    validate_threshold("cluster threshold", threshold)?;
    ensure_single_assignment(submissions)?;

    // Tokenize each document once
    let candidates: Vec<(usize, TokenSet)> = submissions
        .iter()
        .enumerate()
        .filter_map(|(i, sub)| sub.usable_content().map(|c| (i, TokenSet::from_text(c))))
        .collect();

    let threshold = f64::from(threshold);
    let mut pairs = Vec::new();
    let mut compared = 0usize;

    for a in 0..candidates.len() {
        for b in a + 1..candidates.len() {
            let (i, set_i) = &candidates[a];
            let (j, set_j) = &candidates[b];
            if ignore_same_student && submissions[*i].student_id == submissions[*j].student_id {
                continue;
            }

            compared += 1;
            let score = similarity_of_sets(set_i, set_j);
            if score >= threshold {
                pairs.push(SimilarPair {
                    first: submissions[*i].id.clone(),
                    second: submissions[*j].id.clone(),
                    first_index: *i,
                    second_index: *j,
                    similarity: score,
                });
            }
        }
    }

    // Stable sort keeps input order among equal scores
    pairs.sort_by(|x, y| y.similarity.total_cmp(&x.similarity));

    debug!(
        candidates = candidates.len(),
        compared,
        linked = pairs.len(),
        "find_similar_pairs"
    );
    trace_time!(start, "find_similar_pairs");

    Ok(pairs)
}
