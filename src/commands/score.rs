//! `plagiscan score` command - plagiarism score of a new submission

use std::path::Path;

use plagiscan_core::error::{PlagiscanError, Result};
use plagiscan_core::format::records_value;
use plagiscan_core::report::RiskLevel;
use plagiscan_core::{score_submission_detailed, Submission};
use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use crate::commands::helpers::read_text;

/// Execute the score command
///
/// `history` is the assignment's submissions as they stood before this one
/// was handed in.
pub fn execute(
    cli: &Cli,
    assignment_id: &str,
    student_id: &str,
    file: &Path,
    history: &[Submission],
) -> Result<()> {
    let text = read_text(file)?;
    let outcome = score_submission_detailed(&text, assignment_id, student_id, history)?;
    let risk = RiskLevel::from_score(outcome.score);

    output_by_format_result!(cli.format,
        json => {
            print_json(&json!({
                "assignment_id": assignment_id,
                "student_id": student_id,
                "file": file.display().to_string(),
                "score": outcome.score,
                "similarity": outcome.precise,
                "risk": risk,
                "best_match": outcome.best_match,
                "compared": outcome.compared,
            }))?;
            Ok::<(), PlagiscanError>(())
        },
        human => {
            println!("Plagiarism score: {}% ({} risk)", outcome.score, risk);
            if !cli.quiet {
                match &outcome.best_match {
                    Some(id) => println!(
                        "Closest match: {} (compared against {} submissions)",
                        id, outcome.compared
                    ),
                    None => println!("No earlier submissions from other students to compare"),
                }
            }
        },
        records => {
            print_records_header("score", &[("assignment", &records_value(assignment_id))]);
            println!(
                "S student={} score={} similarity={:.2} risk={} compared={} best={}",
                records_value(student_id),
                outcome.score,
                outcome.precise,
                risk,
                outcome.compared,
                outcome.best_match.as_deref().unwrap_or("-")
            );
        }
    )
}
