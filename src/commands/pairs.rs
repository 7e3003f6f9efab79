//! `plagiscan pairs` command - list similar submission pairs

use plagiscan_core::cluster::ClusterOptions;
use plagiscan_core::error::{PlagiscanError, Result};
use plagiscan_core::format::records_value;
use plagiscan_core::similarity::{find_similar_pairs, SimilarPair};
use plagiscan_core::Submission;
use serde::Serialize;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

#[derive(Serialize)]
struct PairView<'a> {
    first: &'a str,
    first_student: &'a str,
    second: &'a str,
    second_student: &'a str,
    score: u8,
    similarity: f64,
}

impl<'a> PairView<'a> {
    fn new(pair: &'a SimilarPair, submissions: &'a [Submission]) -> Self {
        PairView {
            first: &pair.first,
            first_student: &submissions[pair.first_index].student_name,
            second: &pair.second,
            second_student: &submissions[pair.second_index].student_name,
            score: pair.score(),
            similarity: pair.similarity,
        }
    }
}

/// Execute the pairs command
pub fn execute(
    cli: &Cli,
    assignment_id: &str,
    submissions: &[Submission],
    options: &ClusterOptions,
) -> Result<()> {
    let pairs = find_similar_pairs(submissions, options.threshold, options.ignore_same_student)?;
    let views: Vec<PairView> = pairs
        .iter()
        .map(|pair| PairView::new(pair, submissions))
        .collect();

    output_by_format_result!(cli.format,
        json => {
            print_json(&json!({
                "assignment_id": assignment_id,
                "threshold": options.threshold,
                "pairs": views,
            }))?;
            Ok::<(), PlagiscanError>(())
        },
        human => {
            if views.is_empty() {
                if !cli.quiet {
                    println!(
                        "No pairs at or above {}% similarity in {}",
                        options.threshold, assignment_id
                    );
                }
            } else {
                for view in &views {
                    println!(
                        "{:>3}%  {} ({})  ~  {} ({})",
                        view.score,
                        view.first,
                        view.first_student,
                        view.second,
                        view.second_student
                    );
                }
            }
        },
        records => {
            let threshold = options.threshold.to_string();
            print_records_header(
                "pairs",
                &[
                    ("assignment", &records_value(assignment_id)),
                    ("threshold", &threshold),
                ],
            );
            for view in &views {
                println!(
                    "P first={} second={} score={} similarity={:.2}",
                    records_value(view.first),
                    records_value(view.second),
                    view.score,
                    view.similarity
                );
            }
        }
    )
}
