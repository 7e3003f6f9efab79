//! `plagiscan report` command - plagiarism overview of one assignment

use plagiscan_core::config::EngineConfig;
use plagiscan_core::error::{PlagiscanError, Result};
use plagiscan_core::format::records_value;
use plagiscan_core::report::{build_report, AssignmentReport, HIGH_SCORE_CUTOFF};
use plagiscan_core::Submission;

use crate::cli::Cli;
use crate::commands::cluster::{print_clusters_human, print_clusters_records};
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

/// Execute the report command
pub fn execute(
    cli: &Cli,
    assignment_id: &str,
    submissions: &[Submission],
    config: &EngineConfig,
) -> Result<()> {
    let report = build_report(assignment_id, submissions, config)?;

    output_by_format_result!(cli.format,
        json => {
            print_json(&report)?;
            Ok::<(), PlagiscanError>(())
        },
        human => {
            print_human(cli, &report);
        },
        records => {
            print_records(&report);
        }
    )
}

fn print_human(cli: &Cli, report: &AssignmentReport) {
    println!("Assignment: {}", report.assignment_id);
    println!(
        "Submissions: {} ({} with text content)",
        report.total, report.with_content
    );
    println!(
        "High plagiarism (> {}%): {}",
        HIGH_SCORE_CUTOFF, report.high
    );

    if !cli.quiet {
        println!();
        println!("Score distribution:");
        for (label, count) in report.distribution.buckets() {
            println!("  {:>6}%  {}", label, count);
        }
    }

    println!();
    if report.flagged.is_empty() {
        println!("No submissions at or above {}%", report.flag_threshold);
    } else {
        println!("Flagged (>= {}%):", report.flag_threshold);
        for flagged in &report.flagged {
            let roll = if flagged.roll_number.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flagged.roll_number)
            };
            println!(
                "  {:>3}%  {}{} ({}, {} risk)",
                flagged.score, flagged.student_name, roll, flagged.submission_id, flagged.risk
            );
        }
    }

    println!();
    print_clusters_human(
        cli,
        &report.assignment_id,
        &report.clusters,
        report.cluster_threshold,
    );
}

fn print_records(report: &AssignmentReport) {
    let total = report.total.to_string();
    let high = report.high.to_string();
    print_records_header(
        "report",
        &[
            ("assignment", &records_value(&report.assignment_id)),
            ("total", &total),
            ("with_content", &report.with_content.to_string()),
            ("high", &high),
        ],
    );

    for (label, count) in report.distribution.buckets() {
        println!("D bucket={} count={}", label, count);
    }
    for flagged in &report.flagged {
        println!(
            "F id={} name={} roll={} score={} risk={}",
            records_value(&flagged.submission_id),
            records_value(&flagged.student_name),
            records_value(&flagged.roll_number),
            flagged.score,
            flagged.risk
        );
    }
    print_clusters_records(&report.clusters);
}
