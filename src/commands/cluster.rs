//! `plagiscan cluster` command - group similar submissions for review

use plagiscan_core::cluster::{cluster_submissions_with, Cluster, ClusterOptions};
use plagiscan_core::error::{PlagiscanError, Result};
use plagiscan_core::format::records_value;
use plagiscan_core::Submission;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

/// Execute the cluster command
pub fn execute(
    cli: &Cli,
    assignment_id: &str,
    submissions: &[Submission],
    options: &ClusterOptions,
) -> Result<()> {
    let clusters = cluster_submissions_with(submissions, options)?;

    output_by_format_result!(cli.format,
        json => {
            print_json(&json!({
                "assignment_id": assignment_id,
                "threshold": options.threshold,
                "clusters": clusters,
            }))?;
            Ok::<(), PlagiscanError>(())
        },
        human => {
            print_clusters_human(cli, assignment_id, &clusters, options.threshold);
        },
        records => {
            let threshold = options.threshold.to_string();
            print_records_header(
                "cluster",
                &[
                    ("assignment", &records_value(assignment_id)),
                    ("threshold", &threshold),
                ],
            );
            print_clusters_records(&clusters);
        }
    )
}

/// Human-readable cluster listing, shared with the report command
pub fn print_clusters_human(cli: &Cli, assignment_id: &str, clusters: &[Cluster], threshold: u8) {
    if clusters.is_empty() {
        if !cli.quiet {
            println!(
                "No similar submissions at or above {}% in {}",
                threshold, assignment_id
            );
        }
        return;
    }

    for (index, cluster) in clusters.iter().enumerate() {
        println!(
            "Cluster {} - {}% similar, {} submissions",
            index + 1,
            cluster.score,
            cluster.len()
        );
        println!("  Students: {}", cluster.student_names.join(", "));
        if !cli.quiet {
            let ids: Vec<&str> = cluster.submission_ids().collect();
            println!("  Submissions: {}", ids.join(", "));
            if let Some(fingerprint) = &cluster.fingerprint {
                let short = fingerprint.get(..12).unwrap_or(fingerprint);
                println!("  Identical content: {}", short);
            }
        }
    }
}

/// Records lines for clusters: one C line per cluster, one M line per member
pub fn print_clusters_records(clusters: &[Cluster]) {
    for (index, cluster) in clusters.iter().enumerate() {
        println!(
            "C cluster={} score={} similarity={:.2} size={} fingerprint={}",
            index + 1,
            cluster.score,
            cluster.similarity,
            cluster.len(),
            cluster.fingerprint.as_deref().unwrap_or("-")
        );
        for member in &cluster.members {
            println!(
                "M cluster={} id={} student={} name={}",
                index + 1,
                records_value(&member.submission_id),
                records_value(&member.student_id),
                records_value(&member.student_name)
            );
        }
    }
}
