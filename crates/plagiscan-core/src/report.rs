//! Assignment-level plagiarism report
//!
//! Summarises the stored scores of one assignment's submissions (risk
//! bands, distribution, flagged submissions) next to a fresh clustering.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::cluster::{cluster_submissions_with, Cluster, ClusterOptions};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::submission::{ensure_single_assignment, Submission};

/// Scores above this count as high plagiarism in the summary
pub const HIGH_SCORE_CUTOFF: u8 = 50;

/// Risk band for a single score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// 0-30
    Low,
    /// 31-60
    Medium,
    /// 61-100
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => RiskLevel::Low,
            31..=60 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Number of submissions per 20-point score bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    #[serde(rename = "0-20")]
    pub up_to_20: usize,
    #[serde(rename = "21-40")]
    pub up_to_40: usize,
    #[serde(rename = "41-60")]
    pub up_to_60: usize,
    #[serde(rename = "61-80")]
    pub up_to_80: usize,
    #[serde(rename = "81-100")]
    pub up_to_100: usize,
}

impl ScoreDistribution {
    pub fn record(&mut self, score: u8) {
        match score {
            0..=20 => self.up_to_20 += 1,
            21..=40 => self.up_to_40 += 1,
            41..=60 => self.up_to_60 += 1,
            61..=80 => self.up_to_80 += 1,
            _ => self.up_to_100 += 1,
        }
    }

    /// Buckets as (label, count) in ascending order
    pub fn buckets(&self) -> [(&'static str, usize); 5] {
        [
            ("0-20", self.up_to_20),
            ("21-40", self.up_to_40),
            ("41-60", self.up_to_60),
            ("61-80", self.up_to_80),
            ("81-100", self.up_to_100),
        ]
    }
}

/// A submission whose stored score reached the flag threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedSubmission {
    pub submission_id: String,
    pub student_name: String,
    pub roll_number: String,
    pub score: u8,
    pub risk: RiskLevel,
}

/// Plagiarism overview of one assignment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentReport {
    pub assignment_id: String,
    pub total: usize,
    pub with_content: usize,
    /// Scores strictly above [`HIGH_SCORE_CUTOFF`]
    pub high: usize,
    pub distribution: ScoreDistribution,
    pub flag_threshold: u8,
    pub flagged: Vec<FlaggedSubmission>,
    pub cluster_threshold: u8,
    pub clusters: Vec<Cluster>,
}

/// Build the report for one assignment's submissions
///
/// Missing stored scores count as 0.
pub fn build_report(
    assignment_id: &str,
    submissions: &[Submission],
    config: &EngineConfig,
) -> Result<AssignmentReport> {
    config.validate()?;
    ensure_single_assignment(submissions)?;
    if let Some(other) = submissions.iter().find(|s| s.assignment_id != assignment_id) {
        crate::bail_input!(
            "report",
            format!(
                "submission '{}' belongs to assignment '{}', not '{}'",
                other.id, other.assignment_id, assignment_id
            )
        );
    }

    let mut distribution = ScoreDistribution::default();
    let mut flagged = Vec::new();
    for sub in submissions {
        let score = sub.score_or_zero();
        distribution.record(score);
        if score >= config.flag_threshold {
            flagged.push(FlaggedSubmission {
                submission_id: sub.id.clone(),
                student_name: sub.student_name.clone(),
                roll_number: sub.roll_number.clone(),
                score,
                risk: RiskLevel::from_score(score),
            });
        }
    }
    flagged.sort_by(|a, b| b.score.cmp(&a.score));

    let clusters = cluster_submissions_with(submissions, &ClusterOptions::from(config))?;

    let report = AssignmentReport {
        assignment_id: assignment_id.to_string(),
        total: submissions.len(),
        with_content: submissions.iter().filter(|s| s.has_usable_content()).count(),
        high: submissions
            .iter()
            .filter(|s| s.score_or_zero() > HIGH_SCORE_CUTOFF)
            .count(),
        distribution,
        flag_threshold: config.flag_threshold,
        flagged,
        cluster_threshold: config.cluster_threshold,
        clusters,
    };

    debug!(
        assignment = assignment_id,
        total = report.total,
        flagged = report.flagged.len(),
        clusters = report.clusters.len(),
        "build_report"
    );

    Ok(report)
}
