//! Plagiscan Core Library
//!
//! Similarity scoring and clustering of student submissions: a Jaccard
//! similarity over lower-cased word sets, a max-similarity plagiarism score
//! for new submissions, and connected-component clustering for review.
//! Every operation is a pure function of the submissions passed in.

pub mod cluster;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod similarity;
pub mod snapshot;
pub mod submission;
pub mod text;

pub use cluster::{cluster_submissions, cluster_submissions_with, Cluster, ClusterOptions};
pub use scoring::{score_submission, score_submission_detailed, ScoreOutcome};
pub use similarity::{similarity, similarity_score};
pub use submission::Submission;
