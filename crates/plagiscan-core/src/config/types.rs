//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default minimum similarity that links two submissions into a cluster
pub const DEFAULT_CLUSTER_THRESHOLD: u8 = 70;

/// Default stored score at or above which a submission is flagged for review
pub const DEFAULT_FLAG_THRESHOLD: u8 = 50;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pairwise similarity percentage (0-100) that links two submissions
    #[serde(default = "default_cluster_threshold")]
    pub cluster_threshold: u8,

    /// Stored plagiarism score (0-100) at or above which a submission is flagged
    #[serde(default = "default_flag_threshold")]
    pub flag_threshold: u8,

    /// Never link two submissions from the same student when clustering
    #[serde(default = "default_ignore_same_student")]
    pub ignore_same_student: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cluster_threshold: default_cluster_threshold(),
            flag_threshold: default_flag_threshold(),
            ignore_same_student: default_ignore_same_student(),
        }
    }
}

fn default_cluster_threshold() -> u8 {
    DEFAULT_CLUSTER_THRESHOLD
}

fn default_flag_threshold() -> u8 {
    DEFAULT_FLAG_THRESHOLD
}

fn default_ignore_same_student() -> bool {
    true
}
