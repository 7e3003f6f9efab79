//! Clustering of mutually similar submissions for teacher review
//!
//! Every pair of submissions whose similarity meets the threshold is linked,
//! and each connected component of two or more submissions becomes a
//! cluster. A threshold of 100 groups only submissions with identical
//! vocabularies. Clusters are recomputed on every call and never stored.

mod fingerprint;
mod union_find;

pub use fingerprint::{content_fingerprint, shared_fingerprint};
pub use union_find::UnionFind;

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::{EngineConfig, DEFAULT_CLUSTER_THRESHOLD};
use crate::error::Result;
use crate::similarity::{find_similar_pairs, round_score};
use crate::submission::Submission;
use crate::trace_time;

/// Options controlling how clusters are formed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterOptions {
    /// Minimum similarity percentage (0-100) that links two submissions
    pub threshold: u8,
    /// Never link two submissions from the same student
    pub ignore_same_student: bool,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        ClusterOptions {
            threshold: DEFAULT_CLUSTER_THRESHOLD,
            ignore_same_student: true,
        }
    }
}

impl From<&EngineConfig> for ClusterOptions {
    fn from(config: &EngineConfig) -> Self {
        ClusterOptions {
            threshold: config.cluster_threshold,
            ignore_same_student: config.ignore_same_student,
        }
    }
}

/// A submission inside a cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterMember {
    pub submission_id: String,
    pub student_id: String,
    pub student_name: String,
}

/// A group of two or more submissions judged similar to each other
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Representative score: highest linking similarity, rounded
    pub score: u8,
    /// Unrounded representative similarity, used for ordering
    pub similarity: f64,
    /// Distinct student names in first-seen order
    pub student_names: Vec<String>,
    /// Members in input order
    pub members: Vec<ClusterMember>,
    /// Present when all members share identical normalised content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip)]
    first_seen: usize,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the submission with `id` belongs to this cluster
    pub fn contains(&self, submission_id: &str) -> bool {
        self.members.iter().any(|m| m.submission_id == submission_id)
    }

    pub fn submission_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.submission_id.as_str())
    }
}

/// Cluster one assignment's submissions with the default options
pub fn cluster_submissions(submissions: &[Submission]) -> Result<Vec<Cluster>> {
    cluster_submissions_with(submissions, &ClusterOptions::default())
}

/// Cluster one assignment's submissions
///
/// Submissions without usable content never join a cluster. Output is sorted
/// by descending representative similarity; ties keep input order.
#[tracing::instrument(skip(submissions), fields(submissions = submissions.len()))]
pub fn cluster_submissions_with(
    submissions: &[Submission],
    options: &ClusterOptions,
) -> Result<Vec<Cluster>> {
    let start = Instant::now();
    let pairs = find_similar_pairs(submissions, options.threshold, options.ignore_same_student)?;

    let mut sets = UnionFind::new(submissions.len());
    for pair in &pairs {
        sets.union(pair.first_index, pair.second_index);
    }

    let mut best: HashMap<usize, f64> = HashMap::new();
    for pair in &pairs {
        let root = sets.find(pair.first_index);
        let entry = best.entry(root).or_insert(pair.similarity);
        if pair.similarity > *entry {
            *entry = pair.similarity;
        }
    }

    // Group members by root in input order
    let mut group_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
    for i in 0..submissions.len() {
        let root = sets.find(i);
        if sets.set_size(root) < 2 {
            continue;
        }
        let slot = *group_of_root.entry(root).or_insert_with(|| {
            groups.push((root, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(i);
    }

    let mut clusters: Vec<Cluster> = groups
        .into_iter()
        .map(|(root, indices)| {
            let similarity = best.get(&root).copied().unwrap_or(0.0);
            build_cluster(submissions, &indices, similarity)
        })
        .collect();

    clusters.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.first_seen.cmp(&b.first_seen))
    });

    debug!(
        threshold = options.threshold,
        linked_pairs = pairs.len(),
        clusters = clusters.len(),
        "cluster_submissions"
    );
    trace_time!(start, "cluster_submissions");

    Ok(clusters)
}

fn build_cluster(submissions: &[Submission], indices: &[usize], similarity: f64) -> Cluster {
    let mut student_names: Vec<String> = Vec::new();
    let mut members = Vec::with_capacity(indices.len());

    for &i in indices {
        let sub = &submissions[i];
        if !student_names.contains(&sub.student_name) {
            student_names.push(sub.student_name.clone());
        }
        members.push(ClusterMember {
            submission_id: sub.id.clone(),
            student_id: sub.student_id.clone(),
            student_name: sub.student_name.clone(),
        });
    }

    Cluster {
        score: round_score(similarity),
        similarity,
        student_names,
        members,
        fingerprint: shared_fingerprint(indices.iter().map(|&i| &submissions[i])),
        first_seen: indices.first().copied().unwrap_or(0),
    }
}
