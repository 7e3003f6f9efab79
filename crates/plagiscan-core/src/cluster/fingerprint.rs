use sha2::{Digest, Sha256};

use crate::submission::Submission;
use crate::text::normalize_for_fingerprint;

/// SHA-256 hex digest of trimmed, lower-cased content
pub fn content_fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_for_fingerprint(content).as_bytes());
    hex::encode(hasher.finalize())
}

/// Shared fingerprint of a group, if every member has the same normalised content
pub fn shared_fingerprint<'a>(members: impl IntoIterator<Item = &'a Submission>) -> Option<String> {
    let mut shared: Option<String> = None;

    for sub in members {
        let fingerprint = content_fingerprint(sub.usable_content()?);
        match &shared {
            None => shared = Some(fingerprint),
            Some(existing) if *existing != fingerprint => return None,
            Some(_) => {}
        }
    }

    shared
}
