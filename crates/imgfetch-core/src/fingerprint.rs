//! Content fingerprinting for exact-duplicate detection.
//!
//! A fingerprint is the SHA-256 of the full response body, hex-encoded.
//! The set lives for one batch (process run); nothing is persisted.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Compute the SHA-256 of `bytes` as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Set of content fingerprints seen so far in this run.
///
/// Owned by the driver and passed `&mut` into each pipeline call so the
/// sharing across the batch stays explicit. Fingerprints are never removed.
#[derive(Debug, Default)]
pub struct FingerprintSet {
    seen: HashSet<String>,
}

impl FingerprintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint `bytes` and record it. Returns `false` (set unchanged) if
    /// the fingerprint was already present, `true` if it was newly inserted.
    pub fn insert_if_absent(&mut self, bytes: &[u8]) -> bool {
        self.seen.insert(sha256_hex(bytes))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
