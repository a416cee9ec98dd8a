//! Per-URL fetch/validate/deduplicate/persist pipeline.
//!
//! Each call is a linear sequence of abortable steps ending in exactly one
//! [`Outcome`]. Nothing here aborts the batch: every failure is folded into
//! `Outcome::Failed` and the driver moves on to the next URL.

use crate::fetch::{self, FetchOptions};
use crate::fingerprint::FingerprintSet;
use crate::outcome::Outcome;
use crate::storage;
use crate::url_model;
use std::path::Path;

/// Prefix a reported Content-Type must carry to be accepted.
const IMAGE_PREFIX: &str = "image/";

/// Fetches `url` and persists it under `dest_dir`, deduplicating by content
/// against `seen`.
///
/// `url` must be non-empty and already trimmed; the driver filters empty
/// segments before calling. `seen` is shared across the whole batch and is
/// mutated here: the fingerprint of a new body is inserted before the write,
/// so a later identical body is reported as a duplicate even if this write
/// fails (deliberate, see module tests in `tests/integration_fetch.rs`).
///
/// Creates at most one file per call and never panics on bad input.
pub fn fetch_image(
    url: &str,
    seen: &mut FingerprintSet,
    dest_dir: &Path,
    options: &FetchOptions,
) -> Outcome {
    let response = match fetch::fetch(url, options) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(url, error = %e, "fetch failed");
            return Outcome::Failed(e.to_string());
        }
    };

    if !response.content_type.starts_with(IMAGE_PREFIX) {
        tracing::info!(url, content_type = %response.content_type, "not an image, skipped");
        return Outcome::SkippedNotImage(response.content_type);
    }

    // Insert before writing: a later identical body is a duplicate even if
    // the write below fails.
    if !seen.insert_if_absent(&response.body) {
        tracing::info!(url, "duplicate content, skipped");
        return Outcome::SkippedDuplicate;
    }

    let filename = url_model::derive_filename(url);
    let path = storage::resolve_destination(dest_dir, &filename);

    match storage::write_new(&path, &response.body) {
        Ok(()) => {
            tracing::info!(url, path = %path.display(), "image saved");
            Outcome::Saved(path)
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "write failed");
            Outcome::Failed(format!("{:#}", e))
        }
    }
}
