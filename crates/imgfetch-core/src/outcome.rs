//! Terminal result of processing one URL.

use std::fmt;
use std::path::PathBuf;

/// Outcome of one pipeline call. Every call site handles all four variants;
/// none of them abort the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Image fetched and written; carries the resolved destination path.
    Saved(PathBuf),
    /// Response was not an image; carries the reported Content-Type
    /// (empty string when the header was absent).
    SkippedNotImage(String),
    /// Byte-identical content was already saved earlier in this run.
    SkippedDuplicate,
    /// Network or filesystem failure; carries a human-readable detail.
    Failed(String),
}

impl Outcome {
    /// True for `Saved`.
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Saved(path) => write!(f, "saved to {}", path.display()),
            Outcome::SkippedNotImage(ct) => {
                write!(f, "skipped (not an image, Content-Type={})", ct)
            }
            Outcome::SkippedDuplicate => write!(f, "skipped duplicate"),
            Outcome::Failed(detail) => write!(f, "failed: {}", detail),
        }
    }
}
