//! Destination placement and binary persistence.
//!
//! Collision-safe naming: if `<dir>/<filename>` already exists, probe
//! `<stem>_<n><ext>` for n = 1, 2, 3, … until an unused path is found.
//! The existence probe is exists-then-write; this is only sound because
//! the batch runs single-threaded.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Picks an unused path under `dir` for `filename`, appending a numeric
/// suffix to the stem on collision (`photo.jpg` → `photo_1.jpg` → …).
pub fn resolve_destination(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(filename);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    let ext = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1u32;
    loop {
        let probe = dir.join(format!("{}_{}{}", stem, counter, ext));
        if !probe.exists() {
            return probe;
        }
        counter += 1;
    }
}

/// Writes `bytes` to a new file at `path` in binary mode. Fails if the path
/// already exists (the caller resolved it against collisions just before).
pub fn write_new(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("create {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
