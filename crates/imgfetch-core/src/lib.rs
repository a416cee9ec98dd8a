pub mod logging;

pub mod fetch;
pub mod fingerprint;
pub mod outcome;
pub mod pipeline;
pub mod storage;
pub mod url_model;

/// Destination directory for fetched images, relative to the working directory.
pub const DEFAULT_DEST_DIR: &str = "Fetched_Images";
