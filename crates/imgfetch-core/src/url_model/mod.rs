//! Filename derivation from URLs.
//!
//! Derives a safe local filename from the URL path, sanitized for Linux
//! filesystems, with a fixed fallback when the path yields nothing usable.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

/// Default filename when the URL path yields no usable segment.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Derives a filename for saving a fetched image.
///
/// Uses the last path segment of `url`, sanitized for Linux (no `/`, NUL, or
/// control chars; no leading/trailing dots or spaces). Falls back to
/// [`DEFAULT_FILENAME`] when the URL has no path, a root path, or the
/// sanitized segment is empty.
///
/// # Examples
///
/// - `derive_filename("https://example.com/pics/cat.png")` → `"cat.png"`
/// - `derive_filename("https://example.com/")` → `"downloaded_image.jpg"`
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_filename_from_url_path() {
        assert_eq!(
            derive_filename("https://example.com/pics/cat.png"),
            "cat.png"
        );
        assert_eq!(
            derive_filename("https://cdn.example.com/a/b/photo.jpg"),
            "photo.jpg"
        );
    }

    #[test]
    fn derive_filename_empty_path_fallback() {
        assert_eq!(derive_filename("https://example.com/"), DEFAULT_FILENAME);
        assert_eq!(derive_filename("https://example.com"), DEFAULT_FILENAME);
    }

    #[test]
    fn derive_filename_unparseable_url_fallback() {
        assert_eq!(derive_filename("not a url"), DEFAULT_FILENAME);
    }

    #[test]
    fn derive_filename_sanitizes_segment() {
        // Trailing dots are trimmed by sanitization.
        assert_eq!(derive_filename("https://example.com/photo.jpg."), "photo.jpg");
    }

    #[test]
    fn derive_filename_reserved_names_fallback() {
        assert_eq!(derive_filename("https://example.com/.."), DEFAULT_FILENAME);
    }
}
