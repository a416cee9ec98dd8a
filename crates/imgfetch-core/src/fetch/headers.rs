//! Parse collected HTTP response header lines.

/// Extracts the Content-Type from collected header lines.
///
/// With redirects, curl emits the headers of every response in sequence; a
/// new `HTTP/` status line starts a fresh response, so only the final
/// response's value survives. Returns the empty string when absent.
pub(crate) fn content_type_from_lines(lines: &[String]) -> String {
    let mut content_type = String::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = value.trim().to_string();
            }
        }
    }

    content_type
}
