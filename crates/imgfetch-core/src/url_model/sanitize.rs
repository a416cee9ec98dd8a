//! Linux-safe filename sanitization.

/// Sanitizes a candidate filename for safe use on Linux.
///
/// - Replaces NUL, `/`, `\`, whitespace, and control characters with `_`
/// - Trims leading/trailing spaces, dots, and underscores
/// - Collapses consecutive underscores
/// - Limits length to 255 bytes (Linux NAME_MAX)
pub fn sanitize_filename_for_linux(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let replacement = if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            '_'
        } else if c == ' ' || c == '\t' {
            '_'
        } else {
            c
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '\t' || c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_slash_and_backslash() {
        assert_eq!(sanitize_filename_for_linux("a/b\\c.png"), "a_b_c.png");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(
            sanitize_filename_for_linux("  ..  photo.jpg  ..  "),
            "photo.jpg"
        );
    }

    #[test]
    fn collapses_underscores() {
        assert_eq!(
            sanitize_filename_for_linux("img___name.gif"),
            "img_name.gif"
        );
    }

    #[test]
    fn collapses_underscores_mixed_with_replacements() {
        // Literal underscores adjacent to replaced chars collapse too.
        assert_eq!(sanitize_filename_for_linux("img_ _name.gif"), "img_name.gif");
        assert_eq!(sanitize_filename_for_linux("a__/b.png"), "a_b.png");
    }

    #[test]
    fn control_chars() {
        assert_eq!(
            sanitize_filename_for_linux("img\x00name.png"),
            "img_name.png"
        );
    }

    #[test]
    fn length_capped_at_name_max() {
        let long = "a".repeat(300);
        assert_eq!(sanitize_filename_for_linux(&long).len(), 255);
    }
}
