// codegen/src/utils.rs

/// Capitalize the first letter of a string
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Returns the first `{{...}}` placeholder left in `source`, if any.
///
/// Used after template substitution: a surviving placeholder means the
/// derived-name record did not cover the template, which is a render failure.
pub fn find_unrendered_placeholder(source: &str) -> Option<&str> {
    let start = source.find("{{")?;
    let rest = &source[start..];
    match rest.find("}}") {
        Some(end) => Some(&rest[..end + 2]),
        None => Some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("audio"), "Audio");
        assert_eq!(capitalize("blockquote"), "Blockquote");
        assert_eq!(capitalize(""), "");
        // Only the first character is touched.
        assert_eq!(capitalize("bGcolor"), "BGcolor");
    }

    #[test]
    fn test_find_unrendered_placeholder() {
        assert_eq!(find_unrendered_placeholder("pub struct AudioElem {}"), None);
        assert_eq!(
            find_unrendered_placeholder("pub struct {{ELEM_TYPE}} {}"),
            Some("{{ELEM_TYPE}}")
        );
        // An unterminated marker still reports.
        assert_eq!(find_unrendered_placeholder("tail {{oops"), Some("{{oops"));
    }
}
