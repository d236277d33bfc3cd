//! Identifier and label sanitization shared by the diagram emitters.

/// Sanitize an identifier for diagram markup: every character outside
/// `[A-Za-z0-9_]` becomes `_`.
#[must_use]
pub fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Derive a Terraform resource name from an item id: only the first hyphen
/// is replaced with an underscore. This is a narrow transformation matched
/// to how the canvas assigns ids, not general sanitization.
#[must_use]
pub fn tf_resource_name(id: &str) -> String {
    id.replacen('-', "_", 1)
}

/// Make a label safe to embed in a double-quoted markup string.
#[must_use]
pub fn escape_label(label: &str) -> String {
    label.replace('"', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_id_replaces_everything_else() {
        assert_eq!(sanitize_id("shape:c1.web"), "shape_c1_web");
        assert_eq!(sanitize_id("a-b c"), "a_b_c");
        assert_eq!(sanitize_id("ok_123"), "ok_123");
    }

    #[test]
    fn test_sanitized_output_matches_charset() {
        let out = sanitize_id("weird!@#$%^&*() id");
        assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        assert!(!out.is_empty());
    }

    #[test]
    fn test_tf_resource_name_first_hyphen_only() {
        assert_eq!(tf_resource_name("shape-c1-web"), "shape_c1-web");
        assert_eq!(tf_resource_name("vpc1"), "vpc1");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label(r#"say "hi""#), "say 'hi'");
    }
}
