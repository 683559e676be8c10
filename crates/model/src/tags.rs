//! Conversions between a tag list and its comma-separated form

/// Separator used when showing tags in a single text field
pub const TAG_SEPARATOR: &str = ", ";

/// Join tags for display in the form
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

/// Split a comma-separated tag string, trimming each entry and dropping blanks
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_uses_comma_space() {
        assert_eq!(join_tags(&["shirt", "cotton"]), "shirt, cotton");
        assert_eq!(join_tags::<&str>(&[]), "");
    }

    #[test]
    fn test_split_trims_and_drops_blanks() {
        assert_eq!(split_tags(" a ,b,, c "), vec!["a", "b", "c"]);
        assert!(split_tags("  ").is_empty());
    }

    #[test]
    fn test_join_then_split_preserves_order() {
        let tags = vec![
            "summer".to_string(),
            "cotton".to_string(),
            "men".to_string(),
        ];
        assert_eq!(split_tags(&join_tags(&tags)), tags);
    }
}
