//! Pattern-based string expansion.
//!
//! Supports the `{id}` placeholder, replaced by the given numeric id.

/// Expand every `{id}` in `pattern`.
pub fn expand_pattern(pattern: &str, id: u32) -> String {
    pattern.replace("{id}", &id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_pattern() {
        assert_eq!(
            expand_pattern("https://picsum.photos/id/{id}/800/600.jpg", 7),
            "https://picsum.photos/id/7/800/600.jpg"
        );
    }

    #[test]
    fn test_expand_pattern_repeated_and_absent() {
        assert_eq!(expand_pattern("{id}-{id}", 3), "3-3");
        assert_eq!(expand_pattern("static.png", 3), "static.png");
    }
}
