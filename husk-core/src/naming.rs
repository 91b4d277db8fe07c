//! Shared naming helpers for code generation.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "score" -> "Score", "myField" -> "MyField").
///
/// Used for Go exported identifiers and Java accessor names, where only
/// the leading character changes case.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("score"), "Score");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("myField"), "MyField");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_keeps_underscores() {
        // Only the first character changes; no word splitting.
        assert_eq!(capitalize("my_field"), "My_field");
    }
}
