// Text normalization: compatibility decomposition with combining marks removed.
//
// "café" decomposes to "cafe" + U+0301; dropping the mark leaves "cafe", so
// accented letters score as their base letter.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// NFKD-decompose `text` and drop every combining mark.
///
/// Total over all input. Characters that are not marks (digits, punctuation,
/// whitespace, symbols) pass through in their decomposed form.
pub fn normalize_text(text: &str) -> String {
    text.nfkd().filter(|ch| !is_combining_mark(*ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_acute_accent() {
        assert_eq!(normalize_text("café"), "cafe");
        // Already-decomposed input gives the same result
        assert_eq!(normalize_text("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(normalize_text("42, ok? ∑"), "42, ok? ∑");
    }

    #[test]
    fn test_greek_tonos_removed() {
        // ά (alpha with tonos) -> α
        assert_eq!(normalize_text("ά"), "α");
    }

    #[test]
    fn test_compatibility_forms_fold() {
        // The "ﬁ" ligature expands under compatibility decomposition
        assert_eq!(normalize_text("ﬁ"), "fi");
    }

    #[test]
    fn test_lone_combining_mark_disappears() {
        assert_eq!(normalize_text("\u{0308}"), "");
    }
}
