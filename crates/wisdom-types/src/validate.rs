//! Boundary rules for submitted wisdom

use thiserror::Error;

/// Minimum accepted wisdom length, in characters.
pub const WISDOM_MIN_CHARS: usize = 5;

/// Maximum accepted wisdom length, in characters.
pub const WISDOM_MAX_CHARS: usize = 280;

/// Author names are cut to this many characters on write.
pub const AUTHOR_MAX_CHARS: usize = 50;

/// Author recorded when the caller supplies none.
pub const DEFAULT_AUTHOR: &str = "Anonymous Hamster";

/// Rejected submission text, with the violated bound spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WisdomRejection {
    #[error("Gerald demands more words.")]
    TooShort,
    #[error("Even Gerald has limits. 280 chars max.")]
    TooLong,
}

/// Checks the submitted text against the 5..=280 character bounds.
///
/// Lengths are counted in Unicode scalar values, not bytes, so a 280-emoji
/// submission is still in bounds.
pub fn validate_wisdom(wisdom: &str) -> Result<(), WisdomRejection> {
    let chars = wisdom.chars().count();
    if chars < WISDOM_MIN_CHARS {
        return Err(WisdomRejection::TooShort);
    }
    if chars > WISDOM_MAX_CHARS {
        return Err(WisdomRejection::TooLong);
    }
    Ok(())
}

/// Applies the author defaulting and truncation rules.
///
/// A missing or empty author becomes [`DEFAULT_AUTHOR`]; anything longer than
/// [`AUTHOR_MAX_CHARS`] keeps only its leading characters.
pub fn normalize_author(author: Option<&str>) -> String {
    match author {
        Some(name) if !name.is_empty() => name.chars().take(AUTHOR_MAX_CHARS).collect(),
        _ => DEFAULT_AUTHOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_wisdom_is_rejected() {
        assert_eq!(validate_wisdom(""), Err(WisdomRejection::TooShort));
        assert_eq!(validate_wisdom("hi"), Err(WisdomRejection::TooShort));
        assert_eq!(validate_wisdom("four"), Err(WisdomRejection::TooShort));
    }

    #[test]
    fn long_wisdom_is_rejected() {
        let long = "w".repeat(WISDOM_MAX_CHARS + 1);
        assert_eq!(validate_wisdom(&long), Err(WisdomRejection::TooLong));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(validate_wisdom(&"w".repeat(WISDOM_MIN_CHARS)), Ok(()));
        assert_eq!(validate_wisdom(&"w".repeat(WISDOM_MAX_CHARS)), Ok(()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Four hamsters are 16 bytes but still too short.
        assert_eq!(validate_wisdom("🐹🐹🐹🐹"), Err(WisdomRejection::TooShort));
        assert_eq!(validate_wisdom("🐹🐹🐹🐹🐹"), Ok(()));
    }

    #[test]
    fn rejection_messages_name_the_bound() {
        assert_eq!(
            WisdomRejection::TooShort.to_string(),
            "Gerald demands more words."
        );
        assert_eq!(
            WisdomRejection::TooLong.to_string(),
            "Even Gerald has limits. 280 chars max."
        );
    }

    #[test]
    fn missing_or_empty_author_gets_default() {
        assert_eq!(normalize_author(None), DEFAULT_AUTHOR);
        assert_eq!(normalize_author(Some("")), DEFAULT_AUTHOR);
    }

    #[test]
    fn long_author_is_truncated_to_fifty_chars() {
        let long = "a".repeat(80);
        let normalized = normalize_author(Some(&long));
        assert_eq!(normalized, "a".repeat(AUTHOR_MAX_CHARS));
    }

    #[test]
    fn short_author_passes_through() {
        assert_eq!(normalize_author(Some("Gerald")), "Gerald");
    }
}
