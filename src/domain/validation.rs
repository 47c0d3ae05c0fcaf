// src/domain/validation.rs
use crate::constants::{MIN_BODY_LENGTH, MIN_TITLE_LENGTH};
use std::fmt;

pub const TITLE_ERROR_MESSAGE: &str = "Title must be at least 3 characters long";
pub const BODY_ERROR_MESSAGE: &str = "Content must be at least 10 characters long";

/// Outcome of the client-side length checks on a title/body pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValidation {
    pub title_valid: bool,
    pub body_valid: bool,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.title_valid && self.body_valid
    }

    /// Inline messages for every failing field, title first.
    pub fn messages(&self) -> Vec<&'static str> {
        let mut messages = Vec::new();
        if !self.title_valid {
            messages.push(TITLE_ERROR_MESSAGE);
        }
        if !self.body_valid {
            messages.push(BODY_ERROR_MESSAGE);
        }
        messages
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

pub fn title_is_valid(title: &str) -> bool {
    title.chars().count() >= MIN_TITLE_LENGTH
}

pub fn body_is_valid(body: &str) -> bool {
    body.chars().count() >= MIN_BODY_LENGTH
}

/// Check both fields. Pure; used for live feedback and for gating submission.
pub fn validate(title: &str, body: &str) -> FormValidation {
    FormValidation {
        title_valid: title_is_valid(title),
        body_valid: body_is_valid(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("Hi", false)]
    #[case("Hey", true)]
    #[case("Équipe", true)]
    #[case("日本", false)]
    fn test_title_minimum_length(#[case] title: &str, #[case] expected: bool) {
        assert_eq!(title_is_valid(title), expected);
    }

    #[rstest]
    #[case("short", false)]
    #[case("123456789", false)]
    #[case("1234567890", true)]
    #[case("a much longer note body", true)]
    fn test_body_minimum_length(#[case] body: &str, #[case] expected: bool) {
        assert_eq!(body_is_valid(body), expected);
    }

    #[test]
    fn given_short_title_and_valid_body_when_validating_then_only_title_fails() {
        // Act
        let result = validate("Hi", "This body is long enough");

        // Assert
        assert!(!result.title_valid);
        assert!(result.body_valid);
        assert!(!result.is_valid());
        assert_eq!(result.messages(), vec![TITLE_ERROR_MESSAGE]);
    }

    #[test]
    fn given_whitespace_padding_when_validating_then_counts_raw_length() {
        let result = validate("   ", "          ");

        assert!(result.is_valid());
    }
}
