//! Validation of table and column names embedded into SQL statements.
//!
//! Table and key column names come from configuration, so they cannot be bound
//! as query parameters. Only lowercase ASCII identifiers are accepted; they are
//! always emitted double-quoted.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase letter or underscore first, then letters, digits or underscores.
///
/// Capped at 48 characters so derived names such as `<table>_pkey` stay under
/// PostgreSQL's 63-byte identifier limit.
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]{0,47}$").unwrap());

/// Returns true if `name` may be used as a table or column name.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_identifier("short_links"));
/// assert!(!is_valid_identifier("links; DROP TABLE x"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

/// Wraps a validated identifier in double quotes.
pub fn quote(name: &str) -> String {
    format!("\"{}\"", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(is_valid_identifier("short_links"));
        assert!(is_valid_identifier("id"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("links2"));
    }

    #[test]
    fn test_rejects_injection_attempts() {
        assert!(!is_valid_identifier("links; DROP TABLE users"));
        assert!(!is_valid_identifier("links\""));
        assert!(!is_valid_identifier("a b"));
    }

    #[test]
    fn test_rejects_uppercase_and_leading_digit() {
        assert!(!is_valid_identifier("Links"));
        assert!(!is_valid_identifier("1links"));
    }

    #[test]
    fn test_rejects_empty_and_overlong() {
        assert!(!is_valid_identifier(""));
        assert!(is_valid_identifier(&"a".repeat(48)));
        assert!(!is_valid_identifier(&"a".repeat(49)));
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("user"), "\"user\"");
    }
}
