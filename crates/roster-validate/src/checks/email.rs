//! Email-format rule.

use std::sync::LazyLock;

use regex::Regex;
use roster_model::RuleViolation;

/// Accepted address grammar: local part of word characters, hyphens,
/// underscores and periods, not ending in a period; one `@`; two or three
/// word-character domain labels; final character a word character.
///
/// The original grammar opens with a `(?!\.)` look-ahead forbidding a
/// leading period in the local part. The `regex` crate has no look-around,
/// so that clause lives in [`check_email_format`] as an explicit guard.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\-_.]*[^.]@\w+\.\w+(?:\.\w+)?[^.\W]$").expect("valid email pattern")
});

/// Check that `email` is non-empty and matches the accepted grammar.
///
/// Only called after the required-field rule, so the value is known to be
/// text.
pub fn check_email_format(email: &str) -> Result<(), RuleViolation> {
    if !email.is_empty() && !email.starts_with('.') && EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(RuleViolation::InvalidEmailFormat)
    }
}
