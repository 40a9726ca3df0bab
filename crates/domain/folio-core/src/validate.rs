//! Client-side checks run before a draft is handed to the delivery bridge.
//!
//! The email check is deliberately lax: it accepts anything shaped like
//! `local@domain.tld` and does not try to follow RFC 5322.

use regex::Regex;
use std::sync::OnceLock;

use crate::{Draft, DraftField};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(DraftField),
    #[error("email address is not valid")]
    InvalidEmail,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Returns the first rule the draft breaks. Subject is never checked.
pub fn check(draft: &Draft) -> Result<(), ValidationError> {
    if let Some(field) = DraftField::REQUIRED
        .into_iter()
        .find(|f| draft.get(*f).trim().is_empty())
    {
        return Err(ValidationError::MissingField(field));
    }

    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate(draft: &Draft) -> bool {
    check(draft).is_ok()
}
