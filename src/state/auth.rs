//! Client-side credential check. Nothing is verified against a server.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r".+@.+\..+").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialIssue {
    #[error("Email address is not valid")]
    InvalidEmail,
    #[error("Password must have at least {} characters", MIN_PASSWORD_LEN)]
    ShortPassword,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email.trim()))
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Accepts any well-formed email with a password of at least six characters.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), CredentialIssue> {
    if !is_valid_email(email) {
        return Err(CredentialIssue::InvalidEmail);
    }
    if !is_valid_password(password) {
        return Err(CredentialIssue::ShortPassword);
    }
    Ok(())
}
