//! Cloud Run service naming.
//!
//! Service names must be lowercase, made of `a-z`, `0-9` and `-`, and start
//! with a letter. Author handles are mapped onto that alphabet
//! deterministically so the same author always lands on the same service.

use crate::core::constants::SERVICE_PREFIX;
use crate::error::{Result, ValidationError};

/// Derive a service name from an author string.
///
/// # Errors
///
/// Returns `ValidationError::EmptyServiceName` if nothing usable is left
/// after sanitizing.
pub fn service_name(author: &str) -> Result<String> {
    let mut name = String::with_capacity(author.len() + SERVICE_PREFIX.len());

    // Any disallowed run and any hyphen run both become a single hyphen.
    for ch in author.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            name.push(ch);
        } else if !name.ends_with('-') {
            name.push('-');
        }
    }

    let trimmed = name.trim_matches('-');
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyServiceName(author.to_string()).into());
    }

    if trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}{}", SERVICE_PREFIX, trimmed))
    }
}
