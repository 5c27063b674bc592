// SPDX-License-Identifier: MPL-2.0
//! Contact-form validation.
//!
//! The checks here are deliberately permissive: the goal is to catch obvious
//! slips (an empty field, an address with no `@`) before submission, not to
//! enforce the full address grammar. Anything that passes still has to
//! survive delivery.

use crate::error::ValidationError;

/// Returns whether `s` looks like an email address.
///
/// The whole string must consist of one or more characters that are neither
/// whitespace nor `@`, followed by a literal `@`, followed by a domain part
/// that contains a `.` with at least one such character on each side.
/// Equivalent to the classic `^[^\s@]+@[^\s@]+\.[^\s@]+$` check.
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    // A dot that is neither the first nor the last character of the domain.
    // `.` is a single byte, so `i + 1` is always a char boundary.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The four required fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validates the form, returning the first failure.
    ///
    /// Field presence is checked before email format, so a completely empty
    /// form reports [`ValidationError::MissingFields`] rather than a
    /// malformed address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.email, &self.subject, &self.message];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}
