// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client-side form validation.
//!
//! Submissions are simulated; this module only decides whether a submission
//! would be accepted and which message to show. Failures are plain values,
//! terminal for the current attempt only.

use core::fmt;

/// Message shown after a successful newsletter signup.
pub const NEWSLETTER_OK: &str = "Thank you for subscribing!";
/// Message shown after a contact form is accepted.
pub const CONTACT_OK: &str = "Thank you for your message! We will get back to you within 24 hours.";
/// Message shown after a consultation request.
pub const CONSULTATION_OK: &str =
    "Your consultation has been scheduled! We will contact you shortly.";
/// Message shown when the catalog button is pressed.
pub const CATALOG_OK: &str = "Catalog download will begin shortly...";

/// Why a submission was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormError {
    /// At least one required field was empty.
    MissingField(&'static str),
    /// The email field does not look like an address.
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(_) => f.write_str("Please fill in all required fields."),
            Self::InvalidEmail => f.write_str("Please enter a valid email address."),
        }
    }
}

impl core::error::Error for FormError {}

/// Checks `email` against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// That is: no whitespace anywhere, exactly one `@` with text on both sides,
/// and a `.` in the domain part with text on both sides of at least one dot.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have non-empty text on both sides.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Validates a newsletter signup.
pub fn validate_newsletter(email: &str) -> Result<(), FormError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

/// Fields of the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactForm<'a> {
    /// Sender name.
    pub name: &'a str,
    /// Reply address.
    pub email: &'a str,
    /// Requested service.
    pub service: &'a str,
    /// Subject line.
    pub subject: &'a str,
    /// Message body.
    pub message: &'a str,
}

impl ContactForm<'_> {
    /// Field names in the order they are checked.
    pub const FIELDS: [&'static str; 5] = ["name", "email", "service", "subject", "message"];

    /// Checks that every field is present, then that the email is valid.
    pub fn validate(&self) -> Result<(), FormError> {
        let values = [
            self.name,
            self.email,
            self.service,
            self.subject,
            self.message,
        ];
        if let Some(i) = values.iter().position(|v| v.is_empty()) {
            return Err(FormError::MissingField(Self::FIELDS[i]));
        }
        validate_newsletter(self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn accepts_plain_addresses() {
        for ok in ["a@b.co", "jane.doe@mail.example.com", "x@y.z", "a@b..c"] {
            assert!(is_valid_email(ok), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "plain",
            "@b.co",
            "a@",
            "a@b",
            "a@.co",
            "a@b.",
            "a b@c.de",
            "a@b@c.de",
            "a@b.c ",
        ] {
            assert!(!is_valid_email(bad), "{bad:?}");
        }
    }

    #[test]
    fn newsletter_messages() {
        assert_eq!(validate_newsletter("hi@luxe.home"), Ok(()));
        let err = validate_newsletter("nope").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn contact_requires_every_field_first() {
        let form = ContactForm {
            name: "Ana",
            email: "not-an-email",
            service: "",
            subject: "Sofa",
            message: "Hello",
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("service")));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please fill in all required fields."
        );
    }

    #[test]
    fn contact_then_checks_email() {
        let mut form = ContactForm {
            name: "Ana",
            email: "ana-at-home",
            service: "styling",
            subject: "Sofa",
            message: "Hello",
        };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
        form.email = "ana@home.io";
        assert_eq!(form.validate(), Ok(()));
    }
}
