//! Form Validation
//!
//! Synchronous checks run before any auth request is sent.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Accept a simple `local@domain.tld` address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Length is checked before the confirmation match.
pub fn validate_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.com", "first.last@mail.example.org", "x+tag@d.io"] {
            assert_eq!(validate_email(email), Ok(()), "{email}");
        }
    }

    #[test]
    fn test_malformed_emails() {
        for email in ["", "plain", "no-at.example.com", "a@nodot", "a@@b.com", "a b@c.com", "@b.com", "a@b."] {
            assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("secret", "secret"), Ok(()));
        assert_eq!(
            validate_password("short", "short"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(
            validate_password("secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        // Too short wins over mismatch
        assert_eq!(
            validate_password("abc", "xyz"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN }.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
    }
}
