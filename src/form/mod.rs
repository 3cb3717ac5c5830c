pub mod club;
pub mod student;

use email_address::EmailAddress;

use crate::error::SignupError;

/// Trimmed value of a required field, or a validation error naming the field.
pub(crate) fn required(label: &str, value: &str) -> Result<String, SignupError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SignupError::Validation(format!("{label} is required")));
    }

    Ok(value.to_string())
}

/// Emails are compared case-insensitively, so they are stored lower-cased.
pub(crate) fn email(value: &str) -> Result<String, SignupError> {
    let value = required("Email", value)?.to_lowercase();
    if !EmailAddress::is_valid(&value) {
        return Err(SignupError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }

    Ok(value)
}

/// Passwords are checked for presence but kept byte-for-byte.
pub(crate) fn password(value: &str) -> Result<String, SignupError> {
    if value.trim().is_empty() {
        return Err(SignupError::Validation("Password is required".to_string()));
    }

    Ok(value.to_string())
}
