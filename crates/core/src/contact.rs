//! Contact message field validators.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum first/last name length, in characters.
pub const MAX_PERSON_NAME_LEN: usize = 50;
/// Maximum subject length, in characters.
pub const MAX_SUBJECT_LEN: usize = 100;
/// Maximum message body length, in characters.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Validate a first or last name. `field` names the offending field in the
/// error message.
pub fn validate_person_name(field: &'static str, value: &str) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if len > MAX_PERSON_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_PERSON_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that an email address conforms to standard email syntax.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate a contact subject line.
pub fn validate_subject(subject: &str) -> Result<(), CoreError> {
    let len = subject.chars().count();
    if len == 0 {
        return Err(CoreError::Validation(
            "Subject must not be empty".to_string(),
        ));
    }
    if len > MAX_SUBJECT_LEN {
        return Err(CoreError::Validation(format!(
            "Subject exceeds maximum length of {MAX_SUBJECT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a contact message body. An empty body is allowed.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(())
}
