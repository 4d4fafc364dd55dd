//! Form checks run before a request is sent.

use crate::shared::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Credentials for login must both be present.
pub fn validate_login(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::validation("email", "Email and password are required"));
    }
    Ok(())
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("name", "Name is required"));
    }
    validate_login(email, password)?;
    validate_email(email)?;
    validate_new_password(password)
}

/// Same loose check the sign-up form applies: an `@` and a `.`.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if !email.contains('@') || !email.contains('.') {
        return Err(ApiError::validation("email", "Please enter a valid email address"));
    }
    Ok(())
}

pub fn validate_new_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "password",
            format!("Password must be at least {} characters long.", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

/// New password and its confirmation must match and be long enough.
pub fn validate_password_change(new_password: &str, confirmation: &str) -> Result<(), ApiError> {
    if new_password != confirmation {
        return Err(ApiError::validation("confirmPassword", "New passwords do not match."));
    }
    validate_new_password(new_password)
}
