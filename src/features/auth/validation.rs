//! Local password checks run before anything is written to storage. Only the
//! first failing rule is reported.

use thiserror::Error;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match.")]
    Mismatch,
    #[error("Password must be at least {} characters.", MIN_PASSWORD_LENGTH)]
    TooShort,
}

/// Checks that `confirm` repeats `password` and that the password is long enough.
pub fn validate(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::Mismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}
