use crate::features::auth::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("{0}")]
    Auth(String),
}

impl AppError {
    /// Maps internal errors to user-facing strings without leaking details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message) | AppError::Auth(message) => message.clone(),
            AppError::Storage(StoreError::Unavailable(_)) => {
                "Browser storage is unavailable. Check your privacy settings and try again."
                    .to_string()
            }
            AppError::Storage(StoreError::Read { .. } | StoreError::Serialization(_)) => {
                "Stored account data is unreadable. Please sign up again.".to_string()
            }
            AppError::Storage(StoreError::Write { .. }) => {
                "We could not save your account on this device.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::features::auth::store::StoreError;

    #[test]
    fn storage_messages_hide_key_details() {
        let err = AppError::from(StoreError::Write {
            key: "pb_registered".to_string(),
            message: "QuotaExceededError".to_string(),
        });
        let message = err.user_message();
        assert!(!message.contains("pb_registered"));
        assert!(!message.contains("Quota"));
    }

    #[test]
    fn corrupt_stored_account_is_reported_as_unreadable() {
        let corrupt = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = "Stored account data is unreadable. Please sign up again.";

        assert_eq!(AppError::from(StoreError::from(corrupt)).user_message(), expected);
        assert_eq!(
            AppError::from(StoreError::Read {
                key: "pb_registered".to_string(),
                message: "SecurityError".to_string(),
            })
            .user_message(),
            expected
        );
    }

    #[test]
    fn auth_and_config_messages_pass_through() {
        assert_eq!(
            AppError::Auth("Incorrect password.".to_string()).user_message(),
            "Incorrect password."
        );
        assert_eq!(
            AppError::Config("Demo accounts are disabled.".to_string()).user_message(),
            "Demo accounts are disabled."
        );
    }
}
