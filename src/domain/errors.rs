//! Error types for the domain layer.

use thiserror::Error;

/// Errors surfaced by wizard operations.
///
/// Malformed stored answer encodings are deliberately absent: the analytics
/// aggregator recovers from them locally by falling back to a scalar
/// interpretation, so they never reach a caller.
#[derive(Debug, Clone, Error)]
pub enum WizardError {
    /// A required identification field is missing or empty.
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    /// A catalog question has no answer (or an empty multi-select).
    #[error("Question '{question_id}' has no answer")]
    MissingAnswer { question_id: String },

    /// Credential check failed. Never distinguishes which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A stored priority token was not one of LOW/MEDIUM/HIGH.
    #[error("Unknown priority token: {token}")]
    UnknownPriority { token: String },

    /// Store unavailable or a read/write failed.
    #[error("Database error: {message}")]
    Database { message: String },
}

impl WizardError {
    pub fn missing_field(field: &'static str) -> Self {
        WizardError::MissingField { field }
    }

    pub fn missing_answer(question_id: impl Into<String>) -> Self {
        WizardError::MissingAnswer {
            question_id: question_id.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        WizardError::Database {
            message: message.into(),
        }
    }

    /// Whether this error is the caller's fault (maps to a 4xx response).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            WizardError::MissingField { .. }
                | WizardError::MissingAnswer { .. }
                | WizardError::InvalidCredentials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        let err = WizardError::missing_field("employeeName");
        assert_eq!(err.to_string(), "Field 'employeeName' is required");

        let err = WizardError::missing_answer("v3");
        assert_eq!(err.to_string(), "Question 'v3' has no answer");

        assert_eq!(
            WizardError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn client_errors_are_classified() {
        assert!(WizardError::missing_field("department").is_client_error());
        assert!(WizardError::InvalidCredentials.is_client_error());
        assert!(!WizardError::database("connection refused").is_client_error());
    }
}
