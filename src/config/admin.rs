//! Admin credential configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Admin dashboard credentials.
///
/// Plain values from the environment; the auth adapter compares them in
/// constant time. A hashed backend would slot in behind the same port.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Admin username
    #[serde(default = "default_username")]
    pub username: String,

    /// Admin password (required, no default)
    pub password: String,
}

impl AdminConfig {
    /// Validate admin configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN__USERNAME"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN__PASSWORD"));
        }
        Ok(())
    }
}

fn default_username() -> String {
    "admin".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_rejected() {
        let config = AdminConfig {
            username: default_username(),
            password: String::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_credentials_pass() {
        let config = AdminConfig {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
