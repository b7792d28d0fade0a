//! Config-backed admin credential check.

use async_trait::async_trait;
use subtle::ConstantTimeEq;

use crate::config::AdminConfig;
use crate::domain::WizardError;
use crate::ports::AdminAuthenticator;

/// Verifies credentials against the configured admin account.
///
/// Both fields are compared in constant time and combined into a single
/// verdict, so timing reveals neither which field mismatched nor at which
/// byte.
#[derive(Clone)]
pub struct ConfigAdminAuthenticator {
    username: String,
    password: String,
}

impl ConfigAdminAuthenticator {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

fn eq_constant_time(supplied: &str, expected: &str) -> subtle::Choice {
    if supplied.len() != expected.len() {
        // Compare against itself so length is the only timing difference.
        let _ = supplied.as_bytes().ct_eq(supplied.as_bytes());
        return subtle::Choice::from(0);
    }
    supplied.as_bytes().ct_eq(expected.as_bytes())
}

#[async_trait]
impl AdminAuthenticator for ConfigAdminAuthenticator {
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, WizardError> {
        let username_ok = eq_constant_time(username, &self.username);
        let password_ok = eq_constant_time(password, &self.password);
        Ok(bool::from(username_ok & password_ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> ConfigAdminAuthenticator {
        ConfigAdminAuthenticator::new(&AdminConfig {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
    }

    #[tokio::test]
    async fn accepts_exact_credentials() {
        assert!(authenticator()
            .authenticate("admin", "admin123")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn rejects_any_mismatch() {
        let auth = authenticator();
        assert!(!auth.authenticate("admin", "wrong").await.unwrap());
        assert!(!auth.authenticate("wrong", "admin123").await.unwrap());
        assert!(!auth.authenticate("", "").await.unwrap());
        assert!(!auth.authenticate("ADMIN", "admin123").await.unwrap());
    }
}
