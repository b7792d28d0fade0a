//! LoginHandler - admin credential check.

use std::sync::Arc;

use crate::domain::WizardError;
use crate::ports::AdminAuthenticator;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginHandler {
    authenticator: Arc<dyn AdminAuthenticator>,
}

impl LoginHandler {
    pub fn new(authenticator: Arc<dyn AdminAuthenticator>) -> Self {
        Self { authenticator }
    }

    /// Returns the authenticated username, or `InvalidCredentials` without
    /// distinguishing which field was wrong.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<String, WizardError> {
        if self
            .authenticator
            .authenticate(&cmd.username, &cmd.password)
            .await?
        {
            Ok(cmd.username)
        } else {
            Err(WizardError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedAuthenticator {
        username: &'static str,
        password: &'static str,
    }

    #[async_trait]
    impl AdminAuthenticator for FixedAuthenticator {
        async fn authenticate(&self, username: &str, password: &str) -> Result<bool, WizardError> {
            Ok(username == self.username && password == self.password)
        }
    }

    fn handler() -> LoginHandler {
        LoginHandler::new(Arc::new(FixedAuthenticator {
            username: "admin",
            password: "s3cret",
        }))
    }

    #[tokio::test]
    async fn accepts_matching_credentials() {
        let username = handler()
            .handle(LoginCommand {
                username: "admin".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(username, "admin");
    }

    #[tokio::test]
    async fn wrong_username_and_wrong_password_are_indistinguishable() {
        let wrong_user = handler()
            .handle(LoginCommand {
                username: "root".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap_err();
        let wrong_pass = handler()
            .handle(LoginCommand {
                username: "admin".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_user.to_string(), wrong_pass.to_string());
        assert!(matches!(wrong_user, WizardError::InvalidCredentials));
    }
}
