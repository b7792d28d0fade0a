//! Admin credential check port.

use async_trait::async_trait;

use crate::domain::WizardError;

/// Credential verification for the admin dashboard.
///
/// Implementations return a single combined verdict and must never reveal
/// whether the username or the password was the wrong half.
#[async_trait]
pub trait AdminAuthenticator: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, WizardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_authenticator_is_object_safe() {
        fn _accepts_dyn(_auth: &dyn AdminAuthenticator) {}
    }
}
