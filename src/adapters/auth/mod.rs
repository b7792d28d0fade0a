//! Admin authentication adapters.

mod config_admin;

pub use config_admin::ConfigAdminAuthenticator;
