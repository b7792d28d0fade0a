//! Ports - trait definitions for external collaborators.
//!
//! The application layer depends on these contracts; adapters provide the
//! implementations (PostgreSQL, config-backed auth, test mocks).

mod admin_authenticator;
mod analytics_reader;
mod submission_repository;

pub use admin_authenticator::AdminAuthenticator;
pub use analytics_reader::AnalyticsReader;
pub use submission_repository::SubmissionRepository;
