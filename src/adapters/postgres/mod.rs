//! PostgreSQL adapters (sqlx).

mod analytics_reader;
mod submission_repository;

pub use analytics_reader::PostgresAnalyticsReader;
pub use submission_repository::PostgresSubmissionRepository;

use crate::domain::WizardError;

pub(crate) fn db_error(context: &str, err: sqlx::Error) -> WizardError {
    WizardError::database(format!("{context}: {err}"))
}
