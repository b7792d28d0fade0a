//! Submission repository port.
//!
//! Submissions are create-only: no update or delete operations exist, so
//! implementations never face writer-writer races on a submission's fields.

use async_trait::async_trait;

use crate::domain::goal::{NewSubmission, SubmissionId, SubmissionPage};
use crate::domain::WizardError;

/// Persistence contract for wizard submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Persist a composed submission, assigning id and timestamp.
    ///
    /// # Errors
    ///
    /// - `Database` on store unavailability or write failure
    async fn create(&self, submission: &NewSubmission) -> Result<SubmissionId, WizardError>;

    /// One page of submissions ordered by `created_at` descending,
    /// responses included, along with the unfiltered total.
    async fn list(&self, page: u32, limit: u32) -> Result<SubmissionPage, WizardError>;
}
