//! Analytics read port.
//!
//! Read-only and idempotent; the `cutoff` is the inclusive lower bound on
//! `created_at` produced by a [`Period`](crate::domain::analytics::Period),
//! or `None` for the unfiltered window.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::analytics::AnswerRow;
use crate::domain::goal::Priority;
use crate::domain::WizardError;

/// Read contract feeding the dashboard aggregation.
#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    /// Raw stored answers of submissions inside the window.
    async fn answers_in_window(
        &self,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<AnswerRow>, WizardError>;

    /// Submission counts grouped by priority, only for priorities present.
    async fn count_by_priority(
        &self,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<(Priority, u64)>, WizardError>;

    /// Total submissions inside the window.
    async fn count_submissions(&self, cutoff: Option<DateTime<Utc>>)
        -> Result<u64, WizardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn AnalyticsReader) {}
    }
}
