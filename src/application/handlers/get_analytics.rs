//! GetAnalyticsHandler - dashboard aggregation over a time window.

use std::sync::Arc;

use chrono::Local;

use crate::domain::analytics::{aggregate_stats, AnalyticsReport, Period, PriorityCount};
use crate::domain::WizardError;
use crate::ports::AnalyticsReader;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAnalyticsQuery {
    pub period: Period,
}

pub struct GetAnalyticsHandler {
    reader: Arc<dyn AnalyticsReader>,
}

impl GetAnalyticsHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetAnalyticsQuery) -> Result<AnalyticsReport, WizardError> {
        let cutoff = query.period.cutoff(Local::now());

        // The three reads are independent; run them concurrently.
        let (rows, priorities, total_count) = tokio::try_join!(
            self.reader.answers_in_window(cutoff),
            self.reader.count_by_priority(cutoff),
            self.reader.count_submissions(cutoff),
        )?;

        let priority_counts = priorities
            .into_iter()
            .map(|(priority, count)| PriorityCount { priority, count })
            .collect();

        Ok(AnalyticsReport {
            stats: aggregate_stats(rows),
            priority_counts,
            total_count,
        })
    }
}
