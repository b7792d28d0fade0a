//! Per-option and per-priority aggregation for the admin dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::catalog;
use crate::domain::goal::answers::AnswerValue;
use crate::domain::goal::priority::Priority;

/// One stored answer row selected by the window predicate.
#[derive(Debug, Clone)]
pub struct AnswerRow {
    pub question_key: String,
    pub answer: String,
}

/// question id -> option value -> occurrence count.
pub type QuestionStats = BTreeMap<String, BTreeMap<String, u64>>;

/// Submission count for one priority actually present in the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: u64,
}

/// The full dashboard aggregate for one time window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub stats: QuestionStats,
    pub priority_counts: Vec<PriorityCount>,
    pub total_count: u64,
}

/// Every catalog option of every question at count zero, so options with no
/// occurrences still appear in the dashboard.
pub fn seeded_stats() -> QuestionStats {
    catalog::questions()
        .iter()
        .map(|question| {
            let buckets = question
                .options
                .iter()
                .map(|option| (option.value.to_string(), 0))
                .collect();
            (question.id.to_string(), buckets)
        })
        .collect()
}

/// Count decoded answer values against the zero-seeded catalog buckets.
///
/// Values outside the catalog (or rows for unknown question ids) still get
/// their own bucket under the literal stored value; a multi-select
/// increments one bucket per selected value.
pub fn aggregate_stats(rows: impl IntoIterator<Item = AnswerRow>) -> QuestionStats {
    let mut stats = seeded_stats();
    for row in rows {
        let buckets = stats.entry(row.question_key).or_default();
        for value in AnswerValue::decode(&row.answer) {
            *buckets.entry(value).or_insert(0) += 1;
        }
    }
    stats
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod aggregator_test;
