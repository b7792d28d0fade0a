//! HTTP DTOs for the analytics endpoint.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsParams {
    /// day | week | month | all; anything else behaves as all.
    #[serde(default)]
    pub period: Option<String>,
}

// The response body serializes the domain `AnalyticsReport` directly: its
// camelCase shape (`stats`, `priorityCounts`, `totalCount`) is already the
// wire contract.
