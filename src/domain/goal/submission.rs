//! Submission aggregate: created once at the end of the wizard, immutable
//! thereafter. `result_text` and `priority` are always derived by the
//! composer at submission time, never edited independently.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::goal::answers::AnswerValue;
use crate::domain::goal::priority::Priority;

/// Server-assigned unique submission identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One answered question as submitted by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_key: String,
    pub answer: AnswerValue,
}

/// A submission ready for persistence, with the composed result attached.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub employee_name: String,
    pub department: String,
    pub subject: String,
    pub description: Option<String>,
    pub current_value: Option<String>,
    pub target_value: Option<String>,
    pub priority: Priority,
    pub result_text: String,
    pub responses: Vec<QuestionResponse>,
}

/// One stored answer row as retrieved from the store (encoded form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResponse {
    pub question_key: String,
    pub answer: String,
}

/// A persisted submission as listed on the dashboard.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub employee_name: String,
    pub department: String,
    pub subject: String,
    pub description: Option<String>,
    pub current_value: Option<String>,
    pub target_value: Option<String>,
    pub priority: Priority,
    pub result_text: String,
    pub created_at: DateTime<Utc>,
    pub responses: Vec<StoredResponse>,
}

/// One page of submissions, newest first.
#[derive(Debug, Clone)]
pub struct SubmissionPage {
    pub items: Vec<Submission>,
    pub total: u64,
}
