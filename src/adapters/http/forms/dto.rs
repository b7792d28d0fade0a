//! HTTP DTOs for the forms endpoints.
//!
//! These mirror the deployed wire contract. Unknown body fields (notably a
//! client-computed `priority`/`resultText`) are accepted and dropped by
//! serde; the server recomputes the result.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{FormPage, SubmitFormCommand};
use crate::domain::goal::{Priority, QuestionResponse, Submission};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormRequest {
    #[serde(default)]
    pub employee_name: String,
    /// Historical clients send this capitalized.
    #[serde(default, alias = "Department")]
    pub department: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_value: Option<String>,
    #[serde(default)]
    pub target_value: Option<String>,
    #[serde(default)]
    pub responses: Vec<QuestionResponse>,
}

impl From<SubmitFormRequest> for SubmitFormCommand {
    fn from(req: SubmitFormRequest) -> Self {
        Self {
            employee_name: req.employee_name,
            department: req.department,
            subject: req.subject,
            description: req.description,
            current_value: req.current_value,
            target_value: req.target_value,
            responses: req.responses,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListFormsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct SubmitFormResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEntryDto {
    pub question_key: String,
    /// Encoded as stored: raw token or bracketed JSON array.
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDto {
    pub id: String,
    pub employee_name: String,
    pub department: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,
    pub priority: Priority,
    pub result_text: String,
    pub created_at: String,
    pub responses: Vec<ResponseEntryDto>,
}

impl From<Submission> for FormDto {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id.to_string(),
            employee_name: submission.employee_name,
            department: submission.department,
            subject: submission.subject,
            description: submission.description,
            current_value: submission.current_value,
            target_value: submission.target_value,
            priority: submission.priority,
            result_text: submission.result_text,
            created_at: submission.created_at.to_rfc3339(),
            responses: submission
                .responses
                .into_iter()
                .map(|r| ResponseEntryDto {
                    question_key: r.question_key,
                    answer: r.answer,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListFormsResponse {
    pub data: Vec<FormDto>,
    pub pagination: PaginationDto,
}

impl From<FormPage> for ListFormsResponse {
    fn from(page: FormPage) -> Self {
        Self {
            data: page.items.into_iter().map(Into::into).collect(),
            pagination: PaginationDto {
                total: page.total,
                page: page.page,
                limit: page.limit,
                total_pages: page.total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::goal::AnswerValue;

    #[test]
    fn accepts_capitalized_department_alias() {
        let req: SubmitFormRequest = serde_json::from_str(
            r#"{"employeeName":"Ada","Department":"Kalite","responses":[]}"#,
        )
        .unwrap();
        assert_eq!(req.department, "Kalite");
    }

    #[test]
    fn ignores_client_computed_result_fields() {
        let req: SubmitFormRequest = serde_json::from_str(
            r#"{
                "employeeName": "Ada",
                "department": "Kalite",
                "priority": "YÜKSEK",
                "resultText": "client-side text",
                "responses": [{"questionKey":"v1","answer":"Buyutmek"}]
            }"#,
        )
        .unwrap();
        assert_eq!(req.responses.len(), 1);
        assert_eq!(
            req.responses[0].answer,
            AnswerValue::Single("Buyutmek".to_string())
        );
    }
}
