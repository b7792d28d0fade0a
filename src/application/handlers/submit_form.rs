//! SubmitFormHandler - validates a wizard submission, composes the result
//! and persists it.

use std::sync::Arc;

use crate::domain::catalog;
use crate::domain::goal::{compose, AnswerSet, NewSubmission, QuestionResponse, SubmissionId};
use crate::domain::WizardError;
use crate::ports::SubmissionRepository;

/// A completed wizard run as posted by the client.
///
/// Any client-supplied `priority`/`resultText` never reach this command; the
/// server recomputes both from the answers so the stored result is always
/// composer-derived.
#[derive(Debug, Clone)]
pub struct SubmitFormCommand {
    pub employee_name: String,
    pub department: String,
    pub subject: String,
    pub description: Option<String>,
    pub current_value: Option<String>,
    pub target_value: Option<String>,
    pub responses: Vec<QuestionResponse>,
}

pub struct SubmitFormHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl SubmitFormHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SubmitFormCommand) -> Result<SubmissionId, WizardError> {
        if cmd.employee_name.trim().is_empty() {
            return Err(WizardError::missing_field("employeeName"));
        }
        if cmd.department.trim().is_empty() {
            return Err(WizardError::missing_field("department"));
        }

        let answers = AnswerSet::from_responses(&cmd.responses);
        for question in catalog::questions() {
            if !answers.has_answer(question.id) {
                return Err(WizardError::missing_answer(question.id));
            }
        }

        let result = compose(
            &answers,
            cmd.current_value.as_deref(),
            cmd.target_value.as_deref(),
            Some(&cmd.subject),
        );

        let submission = NewSubmission {
            employee_name: cmd.employee_name,
            department: cmd.department,
            subject: cmd.subject,
            description: cmd.description,
            current_value: cmd.current_value,
            target_value: cmd.target_value,
            priority: result.priority,
            result_text: result.text,
            responses: cmd.responses,
        };

        let id = self.repository.create(&submission).await?;
        tracing::info!(submission_id = %id, priority = %submission.priority, "form submitted");
        Ok(id)
    }
}
