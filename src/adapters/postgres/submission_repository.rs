//! PostgreSQL implementation of SubmissionRepository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::goal::{
    NewSubmission, StoredResponse, Submission, SubmissionId, SubmissionPage,
};
use crate::domain::WizardError;
use crate::ports::SubmissionRepository;

use super::db_error;

/// Persists submissions to the `forms` / `form_responses` tables.
#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn create(&self, submission: &NewSubmission) -> Result<SubmissionId, WizardError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("failed to begin transaction", e))?;

        let id = SubmissionId::new();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO forms (
                id, employee_name, department, subject, description,
                current_value, target_value, priority, result_text, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&submission.employee_name)
        .bind(&submission.department)
        .bind(&submission.subject)
        .bind(&submission.description)
        .bind(&submission.current_value)
        .bind(&submission.target_value)
        .bind(submission.priority.as_str())
        .bind(&submission.result_text)
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("failed to insert form", e))?;

        for response in &submission.responses {
            sqlx::query(
                r#"
                INSERT INTO form_responses (id, form_id, question_key, answer)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(id.as_uuid())
            .bind(&response.question_key)
            .bind(response.answer.encode())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("failed to insert form response", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("failed to commit form", e))?;

        Ok(id)
    }

    async fn list(&self, page: u32, limit: u32) -> Result<SubmissionPage, WizardError> {
        let limit = limit.max(1) as i64;
        let offset = (page.max(1) as i64 - 1) * limit;

        let rows = sqlx::query(
            r#"
            SELECT id, employee_name, department, subject, description,
                   current_value, target_value, priority, result_text, created_at
            FROM forms
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("failed to list forms", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(row_to_submission(row)?);
        }

        let form_ids: Vec<Uuid> = items.iter().map(|s| s.id.as_uuid()).collect();
        if !form_ids.is_empty() {
            let response_rows = sqlx::query(
                r#"
                SELECT form_id, question_key, answer
                FROM form_responses
                WHERE form_id = ANY($1)
                ORDER BY form_id
                "#,
            )
            .bind(&form_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("failed to fetch form responses", e))?;

            for row in response_rows {
                let form_id: Uuid = row
                    .try_get("form_id")
                    .map_err(|e| db_error("missing form_id column", e))?;
                let response = StoredResponse {
                    question_key: row
                        .try_get("question_key")
                        .map_err(|e| db_error("missing question_key column", e))?,
                    answer: row
                        .try_get("answer")
                        .map_err(|e| db_error("missing answer column", e))?,
                };
                if let Some(submission) =
                    items.iter_mut().find(|s| s.id.as_uuid() == form_id)
                {
                    submission.responses.push(response);
                }
            }
        }

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM forms")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("failed to count forms", e))?;

        Ok(SubmissionPage {
            items,
            total: total.0 as u64,
        })
    }
}

fn row_to_submission(row: sqlx::postgres::PgRow) -> Result<Submission, WizardError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| db_error("missing id column", e))?;
    let priority: String = row
        .try_get("priority")
        .map_err(|e| db_error("missing priority column", e))?;

    Ok(Submission {
        id: SubmissionId::from_uuid(id),
        employee_name: row
            .try_get("employee_name")
            .map_err(|e| db_error("missing employee_name column", e))?,
        department: row
            .try_get("department")
            .map_err(|e| db_error("missing department column", e))?,
        subject: row
            .try_get("subject")
            .map_err(|e| db_error("missing subject column", e))?,
        description: row
            .try_get("description")
            .map_err(|e| db_error("missing description column", e))?,
        current_value: row
            .try_get("current_value")
            .map_err(|e| db_error("missing current_value column", e))?,
        target_value: row
            .try_get("target_value")
            .map_err(|e| db_error("missing target_value column", e))?,
        priority: priority.parse()?,
        result_text: row
            .try_get("result_text")
            .map_err(|e| db_error("missing result_text column", e))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| db_error("missing created_at column", e))?,
        responses: Vec::new(),
    })
}
