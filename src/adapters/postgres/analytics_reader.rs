//! PostgreSQL implementation of AnalyticsReader.
//!
//! All three reads take the same optional cutoff; `NULL` disables the
//! filter so one statement serves every period.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::analytics::AnswerRow;
use crate::domain::goal::Priority;
use crate::domain::WizardError;
use crate::ports::AnalyticsReader;

use super::db_error;

#[derive(Clone)]
pub struct PostgresAnalyticsReader {
    pool: PgPool,
}

impl PostgresAnalyticsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsReader for PostgresAnalyticsReader {
    async fn answers_in_window(
        &self,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<AnswerRow>, WizardError> {
        let rows = sqlx::query(
            r#"
            SELECT r.question_key, r.answer
            FROM form_responses r
            JOIN forms f ON f.id = r.form_id
            WHERE $1::timestamptz IS NULL OR f.created_at >= $1
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("failed to fetch answers", e))?;

        let mut answers = Vec::with_capacity(rows.len());
        for row in rows {
            answers.push(AnswerRow {
                question_key: row
                    .try_get("question_key")
                    .map_err(|e| db_error("missing question_key column", e))?,
                answer: row
                    .try_get("answer")
                    .map_err(|e| db_error("missing answer column", e))?,
            });
        }
        Ok(answers)
    }

    async fn count_by_priority(
        &self,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<(Priority, u64)>, WizardError> {
        let rows = sqlx::query(
            r#"
            SELECT priority, COUNT(*) AS count
            FROM forms
            WHERE $1::timestamptz IS NULL OR created_at >= $1
            GROUP BY priority
            ORDER BY priority
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("failed to count by priority", e))?;

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            let token: String = row
                .try_get("priority")
                .map_err(|e| db_error("missing priority column", e))?;
            let count: i64 = row
                .try_get("count")
                .map_err(|e| db_error("missing count column", e))?;
            counts.push((token.parse::<Priority>()?, count as u64));
        }
        Ok(counts)
    }

    async fn count_submissions(
        &self,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<u64, WizardError> {
        let total: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM forms WHERE $1::timestamptz IS NULL OR created_at >= $1",
        )
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("failed to count forms", e))?;

        Ok(total.0 as u64)
    }
}
