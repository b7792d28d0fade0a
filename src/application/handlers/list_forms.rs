//! ListFormsHandler - paginated dashboard listing.

use std::sync::Arc;

use crate::domain::goal::Submission;
use crate::domain::WizardError;
use crate::ports::SubmissionRepository;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListFormsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One resolved page plus the pagination echo the dashboard renders.
#[derive(Debug, Clone)]
pub struct FormPage {
    pub items: Vec<Submission>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

pub struct ListFormsHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl ListFormsHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListFormsQuery) -> Result<FormPage, WizardError> {
        let page = query.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = query.limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);

        let result = self.repository.list(page, limit).await?;
        let total_pages = result.total.div_ceil(limit as u64);

        Ok(FormPage {
            items: result.items,
            total: result.total,
            page,
            limit,
            total_pages,
        })
    }
}
