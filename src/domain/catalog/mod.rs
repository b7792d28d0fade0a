//! Static question catalog.
//!
//! The eight wizard questions are reference data shipped with the binary;
//! changing them is a deployment event, not a runtime operation. Both the
//! submission flow and the analytics aggregator read from here so option
//! tokens stay in one place.

mod data;
mod question;

pub use question::{Cardinality, Question, QuestionOption};

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use data::QUESTIONS;

/// Indicator tokens for question `v5` that are qualitative by nature.
///
/// When one of these is selected the composed statement keeps the generic
/// "improve the indicator" phrasing even if current/target values were
/// supplied. Shared with the result composer so the tokens are not
/// duplicated as string literals.
pub const QUALITATIVE_INDICATORS: [&str; 3] =
    ["Musteri geri bildirimi", "Denetim sonucu", "Uyum durumu"];

/// Risk token on question `v8` that forces LOW priority.
pub const RISK_NO_IMPACT: &str = "Etki yok";

/// Risk tokens on question `v8` that each force HIGH priority on their own.
pub const RISK_CUSTOMER_LOSS: &str = "Musteri kaybi";
pub const RISK_LEGAL: &str = "Yasal risk";

static BY_ID: Lazy<HashMap<&'static str, &'static Question>> =
    Lazy::new(|| QUESTIONS.iter().map(|q| (q.id, q)).collect());

/// All questions in wizard order, stable for the process lifetime.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Look a question up by its stable id (`v1`..`v8`).
pub fn find_by_id(id: &str) -> Option<&'static Question> {
    BY_ID.get(id).copied()
}

/// Look a question up by its 1-based wizard step.
pub fn find_by_step(step: u8) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.step == step)
}
