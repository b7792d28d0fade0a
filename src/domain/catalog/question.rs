//! Question and option types for the static catalog.

use serde::Serialize;

/// How many options a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Exactly one option (radio).
    Single,
    /// Zero or more options, order-insensitive, no duplicates (checkbox).
    Multiple,
}

/// One selectable option. `value` is the stored/matched token; `label` is
/// display-only and may carry extra annotation (e.g. "Insan / Yetkinlik"
/// stores as "Insan").
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// One wizard question. Immutable, statically defined.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Short stable token, `v1`..`v8`.
    pub id: &'static str,
    /// 1-based ordinal position, unique and contiguous.
    pub step: u8,
    /// Display text.
    pub prompt: &'static str,
    pub cardinality: Cardinality,
    /// Ordered option set.
    pub options: &'static [QuestionOption],
    /// When true (step 5 only), selecting a non-qualitative indicator makes
    /// the wizard additionally collect current/target free-text values.
    pub has_numeric_range: bool,
}
