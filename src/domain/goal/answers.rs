//! Answer values and the per-submission answer mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::goal::submission::QuestionResponse;

/// One answer as submitted: a single token for radio questions, an
/// insertion-ordered list of tokens for checkbox questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    /// Storage encoding, stable bit-for-bit: a multi-select serializes as a
    /// JSON bracketed array of strings, a single-select as the raw token.
    pub fn encode(&self) -> String {
        match self {
            AnswerValue::Single(value) => value.clone(),
            AnswerValue::Multiple(values) => serde_json::Value::from(values.clone()).to_string(),
        }
    }

    /// Decode a stored answer back into its selected tokens.
    ///
    /// A string bracketed with `[`..`]` is parsed as a JSON array; anything
    /// else, including a bracketed string that fails to parse, is one scalar
    /// answer. Never an error.
    pub fn decode(raw: &str) -> Vec<String> {
        if raw.starts_with('[') && raw.ends_with(']') {
            if let Ok(values) = serde_json::from_str::<Vec<String>>(raw) {
                return values;
            }
        }
        vec![raw.to_string()]
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Single(value) => value.is_empty(),
            AnswerValue::Multiple(values) => values.is_empty(),
        }
    }
}

const EMPTY_SELECTION: &[String] = &[];

/// Mapping from question id to its answer. At most one answer per question;
/// a later insert for the same id replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    answers: HashMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_responses(responses: &[QuestionResponse]) -> Self {
        let mut set = Self::new();
        for response in responses {
            set.insert(response.question_key.clone(), response.answer.clone());
        }
        set
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: AnswerValue) {
        self.answers.insert(question_id.into(), answer);
    }

    /// The selected token of a single-choice answer, if one was given.
    pub fn single(&self, question_id: &str) -> Option<&str> {
        match self.answers.get(question_id) {
            Some(AnswerValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The selected tokens of a multi-choice answer, in selection order.
    /// Empty when unanswered or answered with the wrong cardinality.
    pub fn multiple(&self, question_id: &str) -> &[String] {
        match self.answers.get(question_id) {
            Some(AnswerValue::Multiple(values)) => values,
            _ => EMPTY_SELECTION,
        }
    }

    /// Whether the question has a non-empty answer of either shape.
    pub fn has_answer(&self, question_id: &str) -> bool {
        self.answers
            .get(question_id)
            .is_some_and(|answer| !answer.is_empty())
    }
}
