//! Result composer: answers in, narrative statement and priority out.
//!
//! Pure and deterministic. The Turkish sentence template is a wire contract
//! with the existing deployment; only the substituted tokens vary.

use crate::domain::catalog::QUALITATIVE_INDICATORS;
use crate::domain::goal::answers::AnswerSet;
use crate::domain::goal::priority::{classify_priority, Priority};

/// Placeholder substituted for any missing single-choice answer.
const ELLIPSIS: &str = "...";

/// The composed narrative and its derived priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedResult {
    pub text: String,
    pub priority: Priority,
}

/// Compose the goal statement and classify its priority.
///
/// Tokens come from the stored answer values. Single-choice answers that are
/// missing fall back to `"..."`; missing multi-choice answers join to an
/// empty string. `v1` and `v6` are lower-cased because they land
/// mid-sentence.
pub fn compose(
    answers: &AnswerSet,
    current_value: Option<&str>,
    target_value: Option<&str>,
    subject: Option<&str>,
) -> ComposedResult {
    let v1 = answers.single("v1").unwrap_or(ELLIPSIS).to_lowercase();
    let v2 = answers.multiple("v2").join(" ve ");
    let v3 = answers.single("v3").unwrap_or(ELLIPSIS);
    let v4 = answers.multiple("v4").join(", ");
    let v5 = answers.single("v5").unwrap_or(ELLIPSIS);
    let v6 = answers.single("v6").unwrap_or(ELLIPSIS).to_lowercase();

    let number_text = number_text(v5, current_value, target_value);

    let subject_prefix = match subject {
        Some(subject) if !subject.is_empty() => format!("{subject} kapsamında; "),
        _ => String::new(),
    };

    let text = format!(
        "{subject_prefix}{v3} alanında, {v2} konularıyla ilgili {v1} çalışmaları \
         yapılarak; sürecin {v4} hale getirilmesi ve {v6}{number_text} hedeflenmektedir."
    );

    ComposedResult {
        text,
        priority: classify_priority(answers.multiple("v8")),
    }
}

/// The indicator clause. Qualitative indicators always keep the generic
/// phrasing; quantitative ones switch to the from/to phrasing when both
/// values were captured.
fn number_text(v5: &str, current_value: Option<&str>, target_value: Option<&str>) -> String {
    if !QUALITATIVE_INDICATORS.contains(&v5) {
        if let (Some(current), Some(target)) = (current_value, target_value) {
            if !current.is_empty() && !target.is_empty() {
                return format!(" {v5} değerini {current} seviyesinden {target} seviyesine getirmek");
            }
        }
    }
    format!(" {v5} göstergesini iyileştirmek")
}

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;
