//! Priority classification from the step-8 risk selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{RISK_CUSTOMER_LOSS, RISK_LEGAL, RISK_NO_IMPACT};
use crate::domain::errors::WizardError;

/// Derived urgency classification for a submission. Computed, never
/// user-supplied, and stored as its wire token (LOW/MEDIUM/HIGH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(WizardError::UnknownPriority {
                token: other.to_string(),
            }),
        }
    }
}

/// Classify priority from the selected risk tokens (question `v8`).
///
/// - "no impact" selected: LOW, regardless of other selections
/// - two or more risks, or customer loss, or legal risk: HIGH
/// - anything else, including an empty selection: MEDIUM
pub fn classify_priority(risks: &[String]) -> Priority {
    if risks.iter().any(|r| r == RISK_NO_IMPACT) {
        Priority::Low
    } else if risks.len() >= 2
        || risks.iter().any(|r| r == RISK_CUSTOMER_LOSS)
        || risks.iter().any(|r| r == RISK_LEGAL)
    {
        Priority::High
    } else {
        Priority::Medium
    }
}
