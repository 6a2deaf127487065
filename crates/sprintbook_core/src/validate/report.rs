//! Validation report shapes.
//!
//! # Responsibility
//! - Define the structured output of [`crate::validate::validate`].
//!
//! # Invariants
//! - `is_valid` is false exactly when at least one error was recorded.
//! - `details` iterates in deterministic (lexicographic) key order so repeated
//!   runs serialize byte-identically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Reconciliation outcome for a single backlog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Backlog and sprint totals agree within tolerance.
    Valid,
    /// The item declares hours but no sprint task references it.
    MissingSprintData,
    /// Actual-hour totals disagree.
    EffettivoMismatch,
    /// Estimate totals disagree (only reported when actuals agree).
    StimaMismatch,
}

impl ItemStatus {
    /// Wire name of the status, identical to its serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::MissingSprintData => "missing_sprint_data",
            Self::EffettivoMismatch => "effettivo_mismatch",
            Self::StimaMismatch => "stima_mismatch",
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-task slice of an aggregation group, kept for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskContribution {
    pub id: String,
    pub task: String,
    pub stima: f64,
    pub effettivo: f64,
}

/// Reconciliation detail for one backlog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub backlog_effettivo: f64,
    pub sprint_effettivo: f64,
    pub diff_effettivo: f64,
    pub backlog_stima: f64,
    pub sprint_stima: f64,
    pub diff_stima: f64,
    pub status: ItemStatus,
    /// Sprint tasks that contributed to the item's group totals.
    pub tasks: Vec<TaskContribution>,
}

/// Full outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Keyed by backlog item display name.
    pub details: BTreeMap<String, ItemDetail>,
}

impl ValidationReport {
    /// Creates an empty, valid report to accumulate findings into.
    pub(crate) fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            details: BTreeMap::new(),
        }
    }

    /// Creates the soft-failure report used when input data never reached
    /// the validator (unreadable or malformed dataset documents).
    ///
    /// # Contract
    /// - `is_valid = false` with exactly one error and no details.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
            warnings: Vec::new(),
            details: BTreeMap::new(),
        }
    }
}
