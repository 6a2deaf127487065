//! Sprint task model.
//!
//! # Responsibility
//! - Define the per-sprint unit of work attributed to a backlog item.
//!
//! # Invariants
//! - `backlog_item = None` means the task is unassigned; the validator treats
//!   unassigned tasks as one aggregation group of their own.
//! - `days[i]` holds the actual hours booked on day `i`; the day-by-day sum
//!   is expected to equal `effettivo` within tolerance, checked by the
//!   validator.

use crate::model::hours;
use crate::model::key::{self, ItemKey};
use serde::{Deserialize, Serialize};

/// One task row from a sprint table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintTask {
    /// Dotted identifier within the sprint table, e.g. `"1.2"`.
    pub id: String,
    /// Backlog item this task contributes to, by display name.
    ///
    /// Empty or missing source text deserializes to `None`.
    #[serde(
        rename = "backlogItem",
        default,
        deserialize_with = "key::optional_key"
    )]
    pub backlog_item: Option<ItemKey>,
    /// Task description.
    pub task: String,
    /// Assignee, when one volunteered.
    #[serde(default)]
    pub volontario: Option<String>,
    /// Estimated hours.
    #[serde(default, deserialize_with = "hours::lenient")]
    pub stima: f64,
    /// Actual hours declared for the whole task.
    #[serde(default, deserialize_with = "hours::lenient")]
    pub effettivo: f64,
    /// Actual hours per day, indexed by day number.
    #[serde(default, deserialize_with = "hours::lenient_seq")]
    pub days: Vec<f64>,
}

impl SprintTask {
    /// Creates an unassigned task with no day breakdown yet.
    pub fn new(id: impl Into<String>, task: impl Into<String>, stima: f64, effettivo: f64) -> Self {
        Self {
            id: id.into(),
            backlog_item: None,
            task: task.into(),
            volontario: None,
            stima,
            effettivo,
            days: Vec::new(),
        }
    }

    /// Sum of the day-by-day hour entries.
    pub fn day_sum(&self) -> f64 {
        self.days.iter().sum()
    }

    /// Returns whether the task references a backlog item.
    pub fn is_assigned(&self) -> bool {
        self.backlog_item.is_some()
    }
}
