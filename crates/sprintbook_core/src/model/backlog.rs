//! Backlog item model.
//!
//! # Responsibility
//! - Define the top-level unit of planned work with aggregate hour figures.
//!
//! # Invariants
//! - `item` is the join key matched by sprint tasks; it is validated non-empty
//!   at construction and deserialization.
//! - `sprints[i]` holds the actual hours booked in sprint `i`; the vector may
//!   be shorter than the number of sprints run so far.

use crate::model::hours;
use crate::model::key::ItemKey;
use serde::{Deserialize, Serialize};

/// One backlog entry with estimated and recorded hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogItem {
    /// Positional identifier within the backlog table.
    pub id: u32,
    /// Display name, used as the join key for sprint tasks.
    pub item: ItemKey,
    /// Estimated hours.
    #[serde(default, deserialize_with = "hours::lenient")]
    pub stima: f64,
    /// Actual hours recorded across all sprints.
    #[serde(default, deserialize_with = "hours::lenient")]
    pub effettivo: f64,
    /// Actual hours per sprint, indexed by sprint number.
    #[serde(default, deserialize_with = "hours::lenient_seq")]
    pub sprints: Vec<f64>,
}

impl BacklogItem {
    /// Creates an item with no per-sprint breakdown yet.
    pub fn new(id: u32, item: ItemKey, stima: f64, effettivo: f64) -> Self {
        Self {
            id,
            item,
            stima,
            effettivo,
            sprints: Vec::new(),
        }
    }

    /// Returns whether the item declares any planned or recorded hours.
    pub fn has_declared_hours(&self) -> bool {
        self.effettivo > 0.0 || self.stima > 0.0
    }
}
