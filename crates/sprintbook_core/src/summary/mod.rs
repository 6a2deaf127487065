//! Aggregate hour totals for the planning tables.
//!
//! # Responsibility
//! - Compute the footer totals the backlog and sprint tables display:
//!   overall stima/effettivo plus per-sprint and per-day columns.
//!
//! # Invariants
//! - Column vectors are sized to the longest breakdown in the input; rows
//!   with shorter breakdowns contribute zero to the missing columns.

use crate::model::backlog::BacklogItem;
use crate::model::sprint::SprintTask;
use serde::{Deserialize, Serialize};

/// Footer totals for the backlog table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogTotals {
    pub stima: f64,
    pub effettivo: f64,
    /// Actual hours booked per sprint, summed over all items.
    pub per_sprint: Vec<f64>,
}

/// Footer totals for one sprint table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintTotals {
    pub stima: f64,
    pub effettivo: f64,
    /// Actual hours booked per day, summed over all tasks.
    pub per_day: Vec<f64>,
}

/// Sums backlog hours and per-sprint columns.
pub fn backlog_totals(items: &[BacklogItem]) -> BacklogTotals {
    let columns = items.iter().map(|item| item.sprints.len()).max().unwrap_or(0);
    let mut totals = BacklogTotals {
        stima: 0.0,
        effettivo: 0.0,
        per_sprint: vec![0.0; columns],
    };
    for item in items {
        totals.stima += item.stima;
        totals.effettivo += item.effettivo;
        accumulate(&mut totals.per_sprint, &item.sprints);
    }
    totals
}

/// Sums sprint-task hours and per-day columns.
pub fn sprint_totals(tasks: &[SprintTask]) -> SprintTotals {
    let columns = tasks.iter().map(|task| task.days.len()).max().unwrap_or(0);
    let mut totals = SprintTotals {
        stima: 0.0,
        effettivo: 0.0,
        per_day: vec![0.0; columns],
    };
    for task in tasks {
        totals.stima += task.stima;
        totals.effettivo += task.effettivo;
        accumulate(&mut totals.per_day, &task.days);
    }
    totals
}

fn accumulate(columns: &mut [f64], values: &[f64]) {
    for (column, value) in columns.iter_mut().zip(values) {
        *column += value;
    }
}
