//! Backlog/sprint consistency validation.
//!
//! # Responsibility
//! - Cross-check hour totals between the backlog table and the sprint task
//!   tables, and each task's day breakdown against its declared total.
//! - Produce a transient report consumed by presentation code.
//!
//! # Invariants
//! - Validation is a pure function: no I/O, no shared state, equal inputs
//!   yield equal reports.
//! - All hour comparisons share [`HOURS_TOLERANCE`] with a strict `>` test.
//!
//! # See also
//! - crate::service

mod consistency;
mod format;
mod report;

pub use consistency::{validate, HOURS_TOLERANCE};
pub use format::{format_report, FormattedReport, ItemRow, MessageEntry, ReportSummary, Severity};
pub use report::{ItemDetail, ItemStatus, TaskContribution, ValidationReport};
