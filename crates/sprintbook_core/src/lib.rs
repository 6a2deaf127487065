//! Core logic for sprint/backlog planning data.
//! This crate is the single source of truth for reconciliation invariants.

pub mod dataset;
pub mod logging;
pub mod model;
pub mod service;
pub mod summary;
pub mod validate;

pub use dataset::{load_backlog, load_sprint, load_sprints, DatasetError, DatasetResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::backlog::BacklogItem;
pub use model::key::{ItemKey, ItemKeyError};
pub use model::sprint::SprintTask;
pub use service::audit::{run_audit, run_audit_from_files};
pub use summary::{backlog_totals, sprint_totals, BacklogTotals, SprintTotals};
pub use validate::{
    format_report, validate, FormattedReport, ItemDetail, ItemRow, ItemStatus, MessageEntry,
    ReportSummary, Severity, TaskContribution, ValidationReport, HOURS_TOLERANCE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
