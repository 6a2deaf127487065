//! Audit pipeline: load, validate, format.
//!
//! # Responsibility
//! - Run the full reconciliation over in-memory collections or dataset files.
//! - Emit metadata-only diagnostic events per run.
//!
//! # Invariants
//! - A dataset that cannot be loaded yields a soft-failure report, never a
//!   panic or an error return; rendering must always have something to show.

use crate::dataset::{load_backlog, load_sprints};
use crate::model::backlog::BacklogItem;
use crate::model::sprint::SprintTask;
use crate::validate::{format_report, validate, FormattedReport, ValidationReport};
use log::{info, warn};
use std::path::Path;

/// Validates in-memory collections and formats the result.
pub fn run_audit(backlog: &[BacklogItem], tasks: &[SprintTask]) -> FormattedReport {
    let report = validate(backlog, tasks);
    log_outcome(&report);
    format_report(&report)
}

/// Loads the backlog and sprint documents, then validates and formats.
///
/// # Contract
/// - Sprint files are concatenated in argument order before validation, so
///   the backlog totals are compared against the whole recorded history.
/// - Any load failure returns a report marked invalid with a single
///   descriptive error.
pub fn run_audit_from_files<P: AsRef<Path>>(
    backlog_path: impl AsRef<Path>,
    sprint_paths: &[P],
) -> FormattedReport {
    let backlog = match load_backlog(backlog_path) {
        Ok(backlog) => backlog,
        Err(err) => return soft_failure(err.to_string()),
    };
    let tasks = match load_sprints(sprint_paths) {
        Ok(tasks) => tasks,
        Err(err) => return soft_failure(err.to_string()),
    };
    run_audit(&backlog, &tasks)
}

fn soft_failure(message: String) -> FormattedReport {
    warn!("event=audit_run module=service status=error reason=dataset_unavailable");
    format_report(&ValidationReport::invalid_input(message))
}

fn log_outcome(report: &ValidationReport) {
    info!(
        "event=audit_run module=service status={} errors={} warnings={} items={}",
        if report.is_valid { "ok" } else { "invalid" },
        report.errors.len(),
        report.warnings.len(),
        report.details.len()
    );
}
