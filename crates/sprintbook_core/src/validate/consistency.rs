//! Consistency checks between backlog and sprint data.
//!
//! # Responsibility
//! - Implement the four-step reconciliation: per-task day sums, task
//!   aggregation by backlog reference, backlog-side comparison, orphan
//!   detection.
//!
//! # Invariants
//! - Errors are appended in input order: task checks first, then backlog
//!   items; orphan warnings follow in lexicographic group-key order.
//! - A day-sum mismatch marks the whole report invalid, the same as an
//!   aggregation mismatch.

use crate::model::backlog::BacklogItem;
use crate::model::key::ItemKey;
use crate::model::sprint::SprintTask;
use crate::validate::report::{ItemDetail, ItemStatus, TaskContribution, ValidationReport};
use std::collections::BTreeMap;

/// Threshold below which two hour totals count as equal.
///
/// Shared by every check; comparisons are strict (`diff > HOURS_TOLERANCE`),
/// so a difference of exactly 0.01 still passes.
pub const HOURS_TOLERANCE: f64 = 0.01;

#[derive(Debug, Default)]
struct GroupTotals {
    effettivo: f64,
    stima: f64,
    tasks: Vec<TaskContribution>,
}

/// Validates a backlog collection against a sprint-task collection.
///
/// # Contract
/// - Either collection empty: returns a single "no validation performed"
///   warning with `is_valid = true` and no details.
/// - Pure and idempotent; repeated calls on equal inputs return equal
///   reports.
pub fn validate(backlog: &[BacklogItem], tasks: &[SprintTask]) -> ValidationReport {
    let mut report = ValidationReport::new();

    if backlog.is_empty() || tasks.is_empty() {
        report
            .warnings
            .push("no validation performed: one or both datasets are empty".to_string());
        return report;
    }

    check_day_sums(tasks, &mut report);

    let groups = group_by_backlog_item(tasks);
    reconcile_backlog(backlog, &groups, &mut report);
    warn_orphan_groups(backlog, &groups, &mut report);

    report
}

/// Step 1: each task's day entries must add up to its declared total.
fn check_day_sums(tasks: &[SprintTask], report: &mut ValidationReport) {
    for task in tasks {
        if task.days.is_empty() {
            continue;
        }
        let day_sum = task.day_sum();
        let difference = (day_sum - task.effettivo).abs();
        if difference > HOURS_TOLERANCE {
            report.is_valid = false;
            report.errors.push(format!(
                "task \"{}\" (id {}): day entries sum to {day_sum}h but effettivo is {}h (difference: {difference:.2}h)",
                task.task, task.id, task.effettivo
            ));
        }
    }
}

/// Step 2: sum task hours per backlog reference.
///
/// `None` collects the unassigned tasks; it is a regular group for totals
/// but never reported as an orphan.
fn group_by_backlog_item(tasks: &[SprintTask]) -> BTreeMap<Option<ItemKey>, GroupTotals> {
    let mut groups: BTreeMap<Option<ItemKey>, GroupTotals> = BTreeMap::new();
    for task in tasks {
        let group = groups.entry(task.backlog_item.clone()).or_default();
        group.effettivo += task.effettivo;
        group.stima += task.stima;
        group.tasks.push(TaskContribution {
            id: task.id.clone(),
            task: task.task.clone(),
            stima: task.stima,
            effettivo: task.effettivo,
        });
    }
    groups
}

/// Step 3: compare each backlog item against its group totals.
///
/// Actuals are checked before estimates; only the first mismatch is reported
/// per item. Items with zero declared hours and no group are skipped
/// entirely.
fn reconcile_backlog(
    backlog: &[BacklogItem],
    groups: &BTreeMap<Option<ItemKey>, GroupTotals>,
    report: &mut ValidationReport,
) {
    for item in backlog {
        let Some(group) = groups.get(&Some(item.item.clone())) else {
            if item.has_declared_hours() {
                report.warnings.push(format!(
                    "backlog item \"{}\" has effettivo {}h, stima {}h but no corresponding sprint tasks",
                    item.item, item.effettivo, item.stima
                ));
                report.details.insert(
                    item.item.to_string(),
                    ItemDetail {
                        backlog_effettivo: item.effettivo,
                        sprint_effettivo: 0.0,
                        diff_effettivo: item.effettivo,
                        backlog_stima: item.stima,
                        sprint_stima: 0.0,
                        diff_stima: item.stima,
                        status: ItemStatus::MissingSprintData,
                        tasks: Vec::new(),
                    },
                );
            }
            continue;
        };

        let diff_effettivo = (item.effettivo - group.effettivo).abs();
        let diff_stima = (item.stima - group.stima).abs();

        let status = if diff_effettivo > HOURS_TOLERANCE {
            report.is_valid = false;
            report.errors.push(format!(
                "mismatch in \"{}\" effettivo: backlog shows {}h, sprint tasks total {}h (difference: {diff_effettivo:.2}h)",
                item.item, item.effettivo, group.effettivo
            ));
            ItemStatus::EffettivoMismatch
        } else if diff_stima > HOURS_TOLERANCE {
            report.is_valid = false;
            report.errors.push(format!(
                "mismatch in \"{}\" stima: backlog shows {}h, sprint tasks total {}h (difference: {diff_stima:.2}h)",
                item.item, item.stima, group.stima
            ));
            ItemStatus::StimaMismatch
        } else {
            ItemStatus::Valid
        };

        report.details.insert(
            item.item.to_string(),
            ItemDetail {
                backlog_effettivo: item.effettivo,
                sprint_effettivo: group.effettivo,
                diff_effettivo,
                backlog_stima: item.stima,
                sprint_stima: group.stima,
                diff_stima,
                status,
                tasks: group.tasks.clone(),
            },
        );
    }
}

/// Step 4: assigned groups whose key matches no backlog item.
fn warn_orphan_groups(
    backlog: &[BacklogItem],
    groups: &BTreeMap<Option<ItemKey>, GroupTotals>,
    report: &mut ValidationReport,
) {
    for (key, group) in groups {
        let Some(key) = key else {
            continue;
        };
        if backlog.iter().any(|item| item.item == *key) {
            continue;
        }
        report.warnings.push(format!(
            "sprint tasks for \"{key}\" (effettivo {}h, stima {}h) have no corresponding backlog item",
            group.effettivo, group.stima
        ));
    }
}
