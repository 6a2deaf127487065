//! Presentation-ready report formatting.
//!
//! # Responsibility
//! - Transform a raw [`ValidationReport`] into counts, indexed messages and
//!   per-item rows annotated with severity, ready for direct rendering.
//!
//! # Invariants
//! - Formatting is pure; it never re-runs validation or mutates its input.
//! - Item rows follow the report's deterministic detail order.

use crate::validate::report::{ItemDetail, ItemStatus, ValidationReport};
use serde::{Deserialize, Serialize};

/// Three-level rendering severity derived from [`ItemStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl From<ItemStatus> for Severity {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Valid => Self::Success,
            ItemStatus::MissingSprintData => Self::Warning,
            ItemStatus::EffettivoMismatch | ItemStatus::StimaMismatch => Self::Error,
        }
    }
}

/// One indexed error or warning line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub id: usize,
    pub message: String,
    pub severity: Severity,
}

/// Headline counts for the report banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub total_items: usize,
}

/// Per-item row for the reconciliation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    pub item_name: String,
    #[serde(flatten)]
    pub detail: ItemDetail,
    pub is_valid: bool,
    pub severity: Severity,
}

/// Formatted report consumed by presentation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedReport {
    pub summary: ReportSummary,
    pub errors: Vec<MessageEntry>,
    pub warnings: Vec<MessageEntry>,
    pub item_details: Vec<ItemRow>,
}

/// Formats a validation report for display.
pub fn format_report(report: &ValidationReport) -> FormattedReport {
    FormattedReport {
        summary: ReportSummary {
            is_valid: report.is_valid,
            error_count: report.errors.len(),
            warning_count: report.warnings.len(),
            total_items: report.details.len(),
        },
        errors: indexed_messages(&report.errors, Severity::Error),
        warnings: indexed_messages(&report.warnings, Severity::Warning),
        item_details: report
            .details
            .iter()
            .map(|(name, detail)| item_row(name, detail))
            .collect(),
    }
}

fn indexed_messages(messages: &[String], severity: Severity) -> Vec<MessageEntry> {
    messages
        .iter()
        .enumerate()
        .map(|(id, message)| MessageEntry {
            id,
            message: message.clone(),
            severity,
        })
        .collect()
}

fn item_row(name: &str, detail: &ItemDetail) -> ItemRow {
    ItemRow {
        item_name: name.to_string(),
        detail: detail.clone(),
        is_valid: detail.status == ItemStatus::Valid,
        severity: Severity::from(detail.status),
    }
}
