//! CLI entry point for dataset audits.
//!
//! # Responsibility
//! - Run the reconciliation over dataset files and print the formatted
//!   report.
//! - Keep output deterministic for quick local sanity checks.

use sprintbook_core::{run_audit_from_files, FormattedReport};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: sprintbook_cli <backlog.json> <sprint.json>...");
        eprintln!("sprintbook_core version={}", sprintbook_core::core_version());
        return ExitCode::from(2);
    }

    let backlog_path = &args[0];
    let sprint_paths = &args[1..];
    let report = run_audit_from_files(backlog_path, sprint_paths);
    print_report(&report);

    if report.summary.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &FormattedReport) {
    println!(
        "valid={} errors={} warnings={} items={}",
        report.summary.is_valid,
        report.summary.error_count,
        report.summary.warning_count,
        report.summary.total_items
    );
    for entry in &report.errors {
        println!("error[{}]: {}", entry.id, entry.message);
    }
    for entry in &report.warnings {
        println!("warning[{}]: {}", entry.id, entry.message);
    }
    for row in &report.item_details {
        println!(
            "item \"{}\": status={} backlog_effettivo={}h sprint_effettivo={}h diff={}h",
            row.item_name,
            row.detail.status,
            row.detail.backlog_effettivo,
            row.detail.sprint_effettivo,
            row.detail.diff_effettivo
        );
    }
}
