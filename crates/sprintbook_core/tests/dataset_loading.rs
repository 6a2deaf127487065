use sprintbook_core::{load_backlog, load_sprint, load_sprints, DatasetError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("test file should be writable");
    path
}

#[test]
fn loads_backlog_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "backlog.json",
        r#"[
            {"id": 1, "item": "Setup repository", "stima": 6, "effettivo": 6, "sprints": [6, 0, 0]},
            {"id": 2, "item": "Domain modeling", "stima": 12, "effettivo": 14, "sprints": [14, 0, 0]}
        ]"#,
    );

    let backlog = load_backlog(&path).expect("document should load");
    assert_eq!(backlog.len(), 2);
    assert_eq!(backlog[0].item.as_str(), "Setup repository");
    assert_eq!(backlog[0].stima, 6.0);
    assert_eq!(backlog[1].sprints, vec![14.0, 0.0, 0.0]);
}

#[test]
fn loads_sprint_document_with_wire_field_names() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "sprint1.json",
        r#"[
            {
                "backlogItem": "Setup repository",
                "id": "1.1",
                "task": "Inizializzazione progetto",
                "volontario": "Ceredi",
                "stima": 0.5,
                "effettivo": 0.5,
                "days": [0.5, 0, 0]
            }
        ]"#,
    );

    let tasks = load_sprint(&path).expect("document should load");
    assert_eq!(tasks.len(), 1);
    let task = &tasks[0];
    assert_eq!(task.id, "1.1");
    assert_eq!(
        task.backlog_item.as_ref().map(|key| key.as_str()),
        Some("Setup repository")
    );
    assert_eq!(task.volontario.as_deref(), Some("Ceredi"));
    assert_eq!(task.day_sum(), 0.5);
}

#[test]
fn empty_backlog_reference_loads_as_unassigned() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "sprint.json",
        r#"[{"backlogItem": "", "id": "x.1", "task": "triage", "stima": 1, "effettivo": 1}]"#,
    );

    let tasks = load_sprint(&path).expect("document should load");
    assert!(!tasks[0].is_assigned());
    assert!(tasks[0].days.is_empty());
    assert_eq!(tasks[0].volontario, None);
}

#[test]
fn non_numeric_hours_load_as_zero() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "sprint.json",
        r#"[{
            "backlogItem": "Setup",
            "id": "1.1",
            "task": "spike",
            "stima": "tbd",
            "effettivo": null,
            "days": [1, "sick", 2]
        }]"#,
    );

    let tasks = load_sprint(&path).expect("lenient fields should not fail the document");
    assert_eq!(tasks[0].stima, 0.0);
    assert_eq!(tasks[0].effettivo, 0.0);
    assert_eq!(tasks[0].days, vec![1.0, 0.0, 2.0]);
}

#[test]
fn empty_backlog_item_name_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "backlog.json",
        r#"[{"id": 1, "item": "  ", "stima": 6, "effettivo": 6}]"#,
    );

    let err = load_backlog(&path).expect_err("blank join key must be rejected");
    assert!(matches!(err, DatasetError::Parse { .. }));
    assert!(err.to_string().contains("backlog.json"));
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.json");

    let err = load_backlog(&path).expect_err("missing file must fail");
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_reports_parse_error_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "broken.json", "[{");

    let err = load_sprint(&path).expect_err("malformed document must fail");
    assert!(matches!(err, DatasetError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn load_sprints_concatenates_in_argument_order() {
    let dir = TempDir::new().expect("temp dir");
    let first = write_file(
        &dir,
        "sprint0.json",
        r#"[{"backlogItem": "Setup", "id": "0.1", "task": "a", "stima": 1, "effettivo": 1}]"#,
    );
    let second = write_file(
        &dir,
        "sprint1.json",
        r#"[{"backlogItem": "Setup", "id": "1.1", "task": "b", "stima": 2, "effettivo": 2}]"#,
    );

    let tasks = load_sprints(&[&first, &second]).expect("documents should load");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "0.1");
    assert_eq!(tasks[1].id, "1.1");
}
