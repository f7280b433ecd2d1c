use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(db_path: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("leadboard")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(db_path: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("leadboard")
        .args(["--db-path", db_path.to_str().expect("db path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn exit_code(db_path: &Path, args: &[&str]) -> Option<i32> {
    cargo_bin_cmd!("leadboard")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
        .status
        .code()
}

#[test]
fn cli_add_edit_interaction_delete_flow() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("leadboard.sqlite3");

    let seeded = run_cmd_json(&db_path, &["list"]);
    assert_eq!(seeded.as_array().expect("array").len(), 3);

    let created = run_cmd_json(
        &db_path,
        &[
            "add-lead",
            "--name",
            "Ada Lovelace",
            "--email",
            "ada@example.com",
            "--phone",
            "555-0101",
        ],
    );
    let id = created["id"].as_str().expect("id").to_string();
    assert_eq!(created["status"], "new");

    let edited = run_cmd_json(&db_path, &["edit-lead", &id, "--status", "Em Contato"]);
    assert_eq!(edited["status"], "in_contact");
    assert_eq!(edited["registeredAt"], created["registeredAt"]);

    run_cmd(
        &db_path,
        &[
            "add-interaction",
            &id,
            "--kind",
            "call",
            "--description",
            "Intro call",
        ],
    );
    let detail = run_cmd_json(&db_path, &["show", &id]);
    assert_eq!(detail["interactionHistory"][0]["description"], "Intro call");

    let filtered = run_cmd_json(&db_path, &["list", "--status", "in_contact"]);
    let names: Vec<&str> = filtered
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert!(names.contains(&"Ada Lovelace"));
    assert!(names.contains(&"Carlos Oliveira"));

    run_cmd(&db_path, &["delete", &id]);
    assert_eq!(exit_code(&db_path, &["delete", &id]), Some(2));
    assert_eq!(exit_code(&db_path, &["show", &id]), Some(2));
}

#[test]
fn cli_rejects_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("leadboard.sqlite3");

    assert_eq!(
        exit_code(
            &db_path,
            &["add-lead", "--name", " ", "--email", "a@x.com", "--phone", "1"]
        ),
        Some(3)
    );
    assert_eq!(
        exit_code(
            &db_path,
            &[
                "add-lead", "--name", "Ada", "--email", "a@x.com", "--phone", "1", "--status",
                "maybe"
            ]
        ),
        Some(3)
    );
    assert_eq!(exit_code(&db_path, &["show", "not-an-id"]), Some(3));
    assert_eq!(exit_code(&db_path, &["show", "  "]), Some(3));
    assert_eq!(exit_code(&db_path, &["delete", ""]), Some(3));
}

#[test]
fn cli_list_searches_contact_fields() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("leadboard.sqlite3");

    let everyone = run_cmd_json(&db_path, &["list", "--query", "@EMAIL.com"]);
    assert_eq!(everyone.as_array().expect("array").len(), 3);

    let by_name = run_cmd_json(&db_path, &["list", "--query", "SANTOS"]);
    let by_name = by_name.as_array().expect("array");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0]["name"], "Maria Santos");

    let by_phone = run_cmd_json(&db_path, &["list", "-q", "99876"]);
    assert_eq!(by_phone.as_array().expect("array").len(), 1);
    assert_eq!(by_phone[0]["name"], "Carlos Oliveira");

    let combined = run_cmd_json(&db_path, &["list", "--status", "new", "--query", "maria"]);
    assert!(combined.as_array().expect("array").is_empty());

    let text = run_cmd(&db_path, &["list", "--query", "nobody"]);
    assert!(text.contains("no leads"));
}

#[test]
fn cli_export_then_import_csv() {
    let temp = TempDir::new().expect("temp dir");
    let source_db = temp.path().join("source.sqlite3");
    let target_db = temp.path().join("target.sqlite3");
    let csv_path = temp.path().join("leads.csv");

    let report = run_cmd_json(
        &source_db,
        &["export", "csv", "--out", csv_path.to_str().expect("csv path")],
    );
    assert_eq!(report["count"], 3);
    let contents = fs::read_to_string(&csv_path).expect("read csv");
    assert!(contents.contains("\"João da Silva\""));

    let imported = run_cmd_json(
        &target_db,
        &["import", "csv", csv_path.to_str().expect("csv path")],
    );
    assert_eq!(imported["created"], 3);
    assert_eq!(imported["skipped"], 0);

    let list = run_cmd_json(&target_db, &["list"]);
    assert_eq!(list.as_array().expect("array").len(), 6);
}

#[test]
fn cli_import_without_rows_is_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("leadboard.sqlite3");
    let csv_path = temp.path().join("empty.csv");
    fs::write(&csv_path, "Name,Email,Phone,Status\n").expect("write csv");

    assert_eq!(
        exit_code(
            &db_path,
            &["import", "csv", csv_path.to_str().expect("csv path")]
        ),
        Some(3)
    );
}
