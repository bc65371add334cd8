#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ps() -> Command {
    cargo_bin_cmd!("punchstat")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchstat.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a snapshot JSON document to a temp file, returning its path
pub fn write_snapshot(name: &str, snapshot: &serde_json::Value) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_snapshot.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
    p
}

/// Standard dataset shared by many tests.
///
/// Team 1 "Support" has an 08:00-17:00 timetable, Bob manages it and Alice /
/// Carol report to him. Team 2 "R&D" has no timetable. Punches cover the
/// first week of 2026 and include one malformed day for Carol.
pub fn fixture_snapshot() -> serde_json::Value {
    serde_json::json!({
        "teams": [
            { "id": 1, "name": "Support", "manager_id": 2,
              "shift_start": "08:00", "shift_end": "17:00" },
            { "id": 2, "name": "R&D", "manager_id": 5 }
        ],
        "users": [
            { "id": 1, "name": "Alice", "role": "Employee", "team_id": 1, "manager_id": 2 },
            { "id": 2, "name": "Bob", "role": "Manager", "team_id": 1, "manager_id": null },
            { "id": 3, "name": "Carol", "role": "Employee", "team_id": 1, "manager_id": 2 },
            { "id": 4, "name": "Dave", "role": "Admin", "team_id": null, "manager_id": null },
            { "id": 5, "name": "Erin", "role": "Manager", "team_id": 2, "manager_id": null },
            { "id": 6, "name": "Frank", "role": "Employee", "team_id": 2, "manager_id": 5 }
        ],
        "punches": [
            { "id": 1, "user_id": 1, "timestamp": "2026-01-06T08:00:00Z", "kind": "Arrival" },
            { "id": 2, "user_id": 1, "timestamp": "2026-01-06T16:00:00Z", "kind": "Departure" },
            { "id": 3, "user_id": 1, "timestamp": "2026-01-07T08:02:00Z", "kind": "Arrival" },
            { "id": 4, "user_id": 1, "timestamp": "2026-01-07T16:32:00Z", "kind": "Departure" },

            { "id": 5, "user_id": 3, "timestamp": "2026-01-06T08:30:00Z", "kind": "Arrival" },
            { "id": 6, "user_id": 3, "timestamp": "2026-01-06T09:00:00Z", "kind": "Arrival" },
            { "id": 7, "user_id": 3, "timestamp": "2026-01-06T17:00:00Z", "kind": "Departure" },

            { "id": 8, "user_id": 6, "timestamp": "2026-01-06T10:00:00Z", "kind": "Arrival" },
            { "id": 9, "user_id": 6, "timestamp": "2026-01-06T18:00:00Z", "kind": "Departure" }
        ]
    })
}

/// Initialize DB and import the standard fixture via the CLI
pub fn init_db_with_data(name: &str) -> String {
    let db_path = setup_test_db(name);

    ps().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let snapshot = write_snapshot(name, &fixture_snapshot());
    ps().args(["--db", &db_path, "--test", "import", "--file", &snapshot])
        .assert()
        .success();

    db_path
}
