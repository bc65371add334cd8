use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{fixture_snapshot, init_db_with_data, ps, setup_test_db, write_snapshot};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    ps().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_import_reports_counts() {
    let db_path = setup_test_db("import_counts");

    ps().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let snapshot = write_snapshot("import_counts", &fixture_snapshot());

    ps().args(["--db", &db_path, "--test", "import", "--file", &snapshot])
        .assert()
        .success()
        .stdout(contains("6 users"))
        .stdout(contains("2 teams"))
        .stdout(contains("9 punch events"));
}

#[test]
fn test_import_rejects_broken_hierarchy() {
    let db_path = setup_test_db("import_broken");

    ps().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // Punch referencing a user that does not exist
    let snapshot = write_snapshot(
        "import_broken",
        &serde_json::json!({
            "users": [
                { "id": 1, "name": "Alice", "role": "Employee", "team_id": null, "manager_id": null }
            ],
            "teams": [],
            "punches": [
                { "id": 1, "user_id": 99, "timestamp": "2026-01-06T08:00:00Z", "kind": "Arrival" }
            ]
        }),
    );

    ps().args(["--db", &db_path, "--test", "import", "--file", &snapshot])
        .assert()
        .failure()
        .stderr(contains("Import error"))
        .stderr(contains("unknown user 99"));
}

#[test]
fn test_user_statistics_output() {
    let db_path = init_db_with_data("user_stats_output");

    // Alice in January: 8h on the 6th plus 8.5h on the 7th
    ps().args(["--db", &db_path, "--test", "user", "1", "--range", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("period: 2026-01"))
        .stdout(contains("16h 30m"))
        .stdout(contains("Days worked:"))
        .stdout(contains("100%"))
        .stdout(contains("Excellent"));
}

#[test]
fn test_user_sessions_listing() {
    let db_path = init_db_with_data("user_sessions_listing");

    ps().args([
        "--db",
        &db_path,
        "--test",
        "user",
        "1",
        "--range",
        "2026-01",
        "--sessions",
    ])
    .assert()
    .success()
    .stdout(contains("Date"))
    .stdout(contains("2026-01-06"))
    .stdout(contains("2026-01-07"));
}

#[test]
fn test_user_anomalies_listing() {
    let db_path = init_db_with_data("user_anomalies_listing");

    // Carol has two arrivals before her only departure
    ps().args(["--db", &db_path, "--test", "user", "3", "--anomalies"])
        .assert()
        .success()
        .stdout(contains("DuplicateArrival"));
}

#[test]
fn test_user_without_timetable_omits_punctuality() {
    let db_path = init_db_with_data("user_no_timetable");

    ps().args(["--db", &db_path, "--test", "user", "6"])
        .assert()
        .success()
        .stdout(contains("Frank"))
        .stdout(contains("no timetable"))
        .stdout(contains("%").not());
}

#[test]
fn test_unknown_user_fails() {
    let db_path = init_db_with_data("unknown_user_cli");

    ps().args(["--db", &db_path, "--test", "user", "999"])
        .assert()
        .failure()
        .stderr(contains("Unknown user: 999"));
}

#[test]
fn test_unknown_team_fails() {
    let db_path = init_db_with_data("unknown_team_cli");

    ps().args(["--db", &db_path, "--test", "team", "42"])
        .assert()
        .failure()
        .stderr(contains("Unknown team: 42"));
}

#[test]
fn test_inverted_range_fails() {
    let db_path = init_db_with_data("inverted_range_cli");

    ps().args([
        "--db",
        &db_path,
        "--test",
        "user",
        "1",
        "--range",
        "2026-02:2026-01",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid range"));
}

#[test]
fn test_malformed_range_fails() {
    let db_path = init_db_with_data("malformed_range_cli");

    ps().args(["--db", &db_path, "--test", "user", "1", "--range", "2026-9"])
        .assert()
        .failure()
        .stderr(contains("Invalid"));
}

#[test]
fn test_team_statistics_output() {
    let db_path = init_db_with_data("team_stats_output");

    ps().args(["--db", &db_path, "--test", "team", "1", "--range", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Support"))
        .stdout(contains("Bob"))
        .stdout(contains("Members:"))
        .stdout(contains("24.50"));
}

#[test]
fn test_team_member_breakdown() {
    let db_path = init_db_with_data("team_members_output");

    ps().args([
        "--db",
        &db_path,
        "--test",
        "team",
        "1",
        "--range",
        "2026-01",
        "--members",
    ])
    .assert()
    .success()
    .stdout(contains("Alice"))
    .stdout(contains("Carol"))
    .stdout(contains("À améliorer"));
}

#[test]
fn test_team_without_timetable_note() {
    let db_path = init_db_with_data("team_no_timetable");

    ps().args(["--db", &db_path, "--test", "team", "2"])
        .assert()
        .success()
        .stdout(contains("R&D"))
        .stdout(contains("no timetable assigned"));
}

#[test]
fn test_admin_statistics_output() {
    let db_path = init_db_with_data("admin_output");

    ps().args(["--db", &db_path, "--test", "admin"])
        .assert()
        .success()
        .stdout(contains("Organization"))
        .stdout(contains("3 employees, 2 managers, 1 admins"))
        .stdout(contains("1 without timetable"));
}

#[test]
fn test_db_info_output() {
    let db_path = init_db_with_data("db_info_output");

    ps().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Users:"))
        .stdout(contains("Punch events:"))
        .stdout(contains("Date range:"));
}

#[test]
fn test_db_check_passes() {
    let db_path = init_db_with_data("db_check_output");

    ps().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}
