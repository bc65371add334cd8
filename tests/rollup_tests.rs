use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use punchstat::core::aggregator::compute_user_statistics;
use punchstat::core::reconstructor::Reconstruction;
use punchstat::core::rollup::{aggregate_team, compute_admin_statistics, ActiveManagerRule};
use punchstat::models::event::PunchEvent;
use punchstat::models::event_type::EventKind;
use punchstat::models::schedule::ShiftSchedule;
use punchstat::models::session::WorkSession;
use punchstat::models::statistics::UserStatistics;
use punchstat::models::team::Team;
use punchstat::models::user::{Role, User};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn employee(id: i64, name: &str, team_id: Option<i64>, manager_id: Option<i64>) -> User {
    User {
        id,
        name: name.to_string(),
        role: Role::Employee,
        team_id,
        manager_id,
    }
}

fn manager(id: i64, name: &str, team_id: Option<i64>) -> User {
    User {
        id,
        name: name.to_string(),
        role: Role::Manager,
        team_id,
        manager_id: None,
    }
}

fn member_stats(user: User, sessions: Vec<WorkSession>) -> UserStatistics {
    compute_user_statistics(
        &user,
        Reconstruction {
            sessions,
            anomalies: Vec::new(),
        },
        None,
        5,
    )
}

fn session(arrival: &str, departure: &str) -> WorkSession {
    WorkSession::new(ts(arrival), ts(departure))
}

fn punch(id: i64, user_id: i64, timestamp: &str, kind: EventKind) -> PunchEvent {
    PunchEvent {
        id,
        user_id,
        timestamp: ts(timestamp),
        kind,
    }
}

#[test]
fn test_team_aggregate_numbers() {
    let a = member_stats(
        employee(1, "Alice", Some(1), Some(2)),
        vec![
            session("2026-01-05T08:00:00Z", "2026-01-05T16:00:00Z"),
            session("2026-01-06T08:00:00Z", "2026-01-06T16:00:00Z"),
        ],
    );
    let b = member_stats(
        employee(3, "Carol", Some(1), Some(2)),
        vec![session("2026-01-05T09:00:00Z", "2026-01-05T13:00:00Z")],
    );

    let agg = aggregate_team(&[a, b]);

    assert_eq!(agg.total_members, 2);
    assert_eq!(agg.total_hours, 20.0);
    assert_eq!(agg.average_days_worked, 1.5);
    assert_eq!(agg.average_hours_per_day, 6.0); // mean of 8.0 and 4.0
}

#[test]
fn test_team_aggregate_is_commutative() {
    let a = member_stats(
        employee(1, "Alice", Some(1), Some(2)),
        vec![session("2026-01-05T08:00:00Z", "2026-01-05T15:30:00Z")],
    );
    let b = member_stats(
        employee(3, "Carol", Some(1), Some(2)),
        vec![session("2026-01-06T08:00:00Z", "2026-01-06T12:45:00Z")],
    );
    let c = member_stats(
        employee(6, "Frank", Some(1), Some(2)),
        vec![session("2026-01-07T10:00:00Z", "2026-01-07T18:00:00Z")],
    );

    let forward = aggregate_team(&[a.clone(), b.clone(), c.clone()]);
    let reversed = aggregate_team(&[c, b, a]);

    assert_eq!(forward, reversed);
}

#[test]
fn test_empty_team_aggregate_is_zeroed() {
    let agg = aggregate_team(&[]);

    assert_eq!(agg.total_members, 0);
    assert_eq!(agg.total_hours, 0.0);
    assert_eq!(agg.average_days_worked, 0.0);
    assert_eq!(agg.average_hours_per_day, 0.0);
}

fn org_fixture() -> (Vec<User>, Vec<Team>, Vec<PunchEvent>, NaiveDate) {
    let users = vec![
        employee(1, "Alice", Some(1), Some(2)),
        manager(2, "Bob", Some(1)),
        employee(3, "Carol", Some(1), Some(2)),
        User {
            id: 4,
            name: "Dave".to_string(),
            role: Role::Admin,
            team_id: None,
            manager_id: None,
        },
        manager(5, "Erin", Some(2)),
        employee(6, "Frank", Some(2), Some(5)),
    ];

    let teams = vec![
        Team {
            id: 1,
            name: "Support".to_string(),
            manager_id: Some(2),
            schedule: Some(ShiftSchedule {
                shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            }),
        },
        Team {
            id: 2,
            name: "R&D".to_string(),
            manager_id: Some(5),
            schedule: None,
        },
    ];

    // Today: Alice is in an open session, Frank already left
    let today = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
    let events = vec![
        punch(1, 1, "2026-01-06T08:00:00Z", EventKind::Arrival),
        punch(2, 6, "2026-01-06T08:30:00Z", EventKind::Arrival),
        punch(3, 6, "2026-01-06T12:00:00Z", EventKind::Departure),
    ];

    (users, teams, events, today)
}

#[test]
fn test_admin_counters() {
    let (users, teams, events, today) = org_fixture();

    let stats =
        compute_admin_statistics(&users, &teams, &events, today, ActiveManagerRule::OpenSession);

    assert_eq!(stats.total_users, 6);
    assert_eq!(stats.employees, 3);
    assert_eq!(stats.managers, 2);
    assert_eq!(stats.admins, 1);
    assert_eq!(stats.total_teams, 2);
    assert_eq!(stats.today_recordings, 3);
    // Alice's last event today is an arrival, Frank's is a departure
    assert_eq!(stats.currently_present, 1);
    assert_eq!(stats.teams_without_timetable, 1);
    // Team 1 has 3 members, team 2 has 2 (Dave has no team)
    assert_eq!(stats.avg_team_size, 2.5);
}

#[test]
fn test_active_managers_open_session_rule() {
    let (users, teams, events, today) = org_fixture();

    let stats =
        compute_admin_statistics(&users, &teams, &events, today, ActiveManagerRule::OpenSession);

    // Only Bob has a report (Alice) with an open session
    assert_eq!(stats.active_managers, 1);
    assert_eq!(stats.inactive_managers, 1);
}

#[test]
fn test_active_managers_any_event_rule() {
    let (users, teams, events, today) = org_fixture();

    let stats =
        compute_admin_statistics(&users, &teams, &events, today, ActiveManagerRule::AnyEvent);

    // Frank punched today too, so Erin is also active under the looser rule
    assert_eq!(stats.active_managers, 2);
    assert_eq!(stats.inactive_managers, 0);
}

#[test]
fn test_admin_counters_ignore_other_dates() {
    let (users, teams, mut events, today) = org_fixture();

    // A stale arrival from yesterday must not count anyone as present today
    events.push(punch(9, 3, "2026-01-05T08:00:00Z", EventKind::Arrival));

    let stats =
        compute_admin_statistics(&users, &teams, &events, today, ActiveManagerRule::OpenSession);

    assert_eq!(stats.today_recordings, 3);
    assert_eq!(stats.currently_present, 1);
}
