use chrono::{DateTime, NaiveTime, Utc};
use punchstat::core::aggregator::{compute_user_statistics, punctuality_label, round2};
use punchstat::core::reconstructor::{reconstruct, DuplicateArrivalPolicy, Reconstruction};
use punchstat::models::event::PunchEvent;
use punchstat::models::event_type::EventKind;
use punchstat::models::schedule::ShiftSchedule;
use punchstat::models::session::WorkSession;
use punchstat::models::user::{Role, User};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn session(arrival: &str, departure: &str) -> WorkSession {
    WorkSession::new(ts(arrival), ts(departure))
}

fn user() -> User {
    User {
        id: 1,
        name: "Alice".to_string(),
        role: Role::Employee,
        team_id: Some(1),
        manager_id: Some(2),
    }
}

fn schedule() -> ShiftSchedule {
    ShiftSchedule {
        shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    }
}

fn recon_of(sessions: Vec<WorkSession>) -> Reconstruction {
    Reconstruction {
        sessions,
        anomalies: Vec::new(),
    }
}

#[test]
fn test_punctuality_two_of_three_on_time() {
    // Scenario: shift 08:00, grace 5 min, arrivals 07:59 / 08:02 / 08:10
    let sessions = vec![
        session("2026-01-05T07:59:00Z", "2026-01-05T16:00:00Z"),
        session("2026-01-06T08:02:00Z", "2026-01-06T16:00:00Z"),
        session("2026-01-07T08:10:00Z", "2026-01-07T16:00:00Z"),
    ];

    let stats = compute_user_statistics(&user(), recon_of(sessions), Some(&schedule()), 5);

    assert_eq!(stats.punctuality_rate, Some(67));
    assert_eq!(punctuality_label(67), "À améliorer");
}

#[test]
fn test_punctuality_label_boundaries() {
    assert_eq!(punctuality_label(95), "Excellent");
    assert_eq!(punctuality_label(100), "Excellent");
    assert_eq!(punctuality_label(90), "Excellent");
    assert_eq!(punctuality_label(89), "Bien");
    assert_eq!(punctuality_label(75), "Bien");
    assert_eq!(punctuality_label(70), "Bien");
    assert_eq!(punctuality_label(69), "À améliorer");
    assert_eq!(punctuality_label(0), "À améliorer");
}

#[test]
fn test_empty_event_list_yields_zeroed_stats() {
    // Scenario: user with no punches at all
    let recon = reconstruct(&[], DuplicateArrivalPolicy::KeepLatest);
    let stats = compute_user_statistics(&user(), recon, Some(&schedule()), 5);

    assert_eq!(stats.total_hours, 0.0);
    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.average_hours_per_day, 0.0);
    assert_eq!(stats.punctuality_rate, None);
    assert!(stats.anomalies.is_empty());
}

#[test]
fn test_average_guard_with_only_anomalous_events() {
    // A lone arrival produces an open session and zero closed pairs: the
    // average must stay 0, never NaN
    let events = vec![PunchEvent {
        id: 1,
        user_id: 1,
        timestamp: ts("2026-01-06T08:00:00Z"),
        kind: EventKind::Arrival,
    }];

    let recon = reconstruct(&events, DuplicateArrivalPolicy::KeepLatest);
    let stats = compute_user_statistics(&user(), recon, Some(&schedule()), 5);

    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.average_hours_per_day, 0.0);
    assert!(stats.average_hours_per_day.is_finite());
    assert_eq!(stats.anomalies.len(), 1);
}

#[test]
fn test_totals_and_distinct_days() {
    // Two sessions on the same date count one day
    let sessions = vec![
        session("2026-01-06T08:00:00Z", "2026-01-06T11:30:00Z"),
        session("2026-01-06T12:30:00Z", "2026-01-06T17:00:00Z"),
        session("2026-01-07T08:00:00Z", "2026-01-07T16:15:00Z"),
    ];

    let stats = compute_user_statistics(&user(), recon_of(sessions), None, 5);

    assert_eq!(stats.total_hours, 16.25);
    assert_eq!(stats.total_days, 2);
    assert_eq!(stats.average_hours_per_day, 8.13);
}

#[test]
fn test_no_schedule_means_no_rate() {
    let sessions = vec![session("2026-01-06T08:00:00Z", "2026-01-06T16:00:00Z")];

    let stats = compute_user_statistics(&user(), recon_of(sessions), None, 5);

    assert_eq!(stats.punctuality_rate, None);
}

#[test]
fn test_grace_window_boundary_is_inclusive() {
    // Arrival exactly at shift start + grace is still on time
    let sessions = vec![
        session("2026-01-06T08:05:00Z", "2026-01-06T16:00:00Z"),
        session("2026-01-07T08:06:00Z", "2026-01-07T16:00:00Z"),
    ];

    let stats = compute_user_statistics(&user(), recon_of(sessions), Some(&schedule()), 5);

    assert_eq!(stats.punctuality_rate, Some(50));
}

#[test]
fn test_round2_behaviour() {
    assert_eq!(round2(7.123), 7.12);
    assert_eq!(round2(7.125), 7.13);
    assert_eq!(round2(0.0), 0.0);
}
