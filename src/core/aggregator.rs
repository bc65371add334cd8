//! Per-user statistics over reconstructed work sessions.

use crate::core::reconstructor::Reconstruction;
use crate::models::schedule::ShiftSchedule;
use crate::models::session::WorkSession;
use crate::models::statistics::UserStatistics;
use crate::models::user::User;
use chrono::Duration;
use std::collections::BTreeSet;

/// Round to 2 decimal places (hours totals and means).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Build a user's statistics from their reconstruction and the team's
/// optional shift schedule.
pub fn compute_user_statistics(
    user: &User,
    recon: Reconstruction,
    schedule: Option<&ShiftSchedule>,
    grace_minutes: i64,
) -> UserStatistics {
    let Reconstruction {
        sessions,
        anomalies,
    } = recon;

    let total_hours = round2(sessions.iter().map(|s| s.hours).sum());

    // Distinct calendar dates with at least one session.
    let days: BTreeSet<_> = sessions.iter().map(|s| s.date).collect();
    let total_days = days.len() as u32;

    let average_hours_per_day = if total_days > 0 {
        round2(total_hours / total_days as f64)
    } else {
        0.0
    };

    let punctuality_rate = punctuality_rate(&sessions, schedule, grace_minutes);

    UserStatistics {
        user: user.clone(),
        total_hours,
        total_days,
        average_hours_per_day,
        punctuality_rate,
        sessions,
        anomalies,
    }
}

/// Percentage of sessions whose arrival falls within the grace window of the
/// scheduled shift start. Undefined (None) without a schedule or without
/// sessions: never a division by zero.
fn punctuality_rate(
    sessions: &[WorkSession],
    schedule: Option<&ShiftSchedule>,
    grace_minutes: i64,
) -> Option<u32> {
    let schedule = schedule?;
    if sessions.is_empty() {
        return None;
    }

    let threshold = schedule.shift_start + Duration::minutes(grace_minutes);

    let on_time = sessions
        .iter()
        .filter(|s| s.arrival.time() <= threshold)
        .count();

    let rate = (on_time as f64 / sessions.len() as f64) * 100.0;
    Some(rate.round() as u32)
}

/// Display label for a punctuality rate. Pure function of the numeric rate,
/// never stored.
pub fn punctuality_label(rate: u32) -> &'static str {
    if rate >= 90 {
        "Excellent"
    } else if rate >= 70 {
        "Bien"
    } else {
        "À améliorer"
    }
}
