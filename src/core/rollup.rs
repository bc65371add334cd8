//! Team and organization-wide rollups over per-user statistics.
//!
//! Every reduction here is a sum or a mean over an unordered member set:
//! commutative and associative, so member iteration order never changes the
//! result and per-user inputs can safely be computed in parallel.

use crate::core::aggregator::round2;
use crate::models::event::PunchEvent;
use crate::models::statistics::{AdminStatistics, TeamAggregate, UserStatistics};
use crate::models::team::Team;
use crate::models::user::{Role, User};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Which direct-report signal marks a manager as "active" today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveManagerRule {
    /// At least one direct report has an open session today.
    #[default]
    OpenSession,
    /// At least one direct report punched at all today.
    AnyEvent,
}

impl ActiveManagerRule {
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s {
            "open_session" => Some(Self::OpenSession),
            "any_event" => Some(Self::AnyEvent),
            _ => None,
        }
    }

    pub fn as_config_str(&self) -> &'static str {
        match self {
            Self::OpenSession => "open_session",
            Self::AnyEvent => "any_event",
        }
    }
}

/// Fold member statistics into the team aggregate.
pub fn aggregate_team(members: &[UserStatistics]) -> TeamAggregate {
    let n = members.len();
    if n == 0 {
        return TeamAggregate::default();
    }

    let total_hours: f64 = members.iter().map(|m| m.total_hours).sum();
    let days_sum: f64 = members.iter().map(|m| m.total_days as f64).sum();
    let avg_sum: f64 = members.iter().map(|m| m.average_hours_per_day).sum();

    TeamAggregate {
        total_members: n as u32,
        total_hours: round2(total_hours),
        average_days_worked: round2(days_sum / n as f64),
        average_hours_per_day: round2(avg_sum / n as f64),
    }
}

/// Organization-wide counters from the full user/team set plus today's
/// punch events. `today` is injected so the computation stays pure.
pub fn compute_admin_statistics(
    users: &[User],
    teams: &[Team],
    today_events: &[PunchEvent],
    today: NaiveDate,
    rule: ActiveManagerRule,
) -> AdminStatistics {
    let managers = users.iter().filter(|u| u.role == Role::Manager).count() as u32;
    let employees = users.iter().filter(|u| u.role == Role::Employee).count() as u32;
    let admins = users.iter().filter(|u| u.role == Role::Admin).count() as u32;

    let today_recordings = today_events
        .iter()
        .filter(|e| e.date() == today)
        .count() as u32;

    // Latest event per user today decides presence: an arrival with no
    // following departure is an open session.
    let mut latest: HashMap<i64, &PunchEvent> = HashMap::new();
    let mut punched_today: HashSet<i64> = HashSet::new();
    for ev in today_events.iter().filter(|e| e.date() == today) {
        punched_today.insert(ev.user_id);
        latest
            .entry(ev.user_id)
            .and_modify(|cur| {
                if (ev.timestamp, ev.id) > (cur.timestamp, cur.id) {
                    *cur = ev;
                }
            })
            .or_insert(ev);
    }

    let present: HashSet<i64> = latest
        .iter()
        .filter(|(_, ev)| ev.kind.is_arrival())
        .map(|(uid, _)| *uid)
        .collect();

    let currently_present = present.len() as u32;

    let teams_without_timetable = teams.iter().filter(|t| t.schedule.is_none()).count() as u32;

    let avg_team_size = if teams.is_empty() {
        0.0
    } else {
        let member_total: usize = teams
            .iter()
            .map(|t| users.iter().filter(|u| u.team_id == Some(t.id)).count())
            .sum();
        round2(member_total as f64 / teams.len() as f64)
    };

    let active_set: &HashSet<i64> = match rule {
        ActiveManagerRule::OpenSession => &present,
        ActiveManagerRule::AnyEvent => &punched_today,
    };

    let active_managers = users
        .iter()
        .filter(|m| m.role == Role::Manager)
        .filter(|m| {
            users
                .iter()
                .any(|u| u.manager_id == Some(m.id) && active_set.contains(&u.id))
        })
        .count() as u32;

    AdminStatistics {
        total_users: users.len() as u32,
        managers,
        employees,
        admins,
        total_teams: teams.len() as u32,
        today_recordings,
        currently_present,
        teams_without_timetable,
        avg_team_size,
        active_managers,
        inactive_managers: managers - active_managers,
    }
}
