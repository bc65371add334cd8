use super::anomaly::Anomaly;
use super::session::WorkSession;
use super::team::Team;
use super::user::User;
use chrono::NaiveDate;
use serde::Serialize;

/// Date range echoed back to the caller with team statistics.
/// `None` on both ends means the query was unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Per-user derived statistics. Everything here is a pure function of the
/// user's punch-event slice plus the team's shift schedule.
#[derive(Debug, Clone, Serialize)]
pub struct UserStatistics {
    pub user: User,
    pub total_hours: f64,
    pub total_days: u32,
    pub average_hours_per_day: f64,
    /// Percentage 0..=100; absent when the team has no timetable or the
    /// user has no sessions in the period.
    pub punctuality_rate: Option<u32>,
    pub sessions: Vec<WorkSession>,
    /// Diagnostics collected during reconstruction; never fatal.
    pub anomalies: Vec<Anomaly>,
}

/// Commutative aggregate over a set of member statistics: sums and means
/// only, so member iteration order can never change the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamAggregate {
    pub total_members: u32,
    pub total_hours: f64,
    pub average_days_worked: f64,
    pub average_hours_per_day: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamStatsResponse {
    pub team: Team,
    pub manager: Option<User>,
    pub statistics: Vec<UserStatistics>,
    pub aggregated: TeamAggregate,
    pub period: Period,
}

/// Organization-wide counters for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminStatistics {
    pub total_users: u32,
    pub managers: u32,
    pub employees: u32,
    pub admins: u32,
    pub total_teams: u32,
    /// Punch events recorded on the reference date.
    pub today_recordings: u32,
    /// Users whose most recent event today is an unclosed arrival.
    pub currently_present: u32,
    pub teams_without_timetable: u32,
    pub avg_team_size: f64,
    pub active_managers: u32,
    pub inactive_managers: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminStatsResponse {
    /// The UTC date the "today" counters refer to.
    pub date: NaiveDate,
    pub statistics: AdminStatistics,
}
