// src/export/model.rs

use crate::models::session::WorkSession;
use crate::models::user::User;
use serde::Serialize;

/// Flat per-session row for export.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub user_id: i64,
    pub user: String,
    pub date: String,
    pub arrival: String,
    pub departure: String,
    pub hours: f64,
}

impl SessionExport {
    pub fn from_session(user: &User, s: &WorkSession) -> Self {
        Self {
            user_id: user.id,
            user: user.name.clone(),
            date: s.date.format("%Y-%m-%d").to_string(),
            arrival: s.arrival.format("%Y-%m-%d %H:%M").to_string(),
            departure: s.departure.format("%Y-%m-%d %H:%M").to_string(),
            hours: s.hours,
        }
    }
}

/// Headers for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["user_id", "user", "date", "arrival", "departure", "hours"]
}

pub(crate) fn session_to_row(s: &SessionExport) -> Vec<String> {
    vec![
        s.user_id.to_string(),
        s.user.clone(),
        s.date.clone(),
        s.arrival.clone(),
        s.departure.clone(),
        format!("{:.2}", s.hours),
    ]
}

pub(crate) fn sessions_to_table(sessions: &[SessionExport]) -> Vec<Vec<String>> {
    sessions.iter().map(session_to_row).collect()
}
