use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Shift schedule assigned to a team, optionally absent.
/// Without one, punctuality cannot be computed and is simply omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    pub shift_start: NaiveTime, // "HH:MM"
    pub shift_end: NaiveTime,   // "HH:MM"
}

impl ShiftSchedule {
    pub fn from_db_strs(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            shift_start: parse_time(start)?,
            shift_end: parse_time(end)?,
        })
    }
}
