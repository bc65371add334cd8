use super::schedule::ShiftSchedule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub manager_id: Option<i64>,
    pub schedule: Option<ShiftSchedule>, // None = team without timetable
}
