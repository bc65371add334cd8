use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A reconstructed (arrival, departure) interval with derived duration.
/// Never persisted: recomputed on every query directly from the punch
/// events, which keeps it consistent with the log by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkSession {
    pub date: NaiveDate, // the ARRIVAL's calendar date, even across midnight
    pub arrival: DateTime<Utc>,
    pub departure: DateTime<Utc>,
    pub hours: f64, // literal (departure - arrival), in hours
}

impl WorkSession {
    pub fn new(arrival: DateTime<Utc>, departure: DateTime<Utc>) -> Self {
        let hours = (departure - arrival).num_seconds() as f64 / 3600.0;
        Self {
            date: arrival.date_naive(),
            arrival,
            departure,
            hours,
        }
    }
}
