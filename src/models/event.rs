use super::event_type::EventKind;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single punch record as produced by the external clock-in action.
/// Immutable and append-only: the aggregation core never writes one back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchEvent {
    pub id: i64,
    pub user_id: i64,
    pub timestamp: DateTime<Utc>, // ⇔ punches.ts (TEXT, ISO-8601 UTC)
    pub kind: EventKind,          // ⇔ punches.kind ('arrival' | 'departure')
}

impl PunchEvent {
    /// UTC calendar date of the punch. Work sessions are attributed to the
    /// arrival's date even when they cross midnight.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn ts_str(&self) -> String {
        self.timestamp.to_rfc3339()
    }
}
