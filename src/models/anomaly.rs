use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A detected but non-fatal irregularity in the punch-event sequence.
/// The affected events are excluded from totals; the anomaly itself is
/// returned alongside the statistics, never thrown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Anomaly {
    /// Departure with no pending arrival; the event is discarded.
    UnmatchedDeparture {
        event_id: i64,
        timestamp: DateTime<Utc>,
    },
    /// Arrival while another arrival is pending; which of the two survives
    /// depends on the configured duplicate-arrival policy.
    DuplicateArrival {
        event_id: i64,
        timestamp: DateTime<Utc>,
    },
    /// Trailing arrival with no departure before the end of the stream.
    OpenSession {
        event_id: i64,
        timestamp: DateTime<Utc>,
    },
}

impl Anomaly {
    pub fn kind_str(&self) -> &'static str {
        match self {
            Anomaly::UnmatchedDeparture { .. } => "UnmatchedDeparture",
            Anomaly::DuplicateArrival { .. } => "DuplicateArrival",
            Anomaly::OpenSession { .. } => "OpenSession",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnmatchedDeparture {
                event_id,
                timestamp,
            } => write!(
                f,
                "departure #{} at {} has no matching arrival",
                event_id,
                timestamp.to_rfc3339()
            ),
            Anomaly::DuplicateArrival {
                event_id,
                timestamp,
            } => write!(
                f,
                "arrival #{} at {} duplicates a pending arrival",
                event_id,
                timestamp.to_rfc3339()
            ),
            Anomaly::OpenSession {
                event_id,
                timestamp,
            } => write!(
                f,
                "arrival #{} at {} was never closed by a departure",
                event_id,
                timestamp.to_rfc3339()
            ),
        }
    }
}
