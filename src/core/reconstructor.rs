//! Rebuilds work sessions from one user's raw punch events.
//!
//! The stream can be malformed (duplicate arrivals, departures without an
//! arrival, a trailing arrival that never closes, out-of-order rows). Each
//! irregularity is resolved deterministically and reported as an anomaly;
//! nothing here ever fails. Same input, same output: the reconstruction is a
//! pure function of the event slice.

use crate::models::anomaly::Anomaly;
use crate::models::event::PunchEvent;
use crate::models::session::WorkSession;

/// What to do when an arrival shows up while another arrival is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateArrivalPolicy {
    /// The later arrival overwrites the pending one (most-recent-wins).
    #[default]
    KeepLatest,
    /// The first arrival stands; later duplicates are only reported.
    KeepEarliest,
}

impl DuplicateArrivalPolicy {
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(Self::KeepLatest),
            "earliest" => Some(Self::KeepEarliest),
            _ => None,
        }
    }

    pub fn as_config_str(&self) -> &'static str {
        match self {
            Self::KeepLatest => "latest",
            Self::KeepEarliest => "earliest",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Reconstruction {
    pub sessions: Vec<WorkSession>,
    pub anomalies: Vec<Anomaly>,
}

impl Reconstruction {
    /// True when the last arrival in the stream is still unclosed.
    pub fn has_open_session(&self) -> bool {
        self.anomalies
            .iter()
            .any(|a| matches!(a, Anomaly::OpenSession { .. }))
    }
}

/// Pair one user's punch events into work sessions.
///
/// State machine with two states: awaiting arrival (initial) and awaiting
/// departure. O(n) over the events after an initial defensive sort by
/// (timestamp, id), which makes out-of-order input deterministic.
pub fn reconstruct(events: &[PunchEvent], policy: DuplicateArrivalPolicy) -> Reconstruction {
    if events.is_empty() {
        return Reconstruction::default();
    }

    // -----------------------------
    // Sort events chronologically
    // -----------------------------
    let mut sorted: Vec<&PunchEvent> = events.iter().collect();
    sorted.sort_by_key(|e| (e.timestamp, e.id));

    let mut sessions = Vec::new();
    let mut anomalies = Vec::new();

    // Pending arrival = we are in the AwaitingDeparture state.
    let mut pending: Option<&PunchEvent> = None;

    for ev in sorted {
        if ev.kind.is_arrival() {
            match pending {
                None => pending = Some(ev),
                Some(_) => {
                    // Second arrival without a departure in between. The
                    // incoming event is the duplicate; the policy decides
                    // which timestamp survives as the session start.
                    anomalies.push(Anomaly::DuplicateArrival {
                        event_id: ev.id,
                        timestamp: ev.timestamp,
                    });
                    if policy == DuplicateArrivalPolicy::KeepLatest {
                        pending = Some(ev);
                    }
                }
            }
        } else {
            match pending.take() {
                Some(arrival) => {
                    sessions.push(WorkSession::new(arrival.timestamp, ev.timestamp));
                }
                None => {
                    // Departure in the AwaitingArrival state: discarded.
                    anomalies.push(Anomaly::UnmatchedDeparture {
                        event_id: ev.id,
                        timestamp: ev.timestamp,
                    });
                }
            }
        }
    }

    // End of stream while awaiting a departure: the trailing arrival is
    // excluded from totals and reported.
    if let Some(arrival) = pending {
        anomalies.push(Anomaly::OpenSession {
            event_id: arrival.id,
            timestamp: arrival.timestamp,
        });
    }

    Reconstruction {
        sessions,
        anomalies,
    }
}
