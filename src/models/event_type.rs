use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl EventKind {
    pub fn ek_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arrival" => Some(Self::Arrival),
            "departure" => Some(Self::Departure),
            _ => None,
        }
    }

    pub fn ek_as_str(&self) -> &'static str {
        match self {
            EventKind::Arrival => "Arrival",
            EventKind::Departure => "Departure",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Arrival => "arrival",
            EventKind::Departure => "departure",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "arrival" => Some(EventKind::Arrival),
            "departure" => Some(EventKind::Departure),
            _ => None,
        }
    }

    pub fn is_arrival(&self) -> bool {
        matches!(self, EventKind::Arrival)
    }

    pub fn is_departure(&self) -> bool {
        matches!(self, EventKind::Departure)
    }
}
