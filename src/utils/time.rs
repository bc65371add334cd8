//! Time utilities: parsing and formatting HH:MM.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
