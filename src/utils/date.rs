use chrono::{NaiveDate, Utc};

/// Current UTC calendar date. All "today" counters use UTC, matching the
/// timestamps in the event log.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}
