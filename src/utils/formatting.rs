//! Formatting utilities used for CLI and export outputs.

use ansi_term::Colour;

/// Remove ANSI escape sequences so width math works on what the terminal
/// actually shows.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").to_string()
}

/// Decimal hours → readable duration.
///
/// es: 7.5 → "07h 30m" (short: "07:30")
pub fn hours2readable(hours: f64, short: bool) -> String {
    let total_minutes = (hours.abs() * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    let sign = if hours < 0.0 { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, h, m)
    } else {
        format!("{}{:02}h {:02}m", sign, h, m)
    }
}

/// Textual description and ANSI color for a role code.
pub fn describe_role(code: &str) -> (String, &'static str) {
    match code {
        "employee" => ("Employee".into(), "\x1b[36m"),
        "manager" => ("Manager".into(), "\x1b[33m"),
        "admin" => ("Admin".into(), "\x1b[35m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

/// Punctuality label painted with its rate color.
pub fn paint_rate_label(rate: u32, label: &str) -> String {
    let colour = if rate >= 90 {
        Colour::Green
    } else if rate >= 70 {
        Colour::Yellow
    } else {
        Colour::Red
    };
    colour.paint(label).to_string()
}
