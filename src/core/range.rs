//! Inclusive date ranges and the `--range` expression grammar.
//!
//! Supported expressions:
//! - YYYY
//! - YYYY-MM
//! - YYYY-MM-DD
//! - YYYY:YYYY
//! - YYYY-MM:YYYY-MM
//! - YYYY-MM-DD:YYYY-MM-DD

use crate::errors::{AppError, AppResult};
use crate::models::statistics::Period;
use chrono::NaiveDate;

/// Inclusive [start, end] date range, UTC.
/// Constructed only through `new`, which rejects inverted bounds before any
/// computation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidRange(format!(
                "end date {} precedes start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    pub fn period(&self) -> Period {
        Period {
            start: Some(self.start),
            end: Some(self.end),
        }
    }
}

/// Echo helper for unbounded queries.
pub fn period_of(range: Option<&DateRange>) -> Period {
    range.map(|r| r.period()).unwrap_or_default()
}

/// Resolve an optional CLI range argument.
/// `None` or `"all"` mean unbounded.
pub fn resolve_range(raw: &Option<String>) -> AppResult<Option<DateRange>> {
    match raw {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

/// Parse a range expression (year / month / day / interval).
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(format!(
                "start and end must have the same format: {r}"
            )));
        }

        let (d1, _) = parse_bounds(start)?;
        let (_, d2) = parse_bounds(end)?;
        DateRange::new(d1, d2)
    } else {
        let (d1, d2) = parse_bounds(r)?;
        DateRange::new(d1, d2)
    }
}

/// Expand a single period expression into its first and last day.
fn parse_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = p
                .split_once('-')
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let y: i32 = ys
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let m: u32 = ms
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let last =
                month_last_day(y, m).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported range format: {p}"
        ))),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
