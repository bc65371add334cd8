//! Read-only loads from the source database, plus the row inserts used by
//! the bulk importer. The aggregation core only ever sees the typed models
//! produced here.

use crate::core::range::DateRange;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::PunchEvent;
use crate::models::event_type::EventKind;
use crate::models::schedule::ShiftSchedule;
use crate::models::team::Team;
use crate::models::user::{Role, User};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

pub fn map_event_row(row: &Row) -> Result<PunchEvent> {
    let ts_str: String = row.get("ts")?;
    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_err(AppError::InvalidTimestamp(ts_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_err(AppError::InvalidEventKind(kind_str.clone())))?;

    Ok(PunchEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        timestamp,
        kind,
    })
}

pub fn map_user_row(row: &Row) -> Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str)
        .ok_or_else(|| conversion_err(AppError::InvalidRole(role_str.clone())))?;

    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        role,
        team_id: row.get("team_id")?,
        manager_id: row.get("manager_id")?,
    })
}

pub fn map_team_row(row: &Row) -> Result<Team> {
    let start: Option<String> = row.get("shift_start")?;
    let end: Option<String> = row.get("shift_end")?;

    // Both columns set → timetable; anything else → none.
    let schedule = match (start, end) {
        (Some(s), Some(e)) => Some(
            ShiftSchedule::from_db_strs(&s, &e)
                .ok_or_else(|| conversion_err(AppError::InvalidTime(format!("{s}-{e}"))))?,
        ),
        _ => None,
    };

    Ok(Team {
        id: row.get("id")?,
        name: row.get("name")?,
        manager_id: row.get("manager_id")?,
        schedule,
    })
}

// ---------------------------
// Users / teams
// ---------------------------

pub fn load_user(pool: &mut DbPool, id: i64) -> AppResult<Option<User>> {
    let user = pool
        .conn
        .query_row("SELECT * FROM users WHERE id = ?1", [id], map_user_row)
        .optional()?;
    Ok(user)
}

pub fn load_users(pool: &mut DbPool) -> AppResult<Vec<User>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM users ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_team(pool: &mut DbPool, id: i64) -> AppResult<Option<Team>> {
    let team = pool
        .conn
        .query_row("SELECT * FROM teams WHERE id = ?1", [id], map_team_row)
        .optional()?;
    Ok(team)
}

pub fn load_teams(pool: &mut DbPool) -> AppResult<Vec<Team>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM teams ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_team_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn team_members(pool: &mut DbPool, team_id: i64) -> AppResult<Vec<User>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM users WHERE team_id = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([team_id], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Punch events
// ---------------------------

/// One user's punches, chronological, optionally restricted to a date range
/// (inclusive, on the punch's UTC calendar date).
pub fn load_events_for_user(
    pool: &mut DbPool,
    user_id: i64,
    range: Option<&DateRange>,
) -> AppResult<Vec<PunchEvent>> {
    let mut out = Vec::new();

    match range {
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM punches
                 WHERE user_id = ?1
                 ORDER BY ts ASC, id ASC",
            )?;
            let rows = stmt.query_map([user_id], map_event_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some(range) => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM punches
                 WHERE user_id = ?1 AND date(ts) BETWEEN ?2 AND ?3
                 ORDER BY ts ASC, id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    user_id,
                    range.start().format("%Y-%m-%d").to_string(),
                    range.end().format("%Y-%m-%d").to_string(),
                ],
                map_event_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// All punches of all users on one UTC calendar date.
pub fn load_events_on(pool: &mut DbPool, date: NaiveDate) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM punches
         WHERE date(ts) = ?1
         ORDER BY ts ASC, id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Inserts (import only)
// ---------------------------

pub fn insert_user(conn: &Connection, user: &User) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (id, name, role, team_id, manager_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user.id,
            user.name,
            user.role.to_db_str(),
            user.team_id,
            user.manager_id,
        ],
    )?;
    Ok(())
}

pub fn insert_team(conn: &Connection, team: &Team) -> AppResult<()> {
    let (start, end) = match &team.schedule {
        Some(s) => (
            Some(s.shift_start.format("%H:%M").to_string()),
            Some(s.shift_end.format("%H:%M").to_string()),
        ),
        None => (None, None),
    };

    conn.execute(
        "INSERT INTO teams (id, name, manager_id, shift_start, shift_end)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![team.id, team.name, team.manager_id, start, end],
    )?;
    Ok(())
}

pub fn insert_event(conn: &Connection, ev: &PunchEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO punches (id, user_id, ts, kind)
         VALUES (?1, ?2, ?3, ?4)",
        params![ev.id, ev.user_id, ev.ts_str(), ev.kind.to_db_str()],
    )?;
    Ok(())
}
