//! Bulk import of an already recorded event log.
//!
//! The snapshot is one JSON document holding users, teams and punches. All
//! hierarchy invariants are checked on the plain structs BEFORE anything
//! touches SQLite: the aggregation core downstream assumes referential
//! integrity and never re-validates it.

use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, insert_team, insert_user};
use crate::errors::{AppError, AppResult};
use crate::models::event::PunchEvent;
use crate::models::schedule::ShiftSchedule;
use crate::models::team::Team;
use crate::models::user::User;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Team row as it appears in the snapshot file (flat shift columns).
#[derive(Debug, Deserialize)]
pub struct TeamRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub manager_id: Option<i64>,
    #[serde(default)]
    pub shift_start: Option<String>,
    #[serde(default)]
    pub shift_end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub punches: Vec<PunchEvent>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportSummary {
    pub users: usize,
    pub teams: usize,
    pub punches: usize,
}

/// Parse and import a snapshot file. With `replace`, previous contents are
/// wiped first; otherwise rows are appended.
pub fn import_file(pool: &mut DbPool, path: &Path, replace: bool) -> AppResult<ImportSummary> {
    let content = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&content)
        .map_err(|e| AppError::Import(format!("cannot parse {}: {e}", path.display())))?;

    let teams = convert_teams(&snapshot.teams)?;
    check_snapshot(&snapshot.users, &teams, &snapshot.punches)?;

    let tx = pool.conn.transaction()?;

    if replace {
        tx.execute_batch("DELETE FROM punches; DELETE FROM users; DELETE FROM teams;")?;
    }

    for team in &teams {
        insert_team(&tx, team)?;
    }
    for user in &snapshot.users {
        insert_user(&tx, user)?;
    }
    for ev in &snapshot.punches {
        insert_event(&tx, ev)?;
    }

    tx.commit()?;

    Ok(ImportSummary {
        users: snapshot.users.len(),
        teams: teams.len(),
        punches: snapshot.punches.len(),
    })
}

fn convert_teams(records: &[TeamRecord]) -> AppResult<Vec<Team>> {
    let mut out = Vec::with_capacity(records.len());

    for rec in records {
        let schedule = match (&rec.shift_start, &rec.shift_end) {
            (Some(s), Some(e)) => Some(ShiftSchedule::from_db_strs(s, e).ok_or_else(|| {
                AppError::Import(format!(
                    "team {}: invalid shift times '{s}'..'{e}' (expected HH:MM)",
                    rec.id
                ))
            })?),
            (None, None) => None,
            _ => {
                return Err(AppError::Import(format!(
                    "team {}: shift_start and shift_end must be both present or both absent",
                    rec.id
                )));
            }
        };

        out.push(Team {
            id: rec.id,
            name: rec.name.clone(),
            manager_id: rec.manager_id,
            schedule,
        });
    }

    Ok(out)
}

/// Referential integrity of the snapshot as plain data.
/// Runs before any insert so a bad file leaves the database untouched.
pub fn check_snapshot(users: &[User], teams: &[Team], punches: &[PunchEvent]) -> AppResult<()> {
    let mut user_ids = HashSet::new();
    for u in users {
        if !user_ids.insert(u.id) {
            return Err(AppError::Import(format!("duplicate user id {}", u.id)));
        }
    }

    let mut team_ids = HashSet::new();
    for t in teams {
        if !team_ids.insert(t.id) {
            return Err(AppError::Import(format!("duplicate team id {}", t.id)));
        }
    }

    let mut punch_ids = HashSet::new();
    for p in punches {
        if !punch_ids.insert(p.id) {
            return Err(AppError::Import(format!("duplicate punch id {}", p.id)));
        }
    }

    for u in users {
        if let Some(team_id) = u.team_id {
            if !team_ids.contains(&team_id) {
                return Err(AppError::Import(format!(
                    "user {} references unknown team {}",
                    u.id, team_id
                )));
            }
        }
        if let Some(manager_id) = u.manager_id {
            if !user_ids.contains(&manager_id) {
                return Err(AppError::Import(format!(
                    "user {} references unknown manager {}",
                    u.id, manager_id
                )));
            }
        }
    }

    for t in teams {
        if let Some(manager_id) = t.manager_id {
            if !user_ids.contains(&manager_id) {
                return Err(AppError::Import(format!(
                    "team {} references unknown manager {}",
                    t.id, manager_id
                )));
            }
        }
    }

    for p in punches {
        if !user_ids.contains(&p.user_id) {
            return Err(AppError::Import(format!(
                "punch {} references unknown user {}",
                p.id, p.user_id
            )));
        }
    }

    Ok(())
}
