use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the source schema if missing.
///
/// `punches` mirrors the external event log verbatim: rows are only ever
/// appended by `import`, never updated or deleted, and carry no derived
/// columns. Everything else (sessions, statistics) is recomputed per query.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            role       TEXT NOT NULL,
            team_id    INTEGER,
            manager_id INTEGER
        );

        CREATE TABLE IF NOT EXISTS teams (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            manager_id  INTEGER,
            shift_start TEXT,
            shift_end   TEXT
        );

        CREATE TABLE IF NOT EXISTS punches (
            id      INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            ts      TEXT NOT NULL,
            kind    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_user_ts ON punches (user_id, ts);
        CREATE INDEX IF NOT EXISTS idx_punches_ts ON punches (ts);
        "#,
    )?;
    Ok(())
}
