//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! The database is a read-only replica of the external punch-event log;
//! the only writers are `init` (schema) and `import` (bulk load).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
