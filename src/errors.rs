//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Punch-stream anomalies (unmatched departures, duplicate arrivals, open
//! sessions) are NOT errors: they travel as diagnostics inside a successful
//! result. Only caller mistakes (bad identifiers, inverted ranges) and
//! environment failures end up here.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Query errors
    // ---------------------------
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Unknown user: {0}")]
    UnknownUser(i64),

    #[error("Unknown team: {0}")]
    UnknownTeam(i64),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
