// src/export/logic.rs

use crate::config::Config;
use crate::core::range::resolve_range;
use crate::core::reconstructor::reconstruct;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::SessionExport;
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use crate::utils::date::month_name;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use std::io;
use std::path::Path;

/// High-level export logic: reconstruct sessions, flatten, dispatch on
/// format. Exports always re-derive sessions from the punch log; there is no
/// stored session table to dump.
pub struct ExportLogic;

impl ExportLogic {
    /// Export reconstructed work sessions.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or an expression such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    /// - `user`: restrict to a single user id
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        user: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let bounds = resolve_range(range)?;

        let users = match user {
            Some(id) => {
                let u = queries::load_user(pool, id)?.ok_or(AppError::UnknownUser(id))?;
                vec![u]
            }
            None => queries::load_users(pool)?,
        };

        // Anomalous punches are silently excluded here, exactly as they are
        // from the statistics views.
        let mut rows: Vec<SessionExport> = Vec::new();
        for u in &users {
            let events = queries::load_events_for_user(pool, u.id, bounds.as_ref())?;
            let recon = reconstruct(&events, cfg.duplicate_policy());
            rows.extend(recon.sessions.iter().map(|s| SessionExport::from_session(u, s)));
        }

        if rows.is_empty() {
            warning("⚠️  No work sessions found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                export_pdf(&rows, path, &title)?
            }
        }

        Ok(())
    }
}

/// PDF title from the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let p = match period {
        None => return "Work sessions".to_string(),
        Some(p) => p,
    };

    match p.len() {
        4 => {
            // YYYY
            format!("Work sessions for year {}", p)
        }

        7 => {
            // YYYY-MM
            let parts: Vec<&str> = p.split('-').collect();
            if parts.len() == 2 {
                format!("Work sessions for {} {}", month_name(parts[1]), parts[0])
            } else {
                "Work sessions".to_string()
            }
        }

        10 => {
            // YYYY-MM-DD
            format!("Work sessions for date {}", p)
        }

        21 => {
            // YYYY-MM-DD:YYYY-MM-DD
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                format!("Work sessions from {} to {}", parts[0], parts[1])
            } else {
                "Work sessions".to_string()
            }
        }

        _ => "Work sessions".to_string(),
    }
}
