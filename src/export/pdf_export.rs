// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, sessions_to_table};
use crate::export::pdf::PdfReport;
use crate::export::{notify_export_success, SessionExport};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// PDF export: session table plus a totals summary line.
pub(crate) fn export_pdf(sessions: &[SessionExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = sessions_to_table(sessions);

    let total_hours: f64 = sessions.iter().map(|s| s.hours).sum();
    let summary = format!(
        "{} sessions, {:.2} hours total",
        sessions.len(),
        total_hours
    );

    let mut pdf = PdfReport::new();
    pdf.write_table(title, &summary, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
