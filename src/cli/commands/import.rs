use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::import::import_file;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Bulk-load an externally recorded snapshot into the local source DB.
/// All hierarchy checks run on the parsed structs before any insert.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, replace } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let summary = import_file(&mut pool, Path::new(file), *replace)?;

        success(format!(
            "Imported {} users, {} teams, {} punch events from {}",
            summary.users, summary.teams, summary.punches, file
        ));
    }
    Ok(())
}
