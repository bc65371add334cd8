use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use crate::utils::path::display_path;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite source database (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1) Prepare configuration
    //
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();

    // The --db override wins over whatever the config file says, so test
    // runs never touch the real database.
    let db_path = match &cli.db {
        Some(custom) => custom.clone(),
        None => Config::load().database,
    };

    println!("⚙️  Initializing punchstat…");
    println!("📄 Config file : {}", display_path(&path));
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2) Open DB and create the schema
    //
    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);
    println!("🎉 punchstat initialization completed!");
    Ok(())
}
