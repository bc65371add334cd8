use crate::core::reconstructor::DuplicateArrivalPolicy;
use crate::core::rollup::ActiveManagerRule;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_grace_minutes")]
    pub grace_minutes: i64,
    #[serde(default = "default_duplicate_arrival")]
    pub duplicate_arrival: String, // "latest" | "earliest"
    #[serde(default = "default_active_manager_rule")]
    pub active_manager_rule: String, // "open_session" | "any_event"
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_grace_minutes() -> i64 {
    5
}
fn default_duplicate_arrival() -> String {
    "latest".to_string()
}
fn default_active_manager_rule() -> String {
    "open_session".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            grace_minutes: default_grace_minutes(),
            duplicate_arrival: default_duplicate_arrival(),
            active_manager_rule: default_active_manager_rule(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchstat")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchstat")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchstat.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchstat.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Duplicate-arrival policy, falling back to the default on unknown
    /// values so a hand-edited config never aborts a query.
    pub fn duplicate_policy(&self) -> DuplicateArrivalPolicy {
        DuplicateArrivalPolicy::from_config_str(&self.duplicate_arrival).unwrap_or_default()
    }

    /// Active-manager predicate for admin statistics.
    pub fn manager_rule(&self) -> ActiveManagerRule {
        ActiveManagerRule::from_config_str(&self.active_manager_rule).unwrap_or_default()
    }
}
