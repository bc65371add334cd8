use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).unwrap_or_else(|_| "<unreadable>".to_string())
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config_file(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let requested_editor = editor.clone();

            // Platform default when $EDITOR/$VISUAL are unset
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration file edited successfully using fallback '{}'",
                                default_editor
                            ));
                        }
                        Ok(_) | Err(_) => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Report config keys that are missing from the file on disk (they fall back
/// to defaults at load time).
fn check_config_file(path: &std::path::Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (defaults in use)",
            path.display()
        ));
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|_| crate::errors::AppError::ConfigLoad)?;

    let expected = [
        "database",
        "grace_minutes",
        "duplicate_arrival",
        "active_manager_rule",
        "separator_char",
    ];

    let mut missing = Vec::new();
    for key in expected {
        if value.get(key).is_none() {
            missing.push(key);
        }
    }

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        for key in &missing {
            warning(format!("Missing key '{}' (default will be used)", key));
        }
    }

    Ok(())
}
