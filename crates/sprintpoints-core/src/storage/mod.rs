mod config;

pub use config::{Config, OutputConfig, OutputFormat, SprintConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the configuration directory, creating it if needed.
///
/// `SPRINTPOINTS_CONFIG_DIR` wins when set. Otherwise this is
/// `~/.config/sprintpoints[-dev]/`, with the `-dev` suffix selected by
/// `SPRINTPOINTS_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("SPRINTPOINTS_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("SPRINTPOINTS_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("sprintpoints-dev")
            } else {
                base_dir.join("sprintpoints")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
