mod config;

pub use config::{Config, RefreshConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the PayPerTick configuration directory, creating it if needed.
///
/// Defaults to `~/.config/paypertick/`. Set `PAYPERTICK_HOME` to use a
/// different directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("PAYPERTICK_HOME") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => dirs::home_dir()
            .ok_or_else(|| ConfigError::DirUnavailable("home directory not found".into()))?
            .join(".config")
            .join("paypertick"),
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
