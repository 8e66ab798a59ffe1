//! Configuration loader

use super::schema::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SHRED_CONFIG";

/// Load configuration for the running binary
///
/// Lookup order:
/// 1. `$SHRED_CONFIG`, which must exist
/// 2. `<executable>.config` next to the binary (e.g. "shred.config"), if present
/// 3. Built-in defaults
pub fn load_config() -> Result<Config, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return load_config_from(Path::new(&path));
    }

    let exe_path = std::env::current_exe().map_err(ConfigError::Executable)?;
    let config_path = adjacent_config_path(&exe_path);

    if config_path.is_file() {
        load_config_from(&config_path)
    } else {
        Ok(Config::default())
    }
}

/// Read, parse and validate a JSON config file
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config =
        serde_json::from_str(&config_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    config.validate()?;

    Ok(config)
}

fn adjacent_config_path(exe_path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.config", exe_path.display()))
}
