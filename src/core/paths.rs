// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILENAME};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not expand '{value}' from {var}: {reason}")]
    Expansion {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Returns the pynano configuration directory (`<config_dir>/pynano`).
/// Unlike the config file itself, the directory is never created here:
/// a session without a config file simply runs on defaults.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Resolves the session config file location.
///
/// 1. `$PYNANO_CONFIG`, with `~` and environment variables expanded.
/// 2. Otherwise `<config_dir>/pynano/config.toml`.
pub fn get_config_path() -> Result<PathBuf, PathError> {
    match env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => expand_config_path(&value),
        _ => get_config_dir().map(|dir| dir.join(CONFIG_FILENAME)),
    }
}

/// Expands `~`, `$VAR` and `${VAR}` in a path template.
pub fn expand_config_path(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        var: CONFIG_ENV_VAR,
        value: template.to_string(),
        reason: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path_is_unchanged() {
        let path = expand_config_path("/etc/pynano/config.toml").unwrap();

        assert_eq!(path, PathBuf::from("/etc/pynano/config.toml"));
    }

    #[test]
    fn test_expand_tilde_uses_home_dir() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let path = expand_config_path("~/pynano.toml").unwrap();

        assert_eq!(path, home.join("pynano.toml"));
    }

    #[test]
    fn test_expand_undefined_variable_fails() {
        let result = expand_config_path("$PYNANO_SURELY_UNDEFINED_VAR/config.toml");

        assert!(matches!(result, Err(PathError::Expansion { .. })));
    }
}
