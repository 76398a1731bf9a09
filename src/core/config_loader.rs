//! # Config Loader
//!
//! Reads the session configuration. A missing file is not an error: the
//! session runs on [`SessionConfig::default`]. A file that exists but cannot
//! be read or parsed is reported with the offending path.
use crate::{core::paths, models::SessionConfig};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Loads the config from its resolved location (see [`paths::get_config_path`]).
pub fn load_session_config() -> Result<SessionConfig> {
    let path = paths::get_config_path()?;
    load_config(&path)
}

/// Loads the config from an explicit path.
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    if !path.exists() {
        log::debug!("No config at '{}', using defaults", path.display());
        return Ok(SessionConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!(t!("config.error.read"), path = path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!(t!("config.error.parse"), path = path.display()))?;

    log::debug!("Loaded config from '{}': {:?}", path.display(), config);
    Ok(config)
}

/// Parses config TOML text.
pub fn parse_config(content: &str) -> Result<SessionConfig, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::num::NonZeroUsize;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_config() {
        // --- Setup ---
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"history_limit = 50\nread_only = true\ndeny = [\"clear\"]\n")
            .unwrap();
        temp_file.flush().unwrap();

        // --- Execute ---
        let config = load_config(temp_file.path()).unwrap();

        // --- Assert ---
        assert_eq!(config.history_limit, Some(50));
        assert!(config.read_only);
        assert_eq!(config.deny, vec!["clear".to_string()]);
        assert_eq!(config.effective_history_limit(), NonZeroUsize::new(50));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_config(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config("read_only = true").unwrap();

        assert!(config.read_only);
        assert_eq!(config.history_limit, None);
        assert!(config.deny.is_empty());
    }

    #[test]
    fn test_zero_limit_means_unbounded() {
        let config = parse_config("history_limit = 0").unwrap();

        assert_eq!(config.effective_history_limit(), None);
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"history_limit = \"lots\"").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains(&temp_file.path().display().to_string()));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(parse_config("colour = \"red\"").is_err());
    }
}
