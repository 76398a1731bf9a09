// src/constants.rs

/// The name of the directory holding pynano configuration (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "pynano";

/// The name of the session configuration file (inside the config dir).
pub const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "PYNANO_CONFIG";

/// Tab width of a freshly created buffer.
pub const DEFAULT_TAB_WIDTH: usize = 4;
