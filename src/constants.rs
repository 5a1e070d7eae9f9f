//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Backend base URL used when no config file overrides it
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Directory under the home dir holding the config file
pub const CONFIG_DIR: &str = ".showroom";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Maximum entries kept in the fetch activity log
pub const MAX_FETCH_LOG: usize = 50;

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Showroom TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
