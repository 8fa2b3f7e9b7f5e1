//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default boundary base URL (the local proxy)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7878";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "cafe-swipe";
