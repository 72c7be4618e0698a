// src/constants.rs

/// Shared by reminder parsing and every rendered timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human readable form of [`TIMESTAMP_FORMAT`], used in prompts and errors.
pub const TIMESTAMP_HINT: &str = "YYYY-MM-DD HH:MM:SS";

pub const DEFAULT_GREETING: &str = "=== Welcome to Smart Notes Manager ===";
pub const DEFAULT_SEPARATOR_WIDTH: usize = 30;

pub const CONFIG_DIR_NAME: &str = "smartnotes";
pub const CONFIG_FILE_NAME: &str = "config.toml";
