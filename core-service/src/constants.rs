//! Central Configuration Constants
//!
//! Single source of truth for deployment defaults.
//! Detection thresholds are NOT here - see `logic::threat::rules`.

use std::path::PathBuf;

/// Directory holding logon.csv, device.csv, file.csv, email.csv
pub const DEFAULT_DATA_DIR: &str = ".";

/// Environment variable overriding the data directory (web server)
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable behind `--data-dir` (batch binary)
pub const BATCH_DATA_DIR_ENV: &str = "INSIDER_DATA_DIR";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Insider Threat Detection";

/// Get data directory from environment or use default
pub fn get_data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}
