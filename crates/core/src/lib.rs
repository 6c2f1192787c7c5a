//! Hawaii Climate Core Library
//!
//! Shared utilities for the climate services:
//! - Configuration loading (XDG-compliant)
//! - Locating the observation database

mod config;
pub mod fs;

pub use config::{find_config_file, get_xdg_data_dir, load_config, ConfigSource};
pub use fs::resolve_database_path;

/// Application name used for XDG paths
pub const APP_NAME: &str = "hawaii-climate";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 5000;

/// File name of the observation database shipped with the dataset
pub const DEFAULT_DATABASE_FILE: &str = "hawaii.sqlite";
