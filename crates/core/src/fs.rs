//! Filesystem utilities

use std::path::PathBuf;

use log::debug;

use crate::{get_xdg_data_dir, DEFAULT_DATABASE_FILE};

/// Pick the database file to open when none was configured.
///
/// Prefers `./hawaii.sqlite`, falling back to the XDG data directory.
/// The returned path is not guaranteed to exist.
pub fn resolve_database_path(configured: Option<&str>) -> PathBuf {
    if let Some(path) = configured {
        return PathBuf::from(path);
    }

    let local = PathBuf::from(DEFAULT_DATABASE_FILE);
    if local.is_file() {
        debug!("Using database in current directory: {}", local.display());
        return local;
    }

    get_xdg_data_dir().join(DEFAULT_DATABASE_FILE)
}
