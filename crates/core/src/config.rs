//! Config file discovery and TOML loading.
//!
//! CLI flags and `CLIMATE_API_*` env vars are handled by clap in the service
//! crate. This module only decides which TOML file, if any, fills the gaps.

use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::APP_NAME;

/// Where the service's TOML config came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// `--config` or the config env var; must exist
    Explicit(PathBuf),
    /// `./<filename>`
    CurrentDir(PathBuf),
    /// `$XDG_CONFIG_HOME/hawaii-climate/<filename>`
    XdgConfig(PathBuf),
    /// `/etc/hawaii-climate/<filename>`
    System(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Explicit(p) | Self::CurrentDir(p) | Self::XdgConfig(p) | Self::System(p) => {
                Some(p)
            }
            Self::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(p) => write!(f, "{}", p.display()),
            None => f.write_str("(defaults)"),
        }
    }
}

/// Locate the config file named `filename`.
///
/// A path in `env_var` is taken as-is, so a typo there surfaces as a load
/// error. Otherwise the first existing file among the current directory,
/// the XDG config dir and `/etc/hawaii-climate` is used.
pub fn find_config_file(env_var: &str, filename: &str) -> ConfigSource {
    if let Ok(path) = env::var(env_var) {
        return ConfigSource::Explicit(PathBuf::from(path));
    }

    first_existing(vec![
        ConfigSource::CurrentDir(PathBuf::from(filename)),
        ConfigSource::XdgConfig(xdg_dir("XDG_CONFIG_HOME", ".config").join(filename)),
        ConfigSource::System(Path::new("/etc").join(APP_NAME).join(filename)),
    ])
}

fn first_existing(candidates: Vec<ConfigSource>) -> ConfigSource {
    candidates
        .into_iter()
        .find(|source| source.path().is_some_and(|p| p.is_file()))
        .unwrap_or(ConfigSource::Defaults)
}

/// `$var/hawaii-climate`, else `$HOME/<home_relative>/hawaii-climate`.
fn xdg_dir(var: &str, home_relative: &str) -> PathBuf {
    let base = match (env::var(var), env::var("HOME")) {
        (Ok(dir), _) => PathBuf::from(dir),
        (Err(_), Ok(home)) => Path::new(&home).join(home_relative),
        (Err(_), Err(_)) => PathBuf::from(home_relative),
    };
    base.join(APP_NAME)
}

/// Directory holding the dataset when it is not next to the binary
pub fn get_xdg_data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

/// Parse the TOML file behind `source`; `T::default()` when there is none.
pub fn load_config<T: DeserializeOwned + Default>(source: &ConfigSource) -> anyhow::Result<T> {
    let Some(path) = source.path() else {
        return Ok(T::default());
    };
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
