//! XDG-style locations for the config file and translation cache.
//!
//! XDG variables win over OS-specific locations on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "hinshi";

/// Returns the configuration directory for hinshi.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/hinshi` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/hinshi` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

/// Returns the cache directory for hinshi.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/hinshi` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/hinshi` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn cache_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CACHE_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".cache").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
