//! Persisted presentation preferences.
//!
//! Stores the preferred theme and placement as JSON under the user config
//! directory so the demo comes back up the way it was left. Selection state
//! is deliberately not persisted. The location can be overridden through
//! `PILLNAV_PREFS_PATH` for tests and scripted use.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use pillnav_types::{Position, ThemeChoice};

/// Environment variable used to override the preferences file path.
pub const PREFS_PATH_ENV: &str = "PILLNAV_PREFS_PATH";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not determine a config directory")]
    NoConfigDir,
    #[error("preferences i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Stored presentation preferences. Absent fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

fn prefs_path() -> Result<PathBuf, PrefsError> {
    if let Ok(path) = env::var(PREFS_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let mut path = dirs_next::config_dir().ok_or(PrefsError::NoConfigDir)?;
    path.push("pillnav");
    path.push("preferences.json");
    Ok(path)
}

/// Loads stored preferences.
///
/// A missing file is a normal first run and yields defaults; an unreadable or
/// malformed file is logged and also yields defaults rather than failing
/// startup.
pub fn load() -> Preferences {
    let Ok(path) = prefs_path() else {
        return Preferences::default();
    };
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Preferences::default(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read preferences");
            return Preferences::default();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(preferences) => preferences,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring malformed preferences");
            Preferences::default()
        }
    }
}

/// Writes preferences, creating the parent directory when needed.
pub fn store(preferences: &Preferences) -> Result<(), PrefsError> {
    let path = prefs_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(preferences)?;
    fs::write(&path, contents)?;
    Ok(())
}
