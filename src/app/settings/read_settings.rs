use std::path::Path;

use tracing::{debug, warn};

use super::{settings_path, Settings};
use crate::errors::AppError;

/// Load settings from `path`. A missing file is not an error: defaults are
/// returned instead. Parse and validation failures are logged before being
/// returned.
pub fn load_settings_from(path: &Path) -> Result<Settings, AppError> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    match read_validated(path) {
        Ok(settings) => {
            debug!(path = %path.display(), ?settings, "settings loaded");
            Ok(settings)
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to load settings");
            Err(e)
        }
    }
}

fn read_validated(path: &Path) -> Result<Settings, AppError> {
    let text = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&text).map_err(|source| AppError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `explicit` or, when `None`, from the per-user config
/// directory.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, AppError> {
    match explicit {
        Some(p) => load_settings_from(p),
        None => match settings_path() {
            Some(p) => load_settings_from(&p),
            None => Ok(Settings::default()),
        },
    }
}
