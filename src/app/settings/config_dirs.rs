use directories_next::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "cineBook")
}

/// Per-user configuration directory, if the platform exposes a home.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Default location of `settings.toml`.
pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}

/// Default log file. Falls back to the system temp dir when no cache
/// directory is available.
pub fn default_log_path() -> PathBuf {
    project_dirs()
        .map(|d| d.cache_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
        .join("cinebook.log")
}
