use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the application: reading settings and
/// theme files. The booking wizard itself has no failure paths.
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings `{path}`: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse theme `{path}`: {source}")]
    ThemeParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A setting parsed fine but holds a value the app cannot use.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

