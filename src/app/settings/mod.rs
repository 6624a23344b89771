pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::app::seat_map::{SeatMapPolicy, DEFAULT_SOLD_PROBABILITY};
use crate::errors::AppError;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_log_path, project_config_dir, settings_path};
pub use keybinds::*;
pub use read_settings::{load_settings, load_settings_from};

pub const THEME_NAMES: [&str; 2] = ["dark", "light"];

/// User-tunable settings, read from `settings.toml`. Every field has a
/// default so partial files are fine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Built-in theme name: `dark` or `light`.
    pub theme: String,
    /// Optional palette file; takes precedence over `theme` when set.
    pub theme_file: Option<PathBuf>,
    pub seat_map: SeatMapPolicy,
    /// Chance that any one seat is drawn as sold.
    pub sold_probability: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "dark".to_string(),
            theme_file: None,
            seat_map: SeatMapPolicy::default(),
            sold_probability: DEFAULT_SOLD_PROBABILITY,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0.0..=1.0).contains(&self.sold_probability) {
            return Err(AppError::InvalidSetting(format!(
                "sold_probability must be within 0.0..=1.0, got {}",
                self.sold_probability
            )));
        }
        if !THEME_NAMES.contains(&self.theme.as_str()) {
            return Err(AppError::InvalidSetting(format!(
                "unknown theme `{}` (expected one of: {})",
                self.theme,
                THEME_NAMES.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.seat_map, SeatMapPolicy::PerShowtime);
        assert_eq!(s.sold_probability, 0.2);
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let s = Settings {
            sold_probability: 1.5,
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(AppError::InvalidSetting(_))));
        let nan = Settings {
            sold_probability: f64::NAN,
            ..Settings::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn unknown_theme_rejected() {
        let s = Settings {
            theme: "neon".into(),
            ..Settings::default()
        };
        let err = s.validate().unwrap_err().to_string();
        assert!(err.contains("neon"), "{}", err);
    }
}
