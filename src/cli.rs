use std::path::PathBuf;

use clap::Parser;

use crate::app::catalog::filter_theaters;
use crate::app::settings::Settings;
use crate::app::{SeatMapPolicy, Theater};
use crate::errors::AppError;

/// Mock movie-ticket booking in the terminal.
#[derive(Parser, Debug)]
#[command(name = "cineBook", version, about)]
pub struct Cli {
    /// Settings file (defaults to the per-user config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Built-in colour theme.
    #[arg(long, value_parser = ["dark", "light"])]
    pub theme: Option<String>,

    /// When the seat map is drawn.
    #[arg(long, value_enum)]
    pub seat_map: Option<SeatMapPolicy>,

    /// Log file (defaults to the per-user cache directory).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the theater list and exit without starting the UI.
    #[arg(long)]
    pub list: bool,

    /// Filter for `--list`: name or location substring, case-insensitive.
    #[arg(long, requires = "list", value_name = "QUERY")]
    pub search: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of file settings and re-validate.
    pub fn apply(&self, settings: &mut Settings) -> Result<(), AppError> {
        if let Some(theme) = &self.theme {
            settings.theme = theme.clone();
            // an explicit built-in theme wins over a palette file
            settings.theme_file = None;
        }
        if let Some(policy) = self.seat_map {
            settings.seat_map = policy;
        }
        settings.validate()
    }
}

/// Lines printed by `--list`: name, location, distance and movie count.
pub fn list_lines(theaters: &[Theater], query: &str) -> Vec<String> {
    filter_theaters(theaters, query)
        .into_iter()
        .map(|t| format!("{}\t{}\t{}\t{}", t.name, t.location, t.distance, t.movies_badge()))
        .collect()
}
