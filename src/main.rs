use anyhow::Context;
use clap::Parser;

use cineBook::app::catalog;
use cineBook::app::settings::{default_log_path, load_settings};
use cineBook::app::{App, FoodAndBeveragesPending};
use cineBook::cli::{self, Cli};
use cineBook::ui::{colors, themes};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.list {
        for line in cli::list_lines(catalog::theaters(), args.search.as_deref().unwrap_or("")) {
            println!("{}", line);
        }
        return Ok(());
    }

    // Logging first so settings failures reach the log file.
    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    let _guard = cineBook::logging::init(&log_path)?;

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Err(e) = args.apply(&mut settings) {
        tracing::warn!(error = %e, "command-line overrides rejected");
        return Err(anyhow::Error::new(e).context("invalid settings"));
    }
    tracing::info!(log = %log_path.display(), ?settings, "starting");

    let theme = themes::load_theme(&settings)?;
    colors::set_from_theme(&theme);

    cineBook::runner::run_app(App::new(settings), &mut FoodAndBeveragesPending)
}
