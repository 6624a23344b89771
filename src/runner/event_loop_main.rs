use anyhow::Context;
use tracing::{debug, info};

use crate::app::{App, BookingContinuation};
use crate::input::keyboard::is_interrupt;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, install_panic_hook, restore_terminal};
use crate::ui;

use std::time::Duration;

/// Own the terminal and drive `app` until the user quits.
pub fn run_app(mut app: App, continuation: &mut dyn BookingContinuation) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = init_terminal().context("failed to initialise terminal")?;
    info!(seat_map = %app.settings.seat_map, "booking ui started");

    let result = event_loop(&mut terminal, &mut app, continuation);

    // Restore terminal state before reporting any loop error.
    restore_terminal(terminal).context("failed to restore terminal")?;
    info!("booking ui stopped");
    result
}

fn event_loop(
    terminal: &mut crate::runner::terminal::Tui,
    app: &mut App,
    continuation: &mut dyn BookingContinuation,
) -> anyhow::Result<()> {
    // Redraw only after input so a `PerRender` seat map changes once per
    // user action rather than on every poll timeout.
    let mut dirty = true;
    loop {
        if dirty {
            app.prepare_frame();
            terminal.draw(|f| ui::ui(f, app))?;
            dirty = false;
        }

        if !poll(Duration::from_millis(100))? {
            continue;
        }
        match read_event()? {
            InputEvent::Key(key) => {
                if is_interrupt(&key) {
                    debug!("interrupt received");
                    return Ok(());
                }
                if handlers::handle_key(app, key, continuation)? {
                    return Ok(());
                }
                dirty = true;
            }
            InputEvent::Resize(w, h) => {
                debug!(w, h, "terminal resized");
                dirty = true;
            }
            InputEvent::Other => {}
        }
    }
}
