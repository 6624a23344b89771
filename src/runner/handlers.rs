//! Split handlers: thin wrapper delegating to submodules to keep file sizes manageable.

pub mod normal;
pub mod search;

pub use normal::handle_normal;
pub use search::handle_search;

use crate::app::settings::keybinds;
use crate::app::{App, BookingContinuation, Mode};
use crate::input::KeyEvent;

/// Top-level key handler that dispatches on the overlay mode. Returns
/// `Ok(true)` when the app should quit.
pub fn handle_key(
    app: &mut App,
    key: KeyEvent,
    continuation: &mut dyn BookingContinuation,
) -> anyhow::Result<bool> {
    let code = key.code;
    match &app.mode {
        Mode::Normal => handle_normal(app, code, continuation),
        Mode::Search => handle_search(app, key),
        Mode::Message { .. } => {
            if keybinds::is_enter(&code) || keybinds::is_esc(&code) {
                app.dismiss_message();
            }
            Ok(false)
        }
    }
}
