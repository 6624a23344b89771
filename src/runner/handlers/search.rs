use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::keyboard::is_text_input;
use crate::input::{KeyCode, KeyEvent};

/// Keys while the search box has focus. Plain printable characters go into
/// the query, so `q` does not quit here; Ctrl/Alt chords are ignored.
pub fn handle_search(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let code = key.code;
    if keybinds::is_enter(&code) || keybinds::is_esc(&code) {
        app.mode = Mode::Normal;
    } else if keybinds::is_backspace(&code) {
        app.pop_search_grapheme();
    } else if is_text_input(&key) {
        if let KeyCode::Char(c) = code {
            app.push_search_char(c);
        }
    } else if matches!(code, KeyCode::Down) {
        app.next();
    } else if matches!(code, KeyCode::Up) {
        app.previous();
    }
    Ok(false)
}
