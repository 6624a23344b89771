// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Convenience: check if a `KeyEvent` is a printable character
pub fn is_printable_key(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char(_))
}

/// A key that should be typed into a text field: a printable character
/// without Ctrl/Alt chords. Shift is fine (it is how capitals arrive).
pub fn is_text_input(ev: &KeyEvent) -> bool {
    is_printable_key(ev) && !ev.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Ctrl+C should always quit, even inside the search box.
pub fn is_interrupt(ev: &KeyEvent) -> bool {
    ev.modifiers.contains(KeyModifiers::CONTROL) && matches!(ev.code, KeyCode::Char('c'))
}
