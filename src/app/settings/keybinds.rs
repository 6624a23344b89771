// Centralised keybind predicates for the application.
//
// Handlers ask "is this the back key?" instead of matching raw `KeyCode`
// patterns, so the bindings live in one place.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

pub fn is_down(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_left(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Left | KeyCode::Char('h'))
}

pub fn is_right(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Right | KeyCode::Char('l'))
}

pub fn is_enter(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Enter)
}

pub fn is_backspace(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Backspace)
}

pub fn is_esc(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Esc)
}

/// Back one wizard step.
pub fn is_back(code: &KeyCode) -> bool {
	is_backspace(code) || is_esc(code)
}

pub fn is_search(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('/'))
}

pub fn is_toggle_seat(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char(' ')) || is_enter(code)
}

pub fn is_proceed(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('p') | KeyCode::Char('P'))
}

pub fn is_toggle_theme(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('t'))
}
