//! Terminal input: a thin layer over crossterm events so the runner only
//! deals with the events it cares about.

pub mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Windows reports both press and release; only presses drive the UI.
            Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an input event.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Call after `poll` reported one is ready.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(event::read()?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(InputEvent::from(Event::Key(release)), InputEvent::Other);
        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(InputEvent::from(Event::Key(press)), InputEvent::Key(press));
    }
}
