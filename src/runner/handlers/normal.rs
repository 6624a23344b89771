use crate::app::settings::keybinds;
use crate::app::{App, BookingContinuation, Mode, StepKind};
use crate::input::KeyCode;

/// Keys while no overlay is open: they drive the wizard step on screen.
pub fn handle_normal(
    app: &mut App,
    code: KeyCode,
    continuation: &mut dyn BookingContinuation,
) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_toggle_theme(&code) {
        crate::ui::colors::toggle();
        return Ok(false);
    }
    if keybinds::is_back(&code) {
        app.back();
        return Ok(false);
    }

    match app.wizard.kind() {
        StepKind::Seats => {
            if keybinds::is_up(&code) {
                app.seat_up();
            } else if keybinds::is_down(&code) {
                app.seat_down();
            } else if keybinds::is_left(&code) {
                app.seat_left();
            } else if keybinds::is_right(&code) {
                app.seat_right();
            } else if keybinds::is_toggle_seat(&code) {
                app.toggle_seat_at_cursor();
            } else if keybinds::is_proceed(&code) {
                app.proceed(continuation);
            }
        }
        step => {
            if keybinds::is_down(&code) {
                app.next();
            } else if keybinds::is_up(&code) {
                app.previous();
            } else if keybinds::is_enter(&code) || keybinds::is_right(&code) {
                app.activate();
            } else if step == StepKind::Theaters && keybinds::is_search(&code) {
                app.mode = Mode::Search;
            }
        }
    }
    Ok(false)
}
