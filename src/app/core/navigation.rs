use super::*;
use crate::app::seat_map::{ROWS, SEATS_PER_ROW};

impl App {
    /// Keep the list cursor inside the current list.
    pub fn clamp_cursor(&mut self) {
        self.cursor = std::cmp::min(self.cursor, self.list_len().saturating_sub(1));
    }

    /// Move the list cursor down by one entry, clamping at the last entry.
    pub fn next(&mut self) {
        if self.cursor + 1 < self.list_len() {
            self.cursor += 1;
        }
    }

    /// Move the list cursor up by one entry, clamping at zero.
    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn seat_up(&mut self) {
        self.seat_cursor.0 = self.seat_cursor.0.saturating_sub(1);
    }

    pub fn seat_down(&mut self) {
        self.seat_cursor.0 = std::cmp::min(self.seat_cursor.0 + 1, ROWS.len() - 1);
    }

    pub fn seat_left(&mut self) {
        self.seat_cursor.1 = self.seat_cursor.1.saturating_sub(1);
    }

    pub fn seat_right(&mut self) {
        self.seat_cursor.1 = std::cmp::min(self.seat_cursor.1 + 1, SEATS_PER_ROW as usize - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::Settings;

    #[test]
    fn list_cursor_clamps_at_both_ends() {
        let mut app = App::new(Settings::default());
        app.previous();
        assert_eq!(app.cursor, 0);
        app.next();
        app.next();
        app.next();
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn seat_cursor_stays_in_grid() {
        let mut app = App::new(Settings::default());
        app.seat_left();
        app.seat_up();
        assert_eq!(app.seat_cursor, (0, 0));
        for _ in 0..20 {
            app.seat_down();
            app.seat_right();
        }
        assert_eq!(app.seat_cursor, (6, 9));
    }
}
