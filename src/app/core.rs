use super::catalog::{self, filter_theaters};
use super::handoff::{BookingContinuation, ContinuationOutcome};
use super::seat_map::{SeatMap, SeatMapPolicy};
use super::settings::Settings;
use super::types::{Mode, SeatId, Theater};
use super::wizard::Wizard;

/// Whole view state of the booking screen.
///
/// The wizard holds the selections; everything else here is presentation
/// state (search text, cursors, overlay mode) that the renderer reads and
/// the key handlers mutate.
pub struct App {
    pub wizard: Wizard,
    pub mode: Mode,
    /// Theater search query. Only applied on the theater step.
    pub search: String,
    /// Highlighted row in the current list step.
    pub cursor: usize,
    /// Highlighted seat as (row index, seat index).
    pub seat_cursor: (usize, usize),
    pub settings: Settings,
    theaters: Vec<Theater>,
}

// submodules live in `src/app/core/`
mod navigation;
mod search;

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_catalog(settings, catalog::theaters().to_vec())
    }

    pub fn with_catalog(settings: Settings, theaters: Vec<Theater>) -> Self {
        App {
            wizard: Wizard::new(),
            mode: Mode::Normal,
            search: String::new(),
            cursor: 0,
            seat_cursor: (0, 0),
            settings,
            theaters,
        }
    }

    pub fn theaters(&self) -> &[Theater] {
        &self.theaters
    }

    /// Theaters matching the current search query, in catalog order.
    pub fn filtered_theaters(&self) -> Vec<&Theater> {
        filter_theaters(&self.theaters, &self.search)
    }

    /// Number of rows in the list shown for the current step. Zero on the
    /// seat step, which uses the grid cursor instead.
    pub fn list_len(&self) -> usize {
        match &self.wizard {
            Wizard::BrowsingTheaters => self.filtered_theaters().len(),
            Wizard::BrowsingMovies { theater } => theater.movies.len(),
            Wizard::BrowsingShowtimes { movie, .. } => movie.showtimes.len(),
            Wizard::SelectingSeats { .. } => 0,
        }
    }

    fn new_seat_map(&self) -> SeatMap {
        SeatMap::generate(self.settings.sold_probability)
    }

    /// Act on the highlighted item: advance the wizard on list steps, or
    /// toggle the highlighted seat on the seat step.
    pub fn activate(&mut self) {
        match &self.wizard {
            Wizard::BrowsingTheaters => {
                let picked = self.filtered_theaters().get(self.cursor).map(|t| (*t).clone());
                if let Some(theater) = picked {
                    if self.wizard.select_theater(&theater) {
                        self.cursor = 0;
                    }
                }
            }
            Wizard::BrowsingMovies { .. } => {
                if self.wizard.select_movie(self.cursor) {
                    self.cursor = 0;
                }
            }
            Wizard::BrowsingShowtimes { .. } => {
                let map = self.new_seat_map();
                if self.wizard.select_showtime(self.cursor, map) {
                    self.seat_cursor = (0, 0);
                }
            }
            Wizard::SelectingSeats { .. } => {
                self.toggle_seat_at_cursor();
            }
        }
    }

    /// Id of the seat under the grid cursor, if on the seat step.
    pub fn seat_under_cursor(&self) -> Option<SeatId> {
        let (row, col) = self.seat_cursor;
        self.wizard.seat_map()?.at(row, col).map(|s| s.id)
    }

    pub fn toggle_seat_at_cursor(&mut self) -> bool {
        match self.seat_under_cursor() {
            Some(id) => self.wizard.toggle_seat(id),
            None => false,
        }
    }

    /// Step back and put the cursor on the item that had been chosen at the
    /// step we return to.
    pub fn back(&mut self) {
        let restore = match &self.wizard {
            Wizard::BrowsingTheaters => return,
            Wizard::BrowsingMovies { theater } => self
                .filtered_theaters()
                .iter()
                .position(|t| t.id == theater.id),
            Wizard::BrowsingShowtimes { theater, movie } => {
                theater.movies.iter().position(|m| m.id == movie.id)
            }
            Wizard::SelectingSeats {
                movie, showtime, ..
            } => movie.showtimes.iter().position(|s| s == showtime),
        };
        if self.wizard.back() {
            self.cursor = restore.unwrap_or(0);
            self.clamp_cursor();
        }
    }

    /// Hand the current selection to `continuation` and show its answer in
    /// a message dialog. Does nothing with an empty selection.
    pub fn proceed(&mut self, continuation: &mut dyn BookingContinuation) -> bool {
        let Some(handoff) = self.wizard.proceed() else {
            return false;
        };
        self.mode = match continuation.continue_booking(&handoff) {
            ContinuationOutcome::Accepted(content) => Mode::Message {
                title: "Booking".to_string(),
                content,
            },
            ContinuationOutcome::Unavailable(content) => Mode::Message {
                title: "Coming soon".to_string(),
                content,
            },
        };
        true
    }

    /// Called once before each frame. Under `PerRender` the seat map is
    /// redrawn here; under `PerShowtime` this does nothing.
    pub fn prepare_frame(&mut self) {
        if self.settings.seat_map == SeatMapPolicy::PerRender && self.wizard.seat_map().is_some() {
            let map = self.new_seat_map();
            self.wizard.replace_seat_map(map);
        }
    }

    pub fn dismiss_message(&mut self) {
        if matches!(self.mode, Mode::Message { .. }) {
            self.mode = Mode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::StepKind;

    fn app() -> App {
        App::new(Settings::default())
    }

    #[test]
    fn activate_walks_forward_and_resets_cursor() {
        let mut app = app();
        app.cursor = 1;
        app.activate();
        assert_eq!(app.wizard.kind(), StepKind::Movies);
        assert_eq!(app.wizard.theater().map(|t| t.id), Some(2));
        assert_eq!(app.cursor, 0);
        app.activate();
        assert_eq!(app.wizard.kind(), StepKind::Showtimes);
        app.cursor = 3;
        app.activate();
        assert_eq!(app.wizard.showtime(), Some("8:30 PM"));
        assert_eq!(app.seat_cursor, (0, 0));
    }

    #[test]
    fn activate_on_empty_filter_does_nothing() {
        let mut app = app();
        app.search = "nowhere".into();
        app.activate();
        assert_eq!(app.wizard.kind(), StepKind::Theaters);
    }

    #[test]
    fn activate_uses_filtered_index() {
        let mut app = app();
        app.search = "delhi".into();
        app.activate();
        assert_eq!(app.wizard.theater().map(|t| t.name.as_str()), Some("Starlight Cinema"));
    }

    #[test]
    fn back_restores_cursor_on_previous_choice() {
        let mut app = app();
        app.activate(); // Cineplex Royal
        app.cursor = 1;
        app.activate(); // Sci-Fi Odyssey
        app.cursor = 2;
        app.activate(); // 6:00 PM
        app.back();
        assert_eq!(app.wizard.kind(), StepKind::Showtimes);
        assert_eq!(app.cursor, 2);
        app.back();
        assert_eq!(app.cursor, 1);
        app.back();
        assert_eq!(app.wizard.kind(), StepKind::Theaters);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn per_render_policy_redraws_map_but_keeps_selection() {
        let mut app = App::new(Settings {
            seat_map: SeatMapPolicy::PerRender,
            sold_probability: 0.0,
            ..Settings::default()
        });
        app.activate();
        app.activate();
        app.activate();
        assert!(app.toggle_seat_at_cursor());
        app.settings.sold_probability = 1.0;
        app.prepare_frame();
        assert_eq!(app.wizard.seat_map().map(|m| m.sold_count()), Some(70));
        assert_eq!(app.wizard.selected_count(), 1);
    }

    #[test]
    fn per_showtime_policy_keeps_map() {
        let mut app = App::new(Settings {
            sold_probability: 0.0,
            ..Settings::default()
        });
        app.activate();
        app.activate();
        app.activate();
        app.settings.sold_probability = 1.0;
        app.prepare_frame();
        assert_eq!(app.wizard.seat_map().map(|m| m.sold_count()), Some(0));
    }
}
