use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, Mode, Wizard};

pub mod colors;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

pub fn ui(f: &mut Frame, app: &App) {
    // Title (1), search (3), status (1), main (min), bottom help (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    widgets::header::render_title(f, chunks[0]);
    widgets::header::render_search(f, chunks[1], app);
    widgets::header::render_status(f, chunks[2], app);

    match &app.wizard {
        Wizard::BrowsingTheaters => {
            let theaters = app.filtered_theaters();
            widgets::lists::render_theaters(f, chunks[3], &theaters, app.cursor, &app.search);
        }
        Wizard::BrowsingMovies { theater } => {
            widgets::lists::render_movies(f, chunks[3], theater, app.cursor)
        }
        Wizard::BrowsingShowtimes { movie, .. } => {
            widgets::lists::render_showtimes(f, chunks[3], movie, app.cursor)
        }
        Wizard::SelectingSeats {
            seat_map, selected, ..
        } => widgets::seat_grid::render(f, chunks[3], seat_map, selected, app.seat_cursor),
    }

    widgets::footer::render(f, chunks[4], app);

    // Modal
    if let Mode::Message { title, content } = &app.mode {
        widgets::dialog::draw_message(f, f.area(), title, content);
    }
}
