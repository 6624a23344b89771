//! The four-step booking wizard.
//!
//! Each variant carries exactly the selections that are valid for its step,
//! so a showtime can never be set without a movie and a movie never without
//! its theater. Movies and showtimes are picked by index from their parent,
//! which keeps membership true by construction.

use std::collections::BTreeSet;

use tracing::debug;

use super::handoff::BookingHandoff;
use super::seat_map::SeatMap;
use super::types::{Movie, SeatId, StepKind, Theater};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Wizard {
    #[default]
    BrowsingTheaters,
    BrowsingMovies {
        theater: Theater,
    },
    BrowsingShowtimes {
        theater: Theater,
        movie: Movie,
    },
    SelectingSeats {
        theater: Theater,
        movie: Movie,
        showtime: String,
        seat_map: SeatMap,
        selected: BTreeSet<SeatId>,
    },
}

impl Wizard {
    pub fn new() -> Self {
        Wizard::BrowsingTheaters
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Wizard::BrowsingTheaters => StepKind::Theaters,
            Wizard::BrowsingMovies { .. } => StepKind::Movies,
            Wizard::BrowsingShowtimes { .. } => StepKind::Showtimes,
            Wizard::SelectingSeats { .. } => StepKind::Seats,
        }
    }

    pub fn theater(&self) -> Option<&Theater> {
        match self {
            Wizard::BrowsingTheaters => None,
            Wizard::BrowsingMovies { theater }
            | Wizard::BrowsingShowtimes { theater, .. }
            | Wizard::SelectingSeats { theater, .. } => Some(theater),
        }
    }

    pub fn movie(&self) -> Option<&Movie> {
        match self {
            Wizard::BrowsingShowtimes { movie, .. } | Wizard::SelectingSeats { movie, .. } => {
                Some(movie)
            }
            _ => None,
        }
    }

    pub fn showtime(&self) -> Option<&str> {
        match self {
            Wizard::SelectingSeats { showtime, .. } => Some(showtime),
            _ => None,
        }
    }

    pub fn seat_map(&self) -> Option<&SeatMap> {
        match self {
            Wizard::SelectingSeats { seat_map, .. } => Some(seat_map),
            _ => None,
        }
    }

    pub fn selected_seats(&self) -> Option<&BTreeSet<SeatId>> {
        match self {
            Wizard::SelectingSeats { selected, .. } => Some(selected),
            _ => None,
        }
    }

    /// Number of selected seats; zero outside the seat step.
    pub fn selected_count(&self) -> usize {
        self.selected_seats().map_or(0, BTreeSet::len)
    }

    pub fn is_selected(&self, id: SeatId) -> bool {
        self.selected_seats().is_some_and(|s| s.contains(&id))
    }

    /// Move from the theater list into the movies of `theater`.
    /// Returns `false` (and changes nothing) from any other step.
    pub fn select_theater(&mut self, theater: &Theater) -> bool {
        if !matches!(self, Wizard::BrowsingTheaters) {
            return false;
        }
        debug!(theater = %theater.name, "theater selected");
        *self = Wizard::BrowsingMovies {
            theater: theater.clone(),
        };
        true
    }

    /// Pick the movie at `index` of the selected theater.
    pub fn select_movie(&mut self, index: usize) -> bool {
        match std::mem::take(self) {
            Wizard::BrowsingMovies { theater } => match theater.movies.get(index).cloned() {
                Some(movie) => {
                    debug!(movie = %movie.title, "movie selected");
                    *self = Wizard::BrowsingShowtimes { theater, movie };
                    true
                }
                None => {
                    *self = Wizard::BrowsingMovies { theater };
                    false
                }
            },
            other => {
                *self = other;
                false
            }
        }
    }

    /// Pick the showtime at `index` of the selected movie and open the seat
    /// step on `seat_map`.
    pub fn select_showtime(&mut self, index: usize, seat_map: SeatMap) -> bool {
        match std::mem::take(self) {
            Wizard::BrowsingShowtimes { theater, movie } => {
                match movie.showtimes.get(index).cloned() {
                    Some(showtime) => {
                        debug!(%showtime, sold = seat_map.sold_count(), "showtime selected");
                        *self = Wizard::SelectingSeats {
                            theater,
                            movie,
                            showtime,
                            seat_map,
                            selected: BTreeSet::new(),
                        };
                        true
                    }
                    None => {
                        *self = Wizard::BrowsingShowtimes { theater, movie };
                        false
                    }
                }
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Step back one level, dropping only the state owned by the current
    /// step. No-op on the theater list.
    pub fn back(&mut self) -> bool {
        let prev = match std::mem::take(self) {
            Wizard::BrowsingTheaters => return false,
            Wizard::BrowsingMovies { .. } => Wizard::BrowsingTheaters,
            Wizard::BrowsingShowtimes { theater, .. } => Wizard::BrowsingMovies { theater },
            Wizard::SelectingSeats { theater, movie, .. } => {
                Wizard::BrowsingShowtimes { theater, movie }
            }
        };
        debug!(step = %prev.kind(), "stepped back");
        *self = prev;
        true
    }

    /// Toggle `id` in the selection. Sold seats, unknown ids and calls
    /// outside the seat step leave everything unchanged. Returns whether the
    /// selection changed.
    pub fn toggle_seat(&mut self, id: SeatId) -> bool {
        let Wizard::SelectingSeats {
            seat_map, selected, ..
        } = self
        else {
            return false;
        };
        match seat_map.get(id) {
            Some(seat) if !seat.is_sold() => {
                if !selected.remove(&id) {
                    selected.insert(id);
                }
                true
            }
            _ => false,
        }
    }

    /// Swap in a freshly drawn map, keeping the current selection as is.
    pub fn replace_seat_map(&mut self, map: SeatMap) -> bool {
        match self {
            Wizard::SelectingSeats { seat_map, .. } => {
                *seat_map = map;
                true
            }
            _ => false,
        }
    }

    /// Package the finished selection for the next booking stage. `None`
    /// unless at least one seat is selected.
    pub fn proceed(&self) -> Option<BookingHandoff> {
        match self {
            Wizard::SelectingSeats {
                theater,
                movie,
                showtime,
                selected,
                ..
            } if !selected.is_empty() => Some(BookingHandoff {
                theater_id: theater.id,
                theater: theater.name.clone(),
                movie_id: movie.id,
                movie: movie.title.clone(),
                showtime: showtime.clone(),
                seats: selected.iter().copied().collect(),
            }),
            _ => None,
        }
    }
}
