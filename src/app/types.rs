use std::fmt;

use serde::{Deserialize, Serialize};

/// A venue offering a fixed list of movies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theater {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Display string such as `"2.3 km"`; never parsed.
    pub distance: String,
    pub movies: Vec<Movie>,
}

/// A movie playing at a theater together with its showtimes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    /// Opaque poster reference (usually a URL). Not fetched or validated.
    pub poster: String,
    pub showtimes: Vec<String>,
}

impl Theater {
    /// Text used for the "N Movies Available" badge.
    pub fn movies_badge(&self) -> String {
        format!("{} Movies Available", self.movies.len())
    }
}

/// Composite seat identifier: row letter plus seat number, shown as `A1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId {
    pub row: char,
    pub number: u8,
}

impl SeatId {
    pub const fn new(row: char, number: u8) -> Self {
        SeatId { row, number }
    }
}

impl Serialize for SeatId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Sold,
}

/// One bookable unit of the seat grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub id: SeatId,
    pub row: char,
    pub number: u8,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(row: char, number: u8, status: SeatStatus) -> Self {
        Seat {
            id: SeatId::new(row, number),
            row,
            number,
            status,
        }
    }

    pub fn is_sold(&self) -> bool {
        self.status == SeatStatus::Sold
    }
}

/// Overlay mode on top of the wizard. `Normal` means keys drive the current
/// wizard step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Search box has focus; keystrokes edit the theater query.
    Search,
    Message {
        title: String,
        content: String,
    },
}

/// Label used in the status line for each wizard step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Theaters,
    Movies,
    Showtimes,
    Seats,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepKind::Theaters => "Theaters",
            StepKind::Movies => "Movies",
            StepKind::Showtimes => "Showtimes",
            StepKind::Seats => "Seats",
        };
        write!(f, "{}", s)
    }
}
