//! Seat map generation.
//!
//! A seat map is a fixed 7×10 grid (rows `A`..=`G`, seats `1..=10`). Every
//! seat is independently marked sold with probability `sold_probability`.
//! When a map is (re)generated is decided by [`SeatMapPolicy`].

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::{Seat, SeatId, SeatStatus};

pub const ROWS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];
pub const SEATS_PER_ROW: u8 = 10;
pub const DEFAULT_SOLD_PROBABILITY: f64 = 0.2;

/// When the seat map for a showtime gets drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SeatMapPolicy {
    /// Draw once when the showtime is picked; statuses stay fixed while the
    /// seat step is open.
    #[default]
    PerShowtime,
    /// Draw a fresh map before every frame. Selected ids survive the redraw
    /// even when the new draw marks them sold.
    PerRender,
}

impl fmt::Display for SeatMapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatMapPolicy::PerShowtime => write!(f, "per-showtime"),
            SeatMapPolicy::PerRender => write!(f, "per-render"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatMap {
    seats: Vec<Seat>,
}

impl SeatMap {
    /// Generate a map with the thread-local RNG.
    pub fn generate(sold_probability: f64) -> Self {
        Self::generate_with(&mut rand::rng(), sold_probability)
    }

    /// Generate a map drawing statuses from `rng`. Out-of-range probabilities
    /// are clamped into `[0, 1]`.
    pub fn generate_with<R: Rng>(rng: &mut R, sold_probability: f64) -> Self {
        let p = if sold_probability.is_nan() {
            0.0
        } else {
            sold_probability.clamp(0.0, 1.0)
        };
        let mut seats = Vec::with_capacity(ROWS.len() * SEATS_PER_ROW as usize);
        for row in ROWS {
            for number in 1..=SEATS_PER_ROW {
                let status = if rng.random_bool(p) {
                    SeatStatus::Sold
                } else {
                    SeatStatus::Available
                };
                seats.push(Seat::new(row, number, status));
            }
        }
        SeatMap { seats }
    }

    /// Build a full grid where every seat is available except `sold`.
    pub fn with_sold(sold: &[SeatId]) -> Self {
        let mut seats = Vec::with_capacity(ROWS.len() * SEATS_PER_ROW as usize);
        for row in ROWS {
            for number in 1..=SEATS_PER_ROW {
                let status = if sold.contains(&SeatId::new(row, number)) {
                    SeatStatus::Sold
                } else {
                    SeatStatus::Available
                };
                seats.push(Seat::new(row, number, status));
            }
        }
        SeatMap { seats }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Seat at grid position (`row` index, `col` index), both zero based.
    pub fn at(&self, row: usize, col: usize) -> Option<&Seat> {
        if row >= ROWS.len() || col >= SEATS_PER_ROW as usize {
            return None;
        }
        self.seats.get(row * SEATS_PER_ROW as usize + col)
    }

    /// Iterate the grid one row at a time, `A` first.
    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.seats.chunks(SEATS_PER_ROW as usize)
    }

    pub fn sold_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_sold()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn grid_has_seventy_unique_seats() {
        let map = SeatMap::generate_with(&mut StdRng::seed_from_u64(7), DEFAULT_SOLD_PROBABILITY);
        assert_eq!(map.len(), 70);
        let ids: HashSet<_> = map.seats().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 70);
        let rows: HashSet<_> = map.seats().iter().map(|s| s.row).collect();
        assert_eq!(rows.len(), 7);
        assert!(map.seats().iter().all(|s| (1..=10).contains(&s.number)));
        assert!(map.seats().iter().all(|s| s.id == SeatId::new(s.row, s.number)));
    }

    #[test]
    fn rows_come_out_in_order() {
        let map = SeatMap::generate_with(&mut StdRng::seed_from_u64(1), 0.5);
        let firsts: Vec<char> = map.rows().map(|r| r[0].row).collect();
        assert_eq!(firsts, ROWS.to_vec());
        for row in map.rows() {
            let numbers: Vec<u8> = row.iter().map(|s| s.number).collect();
            assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn probability_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(SeatMap::generate_with(&mut rng, 0.0).sold_count(), 0);
        assert_eq!(SeatMap::generate_with(&mut rng, 1.0).sold_count(), 70);
        // clamped rather than panicking
        assert_eq!(SeatMap::generate_with(&mut rng, 4.0).sold_count(), 70);
        assert_eq!(SeatMap::generate_with(&mut rng, f64::NAN).sold_count(), 0);
    }

    #[test]
    fn same_seed_same_map() {
        let a = SeatMap::generate_with(&mut StdRng::seed_from_u64(42), 0.2);
        let b = SeatMap::generate_with(&mut StdRng::seed_from_u64(42), 0.2);
        assert_eq!(a, b);
    }

    #[test]
    fn at_maps_grid_positions() {
        let map = SeatMap::with_sold(&[SeatId::new('B', 3)]);
        assert_eq!(map.at(0, 0).map(|s| s.id), Some(SeatId::new('A', 1)));
        assert_eq!(map.at(6, 9).map(|s| s.id), Some(SeatId::new('G', 10)));
        assert!(map.at(1, 2).is_some_and(|s| s.is_sold()));
        assert!(map.at(7, 0).is_none());
        assert!(map.at(0, 10).is_none());
    }

    #[test]
    fn policy_default_and_display() {
        assert_eq!(SeatMapPolicy::default(), SeatMapPolicy::PerShowtime);
        assert_eq!(SeatMapPolicy::PerRender.to_string(), "per-render");
    }

    #[test]
    fn with_sold_marks_listed_seats_and_skips_unknown_ones() {
        let map = SeatMap::with_sold(&[
            SeatId::new('A', 1),
            SeatId::new('A', 1),
            SeatId::new('G', 10),
            SeatId::new('Z', 4),
            SeatId::new('C', 11),
        ]);
        assert_eq!(map.len(), ROWS.len() * SEATS_PER_ROW as usize);
        assert_eq!(map.sold_count(), 2);
        assert!(map.get(SeatId::new('G', 10)).is_some_and(|s| s.is_sold()));
        assert!(map.get(SeatId::new('B', 1)).is_some_and(|s| !s.is_sold()));
    }
}
