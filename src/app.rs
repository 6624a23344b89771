pub mod catalog;
pub mod core;
pub mod handoff;
pub mod seat_map;
pub mod settings;
pub mod types;
pub mod wizard;

pub use core::App;
pub use handoff::{BookingContinuation, BookingHandoff, ContinuationOutcome, FoodAndBeveragesPending};
pub use seat_map::{SeatMap, SeatMapPolicy};
pub use types::{Mode, Movie, Seat, SeatId, SeatStatus, StepKind, Theater};
pub use wizard::Wizard;
