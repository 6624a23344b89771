//! Hand-off point to the booking stages that follow seat selection.

use serde::Serialize;
use tracing::info;

use super::types::SeatId;

/// Everything the next booking stage needs: where, what, when and which seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingHandoff {
    pub theater_id: u32,
    pub theater: String,
    pub movie_id: u32,
    pub movie: String,
    pub showtime: String,
    /// Selected seats in row/number order.
    pub seats: Vec<SeatId>,
}

impl BookingHandoff {
    pub fn seat_list(&self) -> String {
        self.seats
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result reported back to the UI after a hand-off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContinuationOutcome {
    Accepted(String),
    Unavailable(String),
}

/// Receiver of a finished seat selection.
pub trait BookingContinuation {
    fn continue_booking(&mut self, handoff: &BookingHandoff) -> ContinuationOutcome;
}

/// Stand-in for the food & beverages step, which does not exist yet. Logs
/// the hand-off and reports it as unavailable.
#[derive(Debug, Default)]
pub struct FoodAndBeveragesPending;

impl BookingContinuation for FoodAndBeveragesPending {
    fn continue_booking(&mut self, handoff: &BookingHandoff) -> ContinuationOutcome {
        match serde_json::to_string(handoff) {
            Ok(json) => info!(handoff = %json, "proceed to food & beverages requested"),
            Err(e) => info!(error = %e, seats = %handoff.seat_list(), "proceed requested"),
        }
        ContinuationOutcome::Unavailable(format!(
            "{} seat(s) held for {} at {} ({}): {}.\nFood & beverages is not available yet.",
            handoff.seats.len(),
            handoff.movie,
            handoff.theater,
            handoff.showtime,
            handoff.seat_list()
        ))
    }
}
