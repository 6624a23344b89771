pub mod app;
pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Mode, SeatId, SeatMap, SeatMapPolicy, StepKind, Wizard};
pub use crate::errors::AppError;
