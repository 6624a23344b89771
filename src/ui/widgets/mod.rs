pub mod dialog;
pub mod footer;
pub mod header;
pub mod lists;
pub mod seat_grid;
