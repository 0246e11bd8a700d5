//! Front-desk core for a small hotel: a SQLite-backed store of rooms,
//! bookings and payments, and the pure derivations (room status board,
//! day lists, revenue summary) the dashboard displays.

pub mod dashboard;
pub mod db;
pub mod domain;
pub mod errors;

pub use dashboard::{load_snapshot, DashboardSnapshot};
pub use db::connection::{init_db, Database};
pub use errors::{DeskError, DeskResult};

#[cfg(test)]
mod tests;
