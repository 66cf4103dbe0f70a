pub mod history;
pub mod roller;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use history::RollHistory;
pub use roller::{Roller, ThreadRngRoller};
pub use service::{roll, roll_sides};
pub use types::{RollError, RollResult, Sides};
