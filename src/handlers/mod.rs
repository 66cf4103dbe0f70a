pub mod rest;

pub use rest::{health_handler, roll_handler};
