use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RollError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a positive whole side count")]
    InvalidSides(String),

    #[error("roller produced {result} for a d{sides}")]
    OutOfRange { result: u32, sides: u32 },
}

/// Number of faces on a die. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sides(u32);

impl Sides {
    pub fn new(sides: u32) -> Result<Self, RollError> {
        if sides == 0 {
            return Err(RollError::InvalidSides(sides.to_string()));
        }
        Ok(Self(sides))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Sides {
    type Error = RollError;

    fn try_from(sides: u32) -> Result<Self, Self::Error> {
        Self::new(sides)
    }
}

/// Parses the loosely typed value that arrives at the HTTP boundary.
///
/// Anything that is not a number at all is `NotANumber`; a number that is not
/// a positive whole value fitting in `u32` is `InvalidSides`.
impl FromStr for Sides {
    type Err = RollError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| RollError::NotANumber(input.to_string()))?;

        if value.is_nan() {
            return Err(RollError::NotANumber(input.to_string()));
        }

        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
            return Err(RollError::InvalidSides(input.to_string()));
        }

        Ok(Self(value as u32))
    }
}

/// One roll of one die. Fields are private so a result can never drift out of
/// `1..=sides` after it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollResult {
    result: u32,
    sides: u32,
}

impl RollResult {
    /// Returns `None` when `result` is outside `1..=sides`.
    pub fn new(result: u32, sides: Sides) -> Option<Self> {
        (1..=sides.get()).contains(&result).then_some(Self {
            result,
            sides: sides.get(),
        })
    }

    pub fn result(&self) -> u32 {
        self.result
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - D{}", self.result, self.sides)
    }
}
