use tracing::instrument;

use super::roller::Roller;
use super::types::{RollError, RollResult, Sides};

/// Validates the raw side count and rolls one die.
#[instrument(skip(roller))]
pub fn roll(roller: &dyn Roller, sides_input: &str) -> Result<RollResult, RollError> {
    let sides: Sides = sides_input.parse()?;
    roll_sides(roller, sides)
}

pub fn roll_sides(roller: &dyn Roller, sides: Sides) -> Result<RollResult, RollError> {
    let result = roller.roll_in_range(sides.get());
    let outcome = RollResult::new(result, sides).ok_or(RollError::OutOfRange {
        result,
        sides: sides.get(),
    })?;

    tracing::info!(result = outcome.result(), sides = outcome.sides(), "Die rolled");
    Ok(outcome)
}
