use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::instrument;

use crate::{
    dice::{self, RollError, RollResult},
    error::AppError,
    state::SharedState,
};

// ==============================================================================
// === REST API Handlers
// =============================================================================

#[instrument(skip(state))]
pub async fn roll_handler(
    State(state): State<SharedState>,
    sides: Result<Path<String>, PathRejection>,
) -> Result<Json<RollResult>, AppError> {
    // A segment that cannot even be decoded is still just "not a number"
    let Path(sides) = sides.map_err(|rejection| RollError::NotANumber(rejection.body_text()))?;
    let outcome = dice::roll(state.roller.as_ref(), &sides)?;
    Ok(Json(outcome))
}

pub async fn health_handler() -> &'static str {
    "OK"
}
