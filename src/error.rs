use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use thiserror::Error;

use crate::dice::RollError;

pub const NOT_A_NUMBER_MESSAGE: &str = "Não foi enviado um número";
pub const INVALID_SIDES_MESSAGE: &str = "Número de lados inválido";
pub const INTERNAL_ERROR_MESSAGE: &str = "Ocorreu um erro";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Roll rejected: {0}")]
    Roll(#[from] RollError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // 404 is what existing front ends expect for a non-numeric side count
            AppError::Roll(RollError::NotANumber(input)) => {
                tracing::warn!(input = %input, "Side count is not a number");
                (StatusCode::NOT_FOUND, NOT_A_NUMBER_MESSAGE)
            }
            AppError::Roll(RollError::InvalidSides(input)) => {
                tracing::warn!(input = %input, "Side count is not a positive integer");
                (StatusCode::BAD_REQUEST, INVALID_SIDES_MESSAGE)
            }
            AppError::Roll(e @ RollError::OutOfRange { .. }) => {
                tracing::error!("Roller fault: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, message).into_response()
    }
}

/// Turns a panic caught at the router boundary into the generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
