pub mod client;
pub mod config;
pub mod dice;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    http::{HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use crate::config::{Config, CorsConfig};
use crate::dice::ThreadRngRoller;
use crate::handlers::rest;
use crate::state::{AppState, SharedState};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_app(config: Config) -> Router {
    let state = Arc::new(AppState {
        roller: Arc::new(ThreadRngRoller::new()),
        config: Arc::new(config),
    });

    router(state)
}

pub fn router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/health", get(rest::health_handler))
        .route("/dado/{sides}", get(rest::roll_handler))
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)))
        .layer(cors)
}

/// Binds `config.server` and serves until the server stops. Bind failures are
/// returned to the caller.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!(addr = %addr, "failed to bind: {}", e);
        e
    })?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, create_app(config)).await
}

/// Builds the CORS policy, skipping any entry that is not a valid method,
/// header name or origin.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = cors
        .allow_methods
        .iter()
        .filter_map(|m| match Method::from_bytes(m.trim().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                tracing::warn!(method = %m, "Ignoring invalid CORS method");
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = cors
        .allow_headers
        .iter()
        .filter_map(|h| match HeaderName::from_bytes(h.trim().as_bytes()) {
            Ok(header) => Some(header),
            Err(_) => {
                tracing::warn!(header = %h, "Ignoring invalid CORS header");
                None
            }
        })
        .collect();

    let origin = if cors.allow_origin.split(',').any(|o| o.trim() == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = cors
            .allow_origin
            .split(',')
            .filter_map(|o| match HeaderValue::from_str(o.trim()) {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_origin(origin)
}
