use reqwest::StatusCode;
use serde::Deserialize;
use std::{fmt::Write, time::Duration};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::dice::{RollHistory, RollResult, Sides};

/// Dice offered by the front end, one button each.
pub const AVAILABLE_DICE: [u32; 6] = [2, 4, 6, 10, 20, 100];

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Server returned {result} for a d{sides}")]
    OutOfRange { result: u32, sides: u32 },

    #[error("Side count must be at least 1")]
    InvalidSides,
}

// Only `result` is read back; the client keeps the side count it asked for.
#[derive(Debug, Deserialize)]
struct RollResponse {
    result: u32,
}

#[derive(Debug, Default)]
struct ClientState {
    last_result: Option<RollResult>,
    history: RollHistory,
}

pub struct RollClient {
    http: reqwest::Client,
    base_url: String,
    state: RwLock<ClientState>,
}

impl RollClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            state: RwLock::new(ClientState::default()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rolls one die on the server and records it.
    ///
    /// Failures are logged and leave the last result and history untouched.
    /// Several calls may be in flight at once; each is recorded when it
    /// resolves.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn request_roll(&self, sides: u32) -> Result<RollResult, ClientError> {
        match self.fetch_roll(sides).await {
            Ok(roll) => {
                let mut state = self.state.write().await;
                state.last_result = Some(roll);
                state.history.record(roll);
                tracing::debug!(result = roll.result(), sides = roll.sides(), "Roll recorded");
                Ok(roll)
            }
            Err(e) => {
                tracing::warn!(sides, error = %e, "Roll request failed");
                Err(e)
            }
        }
    }

    async fn fetch_roll(&self, sides: u32) -> Result<RollResult, ClientError> {
        let requested = Sides::new(sides).map_err(|_| ClientError::InvalidSides)?;
        let url = format!("{}/dado/{}", self.base_url, sides);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let body: RollResponse = response.json().await?;
        RollResult::new(body.result, requested).ok_or(ClientError::OutOfRange {
            result: body.result,
            sides,
        })
    }

    pub async fn last_result(&self) -> Option<RollResult> {
        self.state.read().await.last_result
    }

    /// Snapshot of the history, most recent first.
    pub async fn history(&self) -> RollHistory {
        self.state.read().await.history.clone()
    }

    pub async fn render(&self) -> String {
        let state = self.state.read().await;
        render_board(state.last_result.as_ref(), &state.history)
    }
}

/// Parses a die as typed by a user: `20`, `d20` or `D20`.
pub fn parse_die(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('d')
        .or_else(|| trimmed.strip_prefix('D'))
        .unwrap_or(trimmed);

    digits.parse::<u32>().ok().filter(|&sides| sides > 0)
}

pub fn render_buttons() -> String {
    AVAILABLE_DICE
        .iter()
        .map(|sides| format!("[D{sides}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_board(last_result: Option<&RollResult>, history: &RollHistory) -> String {
    let mut out = String::new();

    let last = last_result.map(ToString::to_string).unwrap_or_default();
    let _ = writeln!(out, "Last result: {last}");
    let _ = writeln!(out, "History:");
    for (i, roll) in history.iter().enumerate() {
        let _ = writeln!(out, "{}: {}", i + 1, roll);
    }

    out
}
