use std::sync::Arc;

use crate::config::Config;
use crate::dice::Roller;

pub struct AppState {
    pub roller: Arc<dyn Roller>,
    pub config: Arc<Config>,
}

pub type SharedState = Arc<AppState>;
