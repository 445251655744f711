use crate::{analytics::ReportEngine, config::Config};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub engine: ReportEngine,
    pub config: Config,
}

impl FromRef<AppState> for ReportEngine {
    fn from_ref(state: &AppState) -> Self {
        state.engine.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
