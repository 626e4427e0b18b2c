//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed configuration and the in-memory session map; both are
//! `Arc`-backed so cloning per request is cheap.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::session::SessionMap;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: SessionMap,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config), sessions: SessionMap::default() }
    }
}
