// src/application/state.rs

use std::sync::Arc;

use crate::services::MovieService;

/// Application state shared with every request handler.
/// Services are initialized in main.rs and passed here.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}
