// src/application/api/mod.rs
//
// HTTP surface - axum routing and error mapping

pub mod movie_routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tracing::error;

use crate::application::dto::ErrorResponse;
use crate::application::state::AppState;
use crate::error::AppError;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    movie_routes::router(state)
}

/// Serve the API at the given address (e.g. `"127.0.0.1:3000"`).
pub async fn serve(state: AppState, addr: &str) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Resource not found"),
            ),
            AppError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(messages))
            }
            // Persistence detail was already logged at the translation site;
            // nothing internal leaves the process.
            other => {
                error!("Unhandled application error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
