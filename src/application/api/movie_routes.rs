// src/application/api/movie_routes.rs
//
// Movie route handlers
//
// RULES:
// - Validate requests here, before the service is invoked
// - Wrap every success payload in the ApiResponse envelope
// - Never contain business logic

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::application::dto::{ApiResponse, MovieRequest};
use crate::application::state::AppState;
use crate::error::AppError;
use crate::services::mapper;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/movies",
            axum::routing::post(create_movie).get(get_movies),
        )
        .route("/movies/search", get(search_movies_by_name))
        .route(
            "/movies/:id",
            get(get_movie_by_id)
                .put(update_movie)
                .delete(delete_movie),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    name: String,
}

async fn create_movie(
    State(state): State<AppState>,
    Json(request): Json<MovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "create_movie request body {}",
        mapper::json_as_string(&request)
    );

    request.validate().map_err(AppError::Validation)?;
    let movie = state.movie_service.create_movie(&request)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(movie))))
}

async fn get_movies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = state.movie_service.get_movies()?;
    Ok(Json(ApiResponse::success(movies)))
}

async fn get_movie_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let movie = state.movie_service.get_movie_by_id(id)?;
    Ok(Json(ApiResponse::success(movie)))
}

async fn search_movies_by_name(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let movies = state
        .movie_service
        .get_movies_by_name_containing(&params.name)?;
    Ok(Json(ApiResponse::success(movies)))
}

async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<MovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "update_movie request body {}",
        mapper::json_as_string(&request)
    );

    request.validate().map_err(AppError::Validation)?;
    let movie = state.movie_service.update_movie(id, &request)?;

    Ok(Json(ApiResponse::success(movie)))
}

async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.movie_service.delete_movie(id)?;
    Ok(Json(ApiResponse::success(
        "Movie deleted successfully".to_string(),
    )))
}
