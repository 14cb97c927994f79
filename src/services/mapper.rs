// src/services/mapper.rs
//
// Stateless conversion between the wire shapes and the stored record shape.

use serde::Serialize;

use crate::application::dto::{MovieRequest, MovieResponse};
use crate::domain::movie::{Movie, MovieDraft};

/// Build the stored-record shape from an inbound request.
///
/// The draft carries no identifier; assigning one is the store's job.
pub fn to_record(request: &MovieRequest) -> MovieDraft {
    MovieDraft {
        name: request.name.clone(),
        director: request.director.clone(),
        duration: request.duration,
        gender: request.gender.clone(),
        category: request.category.clone(),
        publish_date: request.publish_date,
    }
}

/// Build the outbound response from a persisted record.
pub fn to_response(movie: &Movie) -> MovieResponse {
    MovieResponse {
        id: movie.id,
        name: movie.name.clone(),
        director: movie.director.clone(),
        duration: movie.duration,
        gender: movie.gender.clone(),
        category: movie.category.clone(),
        publish_date: movie.publish_date,
    }
}

/// Render a value as JSON for debug logging. Never fails.
pub fn json_as_string<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unserializable>".to_string())
}
