// src/repositories/mod.rs
//
// Repository layer - persistence behind narrow traits

pub mod movie_repository;

pub use movie_repository::{MovieRepository, SqliteMovieRepository};
