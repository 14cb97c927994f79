// src/lib.rs
// MovieHub - Movie catalog CRUD service
//
// Architecture:
// - Layered: domain entities, repositories, services, HTTP boundary
// - Explicit: constructor-passed collaborators, no framework magic
// - Read-through caching with explicit keys, owned by the service layer

// ============================================================================
// MODULES
// ============================================================================

pub mod application;
pub mod cache;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{Movie, MovieDraft};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, verify_database_integrity, ConnectionPool};

// ============================================================================
// PUBLIC API - Cache
// ============================================================================

pub use cache::Cache;

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{MovieRepository, SqliteMovieRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{ListingKey, MovieService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
pub use application::{api, dto};
