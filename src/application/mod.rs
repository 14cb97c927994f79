// src/application/mod.rs
//
// Application layer - HTTP boundary
//
// Provides:
// - DTOs and response envelopes
// - Route handlers and error mapping
// - Shared application state

pub mod api;
pub mod dto;
pub mod state;

pub use state::AppState;
