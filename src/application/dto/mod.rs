// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are wire-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Request validation happens here, before the service is invoked

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// MOVIE DTOs
// ============================================================================

/// Inbound movie payload for create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    pub name: String,
    pub director: String,
    pub duration: u32,
    pub gender: String,
    pub category: String,
    pub publish_date: NaiveDate,
}

/// Outbound movie payload: the stored record plus its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i64,
    pub name: String,
    pub director: String,
    pub duration: u32,
    pub gender: String,
    pub category: String,
    pub publish_date: NaiveDate,
}

impl MovieRequest {
    /// Check the boundary rules, collecting one message per offending field.
    ///
    /// `publish_date` presence and shape are already enforced by
    /// deserialization, so only the field rules remain.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Movie name must not be null or empty".to_string());
        }
        if self.director.trim().is_empty() {
            errors.push("Director must not be null or empty".to_string());
        }
        if self.duration < 1 {
            errors.push("Duration must be at least 1".to_string());
        }
        if self.gender.trim().is_empty() {
            errors.push("Movie must have a gender".to_string());
        }
        if self.category.trim().is_empty() {
            errors.push("Category must not be null or empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// RESPONSE ENVELOPES
// ============================================================================

/// The fixed `{status, results}` wrapper applied to every successful reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub results: T,
}

impl<T> ApiResponse<T> {
    pub fn success(results: T) -> Self {
        Self {
            status: "Success".to_string(),
            results,
        }
    }
}

/// The parallel error envelope. `messages` is only present for validation
/// failures, where each entry names one offending field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "Error".to_string(),
            message: message.into(),
            messages: None,
        }
    }

    pub fn validation(messages: Vec<String>) -> Self {
        Self {
            status: "Error".to_string(),
            message: "Validation failed".to_string(),
            messages: Some(messages),
        }
    }
}
