//! Shared types for the playground UI.
//!
//! These types mirror the backend API response structures.

use serde::{Deserialize, Serialize};

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// One entry in the sample-schema catalog listing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SchemaSummary {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}
