//! REST handlers for the playground schema API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::SchemaCatalog;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<RwLock<SchemaCatalog>>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// One row of the catalog listing.
#[derive(Serialize)]
pub struct SchemaSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// GET /api/schemas
pub async fn list_schemas(State(state): State<ApiState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    let summaries: Vec<SchemaSummary> = catalog
        .entries()
        .iter()
        .map(|e| SchemaSummary {
            name: e.name.clone(),
            title: e.title.clone(),
        })
        .collect();
    Json(ApiResponse::success(summaries))
}

/// GET /api/schemas/:name
pub async fn get_schema(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    match catalog.get(&name) {
        Some(entry) => Json(ApiResponse::success(entry.document.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Value>::error(format!(
                "Schema not found: {}",
                name
            ))),
        )
            .into_response(),
    }
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
