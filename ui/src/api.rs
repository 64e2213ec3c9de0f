//! API client for the playground backend.

use crate::types::{ApiResponse, SchemaSummary};
use gloo_net::http::Request;
use serde_json::Value;

const API_BASE: &str = "/api";

/// Fetch the names of the available sample schemas.
pub async fn list_schemas() -> Result<Vec<SchemaSummary>, String> {
    let url = format!("{}/schemas", API_BASE);
    fetch_json::<Vec<SchemaSummary>>(&url).await
}

/// Fetch one schema document by name.
pub async fn get_schema(name: &str) -> Result<Value, String> {
    let url = format!("{}/schemas/{}", API_BASE, urlencoding::encode(name));
    fetch_json::<Value>(&url).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response
            .data
            .ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response
            .error
            .unwrap_or_else(|| "Unknown error".to_string()))
    }
}
