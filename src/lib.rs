//! # Formant - Schema Playground host
//!
//! Formant renders interactive forms from JSON-Schema documents. The
//! rendering itself lives in the `formant-ui` workspace member (a Leptos
//! CSR crate); this crate hosts the demo: it serves the compiled UI bundle
//! and a small JSON API exposing the sample schemas the playground previews.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formant::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration; the server starts on the configured host:port
//!     let settings = Settings::new()?;
//!     let _ = settings.server.port;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ui_assets;
pub mod watcher;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::api::ApiState;

/// Creates the Axum application router with all endpoints configured.
pub fn create_app(state: ApiState) -> Router {
    let api_router = Router::new()
        .route("/schemas", get(api::list_schemas))
        .route("/schemas/:name", get(api::get_schema))
        .with_state(state);

    Router::new()
        .route("/health", get(api::health))
        .nest("/api", api_router)
        // The dev UI runs on its own port; keep the API reachable from it.
        .layer(CorsLayer::permissive())
        .fallback(ui_assets::serve)
}
