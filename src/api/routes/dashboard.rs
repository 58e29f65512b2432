//! Dashboard Routes
//!
//! - GET / - The built `worldcup-ui` bundle (index.html, wasm, js)
//! - Unmatched `/api/v1/*` paths answer with a JSON 404 instead of the page

use axum::http::Uri;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::error::ApiError;

/// Static service for the dashboard bundle
///
/// Unknown paths fall back to `index.html` so client-side routes load the app.
pub fn ui_service(dir: &Path) -> ServeDir<ServeFile> {
    let index = dir.join("index.html");
    if !index.exists() {
        tracing::warn!(
            dir = %dir.display(),
            "Dashboard bundle not found, run `trunk build` in worldcup-ui"
        );
    }

    ServeDir::new(dir).fallback(ServeFile::new(index))
}

/// Fallback for the API namespace
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
