//! World Cup Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard bundle built from `worldcup-ui`
//! - `GET /ws` - Dashboard WebSocket session
//!
//! ## View
//! - `GET /api/v1/view?country=&year=` - Every fragment for a selection
//! - `GET /api/v1/winners` - All countries that ever won
//! - `GET /api/v1/map?country=` - Map figure document
//!
//! ## Tables
//! - `GET /api/v1/countries` - List standings
//! - `GET /api/v1/countries/:country/wins` - Title count for one country
//! - `GET /api/v1/years` - Tournament years, newest first
//! - `GET /api/v1/years/:year` - Final summary for one year
//! - `GET /api/v1/export/:table` - Download `matches` or `standings`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use worldcup_history::api::{serve, AppState};
//! use worldcup_history::config::ServerConfig;
//! use worldcup_history::data::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::builtin()?);
//!     let config = ServerConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::websocket::websocket_handler;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // View routes
        .route("/view", get(routes::view::get_view))
        .route("/winners", get(routes::view::get_winners))
        .route("/map", get(routes::view::get_map))
        // Table routes
        .route("/countries", get(routes::countries::list_countries))
        .route(
            "/countries/:country/wins",
            get(routes::countries::get_country_wins),
        )
        .route("/years", get(routes::years::list_years))
        .route("/years/:year", get(routes::years::get_year_summary))
        // Export routes
        .route("/export/:table", get(routes::export::export_table))
        .fallback(routes::dashboard::api_not_found);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = if state.config.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let ui = routes::dashboard::ui_service(&state.config.ui_dir);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(ui)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_test_app_with(ServerConfig::default())
    }

    fn create_test_app_with(config: ServerConfig) -> Router {
        let dataset = Arc::new(Dataset::builtin().unwrap());
        build_router(AppState::new(dataset, config))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, json) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["sessions"], 0);
    }

    fn create_ui_app(dir: &std::path::Path) -> Router {
        create_test_app_with(ServerConfig {
            ui_dir: dir.to_path_buf(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_dashboard_bundle_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<title>FIFA Soccer World Cup History</title>",
        )
        .unwrap();
        std::fs::write(dir.path().join("worldcup-ui.js"), "export {};").unwrap();

        let (status, body) = get(create_ui_app(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("World Cup History"));

        let (status, body) = get(create_ui_app(dir.path()), "/worldcup-ui.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"export {};");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let (status, json) = get_json(create_ui_app(dir.path()), "/api/v1/fixtures").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_view_empty_selection() {
        let (status, json) = get_json(create_test_app(), "/api/v1/view").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["country_wins"]["status"], "empty");
        assert_eq!(json["year_summary"]["status"], "empty");
        assert_eq!(json["map"]["mode"], "world");
        assert_eq!(json["winners"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_view_brazil_2022() {
        let (status, json) =
            get_json(create_test_app(), "/api/v1/view?country=Brazil&year=2022").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["country_wins"]["wins"], 5);
        assert_eq!(json["year_summary"]["winner"], "Argentina");
        assert_eq!(json["year_summary"]["runner_up"], "France");
        assert_eq!(json["year_summary"]["details"]["penalties"][0], 4);
        assert_eq!(json["map"]["mode"], "country");
        assert_eq!(json["map"]["scale"], 3.0);
    }

    #[tokio::test]
    async fn test_view_unknown_country_degrades() {
        let (status, json) = get_json(create_test_app(), "/api/v1/view?country=Narnia").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["country_wins"]["status"], "unknown");
        assert_eq!(json["country_wins"]["country"], "Narnia");
        assert_eq!(json["map"]["mode"], "world");
    }

    #[tokio::test]
    async fn test_view_no_data_year() {
        let (status, json) = get_json(create_test_app(), "/api/v1/view?year=1942").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["year_summary"]["status"], "no_data");
    }

    #[tokio::test]
    async fn test_view_invalid_year() {
        let (status, json) = get_json(create_test_app(), "/api/v1/view?year=soon").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_country_wins() {
        let (status, json) = get_json(create_test_app(), "/api/v1/countries/Brazil/wins").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["wins"], 5);
    }

    #[tokio::test]
    async fn test_country_wins_unknown() {
        let (status, json) =
            get_json(create_test_app(), "/api/v1/countries/Netherlands/wins").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_countries_and_years() {
        let (_, json) = get_json(create_test_app(), "/api/v1/countries").await;
        assert_eq!(json["total"], 8);
        assert_eq!(json["countries"][0]["iso_code"], "BRA");

        let (_, json) = get_json(create_test_app(), "/api/v1/years").await;
        assert_eq!(json["total"], 22);
        assert_eq!(json["years"][0], 2022);
    }

    #[tokio::test]
    async fn test_year_summary_routes() {
        let (status, json) = get_json(create_test_app(), "/api/v1/years/1966").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["winner"], "England");
        assert_eq!(json["details"]["extra_time"], true);

        let (status, json) = get_json(create_test_app(), "/api/v1/years/1946").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "no_data");

        let (status, _) = get_json(create_test_app(), "/api/v1/years/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_winners_route() {
        let (_, json) = get_json(create_test_app(), "/api/v1/winners").await;
        assert_eq!(json["winners"][0], "Argentina");
        assert_eq!(json["winners"][7], "Uruguay");
    }

    #[tokio::test]
    async fn test_map_route() {
        let (_, json) = get_json(create_test_app(), "/api/v1/map?country=Italy").await;
        assert_eq!(json["layout"]["geo"]["center"]["lat"], 41.8719);

        let (_, json) = get_json(create_test_app(), "/api/v1/map?country=").await;
        assert!(json["layout"]["geo"].get("center").is_none());
    }

    #[tokio::test]
    async fn test_export_csv() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/export/matches")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"world_cup_data.csv\""
        );
    }

    #[tokio::test]
    async fn test_export_unknown_table() {
        let (status, json) = get_json(create_test_app(), "/api/v1/export/fixtures").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "UNKNOWN_TABLE");
    }

    #[tokio::test]
    async fn test_export_disabled() {
        let config = ServerConfig {
            enable_export: false,
            ..Default::default()
        };
        let (status, _) = get(create_test_app_with(config), "/api/v1/export/standings").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
