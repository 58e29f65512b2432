//! Export Routes
//!
//! Table download endpoint.
//!
//! - GET /api/v1/export/:table - Export `matches` or `standings` as CSV or JSON

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::dto::ExportParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::data::{render_table, ExportFormat, ExportTable};

/// GET /api/v1/export/:table?format=csv|json
pub async fn export_table(
    State(state): State<Arc<AppState>>,
    Path(table): Path<String>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    if !state.config.enable_export {
        return Err(ApiError::Validation(
            "Export feature is disabled".to_string(),
        ));
    }

    let table: ExportTable = table.parse()?;
    let format = ExportFormat::parse(&params.format);

    let body = render_table(&state.dataset, table, format)?;
    let filename = table.file_name(format);

    tracing::info!(table = ?table, format = ?format, "Exporting table");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}
