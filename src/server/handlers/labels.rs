//! Label generation and stream validation handlers.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::ir::CommandStream;
use crate::json_api::{LabelRequest, ValidationReport};

use super::super::state::AppState;
use super::ApiError;

/// Handle POST /api/labels - build a batch request into TSPL text.
pub async fn build(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    // Parsed by hand so malformed JSON maps through the same error type.
    let request = LabelRequest::from_json(&body)?;
    let stream = match &state.config.metrics {
        Some(table) => request.to_commands_with_table(table)?,
        None => request.to_commands()?,
    };

    tracing::info!(
        preset = %request.preset,
        labels = request.labels.len(),
        bytes = stream.as_bytes().len(),
        "generated labels"
    );

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        stream.into_string(),
    ))
}

/// Handle POST /api/validate - check a raw TSPL stream.
pub async fn validate(body: String) -> Json<ValidationReport> {
    Json(ValidationReport::for_stream(&CommandStream::from_raw(body)))
}
