//! HTTP handlers for the server.

pub mod labels;
pub mod presets;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::EtiquetaError;

/// Library error carried out of a handler.
#[derive(Debug)]
pub struct ApiError(pub EtiquetaError);

impl From<EtiquetaError> for ApiError {
    fn from(err: EtiquetaError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            EtiquetaError::UnknownPreset(_) => StatusCode::NOT_FOUND,
            EtiquetaError::Config(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EtiquetaError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            EtiquetaError::InvalidCommand(_) | EtiquetaError::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, %status, "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
