//! # HTTP Server for Label Generation
//!
//! Exposes the label builder to the storefront over HTTP. The server never
//! talks to a printer; it returns TSPL text for the caller to forward.
//!
//! ## Usage
//!
//! ```bash
//! etiqueta serve --listen 0.0.0.0:8080
//! ```
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `GET /api/presets` | | JSON list of presets |
//! | `POST /api/labels` | [`LabelRequest`](crate::json_api::LabelRequest) JSON | TSPL text |
//! | `POST /api/validate` | TSPL text | [`ValidationReport`](crate::json_api::ValidationReport) JSON |

mod handlers;
mod state;

pub use handlers::ApiError;
pub use state::ServerConfig;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::{EtiquetaError, Result};
use state::AppState;

/// Build the application router.
///
/// Split out from [`serve`] so tests can drive it without a socket.
pub fn router(config: ServerConfig) -> Router {
    let app_state = Arc::new(AppState::new(config));

    Router::new()
        .route("/api/presets", get(handlers::presets::list))
        .route("/api/labels", post(handlers::labels::build))
        .route("/api/validate", post(handlers::labels::validate))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use etiqueta::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), etiqueta::EtiquetaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     metrics: None,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listen_addr = config.listen_addr.clone();
    let calibrated = config.metrics.is_some();
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| {
            EtiquetaError::Config(format!("Failed to bind to {}: {}", listen_addr, e))
        })?;

    tracing::info!(addr = %listen_addr, calibrated, "etiqueta HTTP server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
