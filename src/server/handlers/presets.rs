//! Preset listing.

use axum::Json;

use crate::printer::presets::{self, PresetSummary};

/// GET /api/presets - List the registered label stocks.
pub async fn list() -> Json<Vec<PresetSummary>> {
    Json(presets::list().iter().map(|p| p.summary()).collect())
}
