//! JSON schema types for the label API.

use serde::{Deserialize, Serialize};

use crate::label::LabelContent;

/// A batch of labels to print on one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRequest {
    /// Preset key, e.g. `"51x25"`.
    pub preset: String,
    /// Copies of each label. Defaults to the preset's (one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copies: Option<u32>,
    /// Labels in print order.
    pub labels: Vec<LabelContent>,
}

/// Response body for stream validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub violations: Vec<String>,
}
