//! Conversion from JSON requests to command streams.

use super::schema::{LabelRequest, ValidationReport};
use crate::error::Result;
use crate::ir::{self, CommandStream};
use crate::label::LabelBuilder;
use crate::metrics::TableEstimator;

impl LabelRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder for the requested preset with the requested copies applied.
    pub fn builder(&self) -> Result<LabelBuilder> {
        let builder = LabelBuilder::from_preset(&self.preset)?;
        Ok(match self.copies {
            Some(copies) => builder.with_copies(copies),
            None => builder,
        })
    }

    /// Build every label into one job.
    pub fn to_commands(&self) -> Result<CommandStream> {
        self.builder()?.build_many(&self.labels)
    }

    /// Like [`to_commands`](Self::to_commands) with a calibrated width
    /// table, rescaled to the preset's DPI.
    pub fn to_commands_with_table(&self, table: &TableEstimator) -> Result<CommandStream> {
        let builder = self.builder()?;
        let dpi = builder.config().dpi;
        builder
            .with_estimator(table.for_dpi(dpi))
            .build_many(&self.labels)
    }
}

impl ValidationReport {
    /// Validate a stream and collect the findings.
    pub fn for_stream(stream: &CommandStream) -> Self {
        let violations: Vec<String> = ir::validate(stream)
            .iter()
            .map(ToString::to_string)
            .collect();
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }
}
