//! # Width Estimation
//!
//! The printer rasterizes text and barcodes itself, so we never see the
//! pixels. To center an element we predict its width in dots from the font
//! table or the barcode structure.
//!
//! ## Strategies
//!
//! | Estimator | Text | Code128 | Fixed symbologies |
//! |-----------|------|---------|-------------------|
//! | [`TableEstimator`] | font table | symbol-count formula | module formula |
//! | [`EncodedEstimator`] | font table | exact encoding via `barcoders` | module formula |
//!
//! Both are approximations of firmware behaviour. The font table in
//! particular has only been checked against 203 DPI printers; treat
//! predictions for other models as unverified until calibrated.
//!
//! ## Example
//!
//! ```
//! use etiqueta::metrics::{TableEstimator, WidthEstimator};
//! use etiqueta::protocol::{barcode::Symbology, text::FontTier};
//!
//! let est = TableEstimator::default();
//! assert_eq!(est.text_width("$29.99", FontTier::Three, 1), 96);
//! assert_eq!(est.barcode_width(Symbology::Ean13, "1234567890123", 2), 230);
//! ```

pub mod barcode;
pub mod text;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::printer::units::{Dots, Dpi};
use crate::protocol::barcode::Symbology;
use crate::protocol::text::FontTier;

pub use barcode::QUIET_ZONE_MODULES;
pub use text::FontTable;

/// Predicts how wide the printer will draw an element.
pub trait WidthEstimator {
    /// Width of `content` in `font` with horizontal multiplier `x_mul`.
    fn text_width(&self, content: &str, font: FontTier, x_mul: u8) -> Dots;

    /// Width of a barcode symbol whose narrow module is `narrow` dots,
    /// quiet zone included.
    fn barcode_width(&self, symbology: Symbology, payload: &str, narrow: Dots) -> Dots;
}

/// Table-driven estimator: font widths plus per-symbology module formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableEstimator {
    #[serde(flatten)]
    pub fonts: FontTable,
    #[serde(default = "default_quiet_zone")]
    pub quiet_zone: u32,
}

fn default_quiet_zone() -> u32 {
    QUIET_ZONE_MODULES
}

impl TableEstimator {
    pub const fn new(fonts: FontTable) -> Self {
        Self {
            fonts,
            quiet_zone: QUIET_ZONE_MODULES,
        }
    }

    /// Same estimator with the font table rescaled for `dpi`.
    pub fn for_dpi(&self, dpi: Dpi) -> Self {
        Self {
            fonts: self.fonts.for_dpi(dpi),
            quiet_zone: self.quiet_zone,
        }
    }

    /// Load a calibration table from a JSON file.
    ///
    /// ```json
    /// { "widths": [9, 13, 17, 25, 33], "reference_dpi": 203, "quiet_zone": 20 }
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for TableEstimator {
    fn default() -> Self {
        Self::new(FontTable::REFERENCE)
    }
}

impl WidthEstimator for TableEstimator {
    fn text_width(&self, content: &str, font: FontTier, x_mul: u8) -> Dots {
        self.fonts.text_width(content, font, x_mul)
    }

    fn barcode_width(&self, symbology: Symbology, payload: &str, narrow: Dots) -> Dots {
        let modules = barcode::module_count(symbology, payload, self.quiet_zone);
        barcode::width_for_modules(modules, narrow)
    }
}

/// Like [`TableEstimator`], but counts Code128 modules by actually encoding
/// the payload. Falls back to the formula when the payload cannot be
/// encoded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncodedEstimator {
    pub table: TableEstimator,
}

impl EncodedEstimator {
    pub const fn new(table: TableEstimator) -> Self {
        Self { table }
    }
}

impl WidthEstimator for EncodedEstimator {
    fn text_width(&self, content: &str, font: FontTier, x_mul: u8) -> Dots {
        self.table.text_width(content, font, x_mul)
    }

    fn barcode_width(&self, symbology: Symbology, payload: &str, narrow: Dots) -> Dots {
        if symbology == Symbology::Code128 {
            if let Some(modules) = barcode::encoded_code128_modules(payload) {
                return barcode::width_for_modules(modules + self.table.quiet_zone, narrow);
            }
        }
        self.table.barcode_width(symbology, payload, narrow)
    }
}
