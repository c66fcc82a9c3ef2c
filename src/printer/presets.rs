//! # Label Presets
//!
//! The registry of label stocks the shop prints on. Each preset pairs a
//! [`LabelConfig`] with the vertical layout used on that stock.
//!
//! | Key | Size | DPI | Margins | Slots |
//! |-----|------|-----|---------|-------|
//! | `50x20` | 50 × 20 mm | 203 | 1 mm | name, barcode, price |
//! | `51x25` | 51 × 25 mm | 203 | none | name, barcode, price, sku |
//! | `30x21` | 30 × 21 mm | 203 | 1 mm | name, barcode, price, sku |
//! | `10x21` | 10 × 21 mm | 203 | 0.5 mm | name, price, barcode |
//! | `2x1inch` | 50.8 × 25.4 mm | 203 | 1 / 1.5 mm | name, barcode, price, sku |
//! | `40x30hd` | 40 × 30 mm | 300 | 1 mm | name, barcode, price, sku |
//!
//! Lookup is exact apart from ASCII case and surrounding whitespace. An
//! unknown key is an error; picking a fallback stock is the caller's call.
//!
//! ```
//! use etiqueta::printer::presets;
//!
//! let config = presets::resolve("51x25")?;
//! assert_eq!(config.width_dots(), 408);
//! assert!(presets::resolve("A4").is_err());
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```

use serde::Serialize;

use super::config::{LabelConfig, Margins, Orientation};
use super::units::Dpi;
use crate::error::{EtiquetaError, Result};
use crate::label::{BarcodeStyle, LabelLayout, Slot};
use crate::protocol::text::FontTier;

/// A named label stock with its layout.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub key: &'static str,
    pub description: &'static str,
    pub config: LabelConfig,
    /// Characters of product name kept on this stock.
    pub name_budget: usize,
    pub slots: &'static [Slot],
    pub barcode: BarcodeStyle,
}

impl Preset {
    /// The layout for this stock (one copy per label).
    pub fn layout(&self) -> LabelLayout {
        LabelLayout::new(self.slots, self.barcode, self.name_budget)
    }

    pub fn summary(&self) -> PresetSummary {
        PresetSummary {
            key: self.key,
            description: self.description,
            width_mm: self.config.width,
            height_mm: self.config.height,
            dpi: self.config.dpi.value(),
            width_dots: self.config.width_dots(),
            height_dots: self.config.height_dots(),
            name_budget: self.name_budget,
        }
    }
}

/// Serializable listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetSummary {
    pub key: &'static str,
    pub description: &'static str,
    pub width_mm: f32,
    pub height_mm: f32,
    pub dpi: u16,
    pub width_dots: u32,
    pub height_dots: u32,
    pub name_budget: usize,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// 50 × 20 mm shelf label. Too short for a SKU line.
pub const SHELF_50X20: Preset = Preset {
    key: "50x20",
    description: "Shelf label 50 x 20 mm",
    config: LabelConfig::new(50.0, 20.0, Dpi::Dpi203)
        .with_gap(2.0)
        .with_margins(Margins::uniform(1.0)),
    name_budget: 28,
    slots: &[
        Slot::name(10, FontTier::Two),
        Slot::barcode(36),
        Slot::price(128, FontTier::Three),
    ],
    barcode: BarcodeStyle::new(60, 2, 2),
};

/// 51 × 25 mm product label, the storefront default.
pub const PRODUCT_51X25: Preset = Preset {
    key: "51x25",
    description: "Product label 51 x 25 mm",
    config: LabelConfig::new(51.0, 25.0, Dpi::Dpi203).with_gap(2.0),
    name_budget: 30,
    slots: &[
        Slot::name(8, FontTier::Two),
        Slot::barcode(34),
        Slot::price(134, FontTier::Three),
        Slot::sku(166, FontTier::One),
    ],
    barcode: BarcodeStyle::new(70, 2, 2),
};

/// 30 × 21 mm small item label.
pub const SMALL_30X21: Preset = Preset {
    key: "30x21",
    description: "Small item label 30 x 21 mm",
    config: LabelConfig::new(30.0, 21.0, Dpi::Dpi203)
        .with_gap(2.0)
        .with_margins(Margins::uniform(1.0)),
    name_budget: 26,
    slots: &[
        Slot::name(8, FontTier::One),
        Slot::barcode(26),
        Slot::price(110, FontTier::Three),
        Slot::sku(142, FontTier::One),
    ],
    barcode: BarcodeStyle::new(56, 1, 2),
};

/// 10 × 21 mm jewelry tag, fed sideways. Retail barcodes do not fit its
/// width and print flush left.
pub const TAG_10X21: Preset = Preset {
    key: "10x21",
    description: "Jewelry tag 10 x 21 mm",
    config: LabelConfig::new(10.0, 21.0, Dpi::Dpi203)
        .with_gap(2.0)
        .with_orientation(Orientation::Landscape)
        .with_margins(Margins::uniform(0.5)),
    name_budget: 9,
    slots: &[
        Slot::name(8, FontTier::One),
        Slot::price(24, FontTier::Two),
        Slot::barcode(52),
    ],
    barcode: BarcodeStyle::new(80, 1, 2).without_text(),
};

/// 2 × 1 inch label, the common US roll size.
pub const US_2X1: Preset = Preset {
    key: "2x1inch",
    description: "2 x 1 inch label",
    config: LabelConfig::new(50.8, 25.4, Dpi::Dpi203)
        .with_gap(3.0)
        .with_margins(Margins::symmetric(1.0, 1.5)),
    name_budget: 30,
    slots: &[
        Slot::name(12, FontTier::Two),
        Slot::barcode(38),
        Slot::price(132, FontTier::Three),
        Slot::sku(164, FontTier::One),
    ],
    barcode: BarcodeStyle::new(64, 2, 2),
};

/// 40 × 30 mm label for 300 DPI printers.
pub const HD_40X30: Preset = Preset {
    key: "40x30hd",
    description: "Product label 40 x 30 mm (300 DPI)",
    config: LabelConfig::new(40.0, 30.0, Dpi::Dpi300)
        .with_gap(2.0)
        .with_margins(Margins::uniform(1.0)),
    name_budget: 18,
    slots: &[
        Slot::name(16, FontTier::Three),
        Slot::barcode(56),
        Slot::price(190, FontTier::Four),
        Slot::sku(250, FontTier::Two),
    ],
    barcode: BarcodeStyle::new(100, 3, 3),
};

/// Every registered preset.
pub const PRESETS: &[Preset] = &[
    SHELF_50X20,
    PRODUCT_51X25,
    SMALL_30X21,
    TAG_10X21,
    US_2X1,
    HD_40X30,
];

/// Look up a preset by key.
pub fn preset(key: &str) -> Result<&'static Preset> {
    let wanted = key.trim();
    PRESETS
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| EtiquetaError::UnknownPreset(key.to_string()))
}

/// Resolve a preset key to its label configuration.
pub fn resolve(key: &str) -> Result<LabelConfig> {
    preset(key).map(|p| p.config)
}

/// All presets in registry order.
pub fn list() -> &'static [Preset] {
    PRESETS
}

/// All preset keys in registry order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.key)
}

// ============================================================================
// TESTS
// ============================================================================
