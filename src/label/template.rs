//! Per-stock vertical layout.
//!
//! A layout is an ordered list of slots, each naming which piece of the
//! [`LabelContent`](super::LabelContent) goes there, at what height, in
//! which font. Slots are emitted in order; X is always computed.

use serde::{Deserialize, Serialize};

use crate::error::{EtiquetaError, Result};
use crate::layout::VerticalOffset;
use crate::printer::LabelConfig;
use crate::printer::units::Dots;
use crate::protocol::barcode::{HumanReadable, Symbology};
use crate::protocol::commands::{DEFAULT_DENSITY, DEFAULT_SPEED};
use crate::protocol::text::{FontTier, Rotation};

/// Which field of the content a slot prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Name,
    Barcode,
    Price,
    Sku,
}

/// One row of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub kind: SlotKind,
    pub y: VerticalOffset,
    /// Ignored for barcodes.
    #[serde(default)]
    pub font: FontTier,
    #[serde(default = "one")]
    pub x_mul: u8,
    #[serde(default = "one")]
    pub y_mul: u8,
    #[serde(default)]
    pub rotation: Rotation,
}

fn one() -> u8 {
    1
}

impl Slot {
    const fn text(kind: SlotKind, y: Dots, font: FontTier) -> Self {
        Self {
            kind,
            y: VerticalOffset::Dots(y),
            font,
            x_mul: 1,
            y_mul: 1,
            rotation: Rotation::Deg0,
        }
    }

    pub const fn name(y: Dots, font: FontTier) -> Self {
        Self::text(SlotKind::Name, y, font)
    }

    pub const fn price(y: Dots, font: FontTier) -> Self {
        Self::text(SlotKind::Price, y, font)
    }

    pub const fn sku(y: Dots, font: FontTier) -> Self {
        Self::text(SlotKind::Sku, y, font)
    }

    pub const fn barcode(y: Dots) -> Self {
        Self::text(SlotKind::Barcode, y, FontTier::One)
    }

    /// Same slot turned clockwise by `rotation`.
    pub const fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Same slot with both multipliers set.
    pub const fn scaled(mut self, x_mul: u8, y_mul: u8) -> Self {
        self.x_mul = x_mul;
        self.y_mul = y_mul;
        self
    }
}

/// Barcode geometry shared by every barcode slot of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeStyle {
    /// Bar height in dots
    pub height: Dots,
    /// Narrow module in dots
    pub narrow: Dots,
    /// Wide module in dots
    pub wide: Dots,
    #[serde(default)]
    pub human_readable: HumanReadable,
    /// Forced symbology. Detected from each payload when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbology: Option<Symbology>,
}

impl BarcodeStyle {
    pub const fn new(height: Dots, narrow: Dots, wide: Dots) -> Self {
        Self {
            height,
            narrow,
            wide,
            human_readable: HumanReadable::Center,
            symbology: None,
        }
    }

    pub const fn without_text(mut self) -> Self {
        self.human_readable = HumanReadable::None;
        self
    }

    pub const fn with_symbology(mut self, symbology: Symbology) -> Self {
        self.symbology = Some(symbology);
        self
    }

    /// The symbology `payload` is printed in.
    pub fn symbology_for(&self, payload: &str) -> Symbology {
        self.symbology.unwrap_or_else(|| Symbology::detect(payload))
    }
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self::new(60, 2, 2)
    }
}

fn default_density() -> u8 {
    DEFAULT_DENSITY
}

fn default_speed() -> u8 {
    DEFAULT_SPEED
}

fn default_copies() -> u32 {
    1
}

/// Everything besides the physical stock that decides what gets printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub barcode: BarcodeStyle,
    /// Maximum characters of product name (and SKU) kept.
    pub name_budget: usize,
    #[serde(default = "default_density")]
    pub density: u8,
    #[serde(default = "default_speed")]
    pub speed: u8,
    /// Copies printed per label.
    #[serde(default = "default_copies")]
    pub copies: u32,
}

impl LabelLayout {
    pub fn new(slots: impl Into<Vec<Slot>>, barcode: BarcodeStyle, name_budget: usize) -> Self {
        Self {
            slots: slots.into(),
            barcode,
            name_budget,
            density: DEFAULT_DENSITY,
            speed: DEFAULT_SPEED,
            copies: 1,
        }
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    /// Check the layout against the stock it will be printed on.
    ///
    /// Every slot must start inside the printable height, multipliers must be
    /// 1-10, barcode modules and height at least one dot, density 0-15 and
    /// copies at least one.
    pub fn validate(&self, config: &LabelConfig) -> Result<()> {
        let top = config.top_margin_dots();
        let bottom = config.height_dots().saturating_sub(config.bottom_margin_dots());

        for (i, slot) in self.slots.iter().enumerate() {
            let y = slot.y.to_dots(config);
            if y < top || y >= bottom {
                return Err(EtiquetaError::Config(format!(
                    "slot {} ({:?}) at y={} is outside the printable rows {}..{}",
                    i, slot.kind, y, top, bottom
                )));
            }
            if !(1..=10).contains(&slot.x_mul) || !(1..=10).contains(&slot.y_mul) {
                return Err(EtiquetaError::Config(format!(
                    "slot {} multipliers must be 1-10, got {}x{}",
                    i, slot.x_mul, slot.y_mul
                )));
            }
        }

        let b = &self.barcode;
        if b.height == 0 || b.narrow == 0 || b.wide == 0 {
            return Err(EtiquetaError::Config(
                "barcode height and module widths must be at least 1 dot".into(),
            ));
        }
        if b.wide < b.narrow {
            return Err(EtiquetaError::Config(format!(
                "barcode wide module ({}) is narrower than narrow module ({})",
                b.wide, b.narrow
            )));
        }
        if self.density > 15 {
            return Err(EtiquetaError::Config(format!(
                "density must be 0-15, got {}",
                self.density
            )));
        }
        if self.copies == 0 {
            return Err(EtiquetaError::Config("copies must be at least 1".into()));
        }
        Ok(())
    }
}
