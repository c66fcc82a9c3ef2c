//! # Label Configuration
//!
//! Physical description of one label stock: size, resolution, feed gap,
//! orientation, offsets and the non-printable margins around the edge.
//!
//! ## Geometry
//!
//! ```text
//! ├─ left ─┼──────── printable width ────────┼─ right ─┤
//! │ margin │                                 │ margin  │
//! ├──────────────────── label width ───────────────────┤
//! ```
//!
//! All derived quantities are in dots (see [`super::units`]).
//!
//! ## Usage
//!
//! ```
//! use etiqueta::printer::{LabelConfig, Dpi};
//!
//! let config = LabelConfig::new(51.0, 25.0, Dpi::Dpi203);
//! assert_eq!(config.width_dots(), 408);
//! assert_eq!(config.printable_width_dots(), 408);
//! ```

use serde::{Deserialize, Serialize};

use super::units::{Dots, Dpi, mm_to_dots, mm_to_signed_dots};
use crate::error::{EtiquetaError, Result};

/// Print direction relative to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// `DIRECTION 1`
    #[default]
    Portrait,
    /// `DIRECTION 0`
    Landscape,
}

impl Orientation {
    /// Value of the TSPL `DIRECTION` parameter.
    pub const fn direction(self) -> u8 {
        match self {
            Orientation::Landscape => 0,
            Orientation::Portrait => 1,
        }
    }
}

/// Non-printable margins in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// No margins at all.
    pub const NONE: Self = Self::uniform(0.0);

    /// Same margin on all four sides.
    pub const fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }

    /// Separate vertical (top/bottom) and horizontal (left/right) margins.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Print origin offset in millimeters.
///
/// `vertical` is sent to the printer as the `OFFSET` instruction (feed
/// direction). `horizontal` is applied by the layout engine to every
/// element's X coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub horizontal: f32,
    pub vertical: f32,
}

/// # Label Configuration
///
/// Immutable description of a label stock.
///
/// | Field | Unit |
/// |-------|------|
/// | `width`, `height` | mm |
/// | `gap` | mm between consecutive labels |
/// | `offset` | mm, may be negative |
/// | `margins` | mm, each at most half the matching dimension |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Label width in millimeters
    pub width: f32,
    /// Label height in millimeters
    pub height: f32,
    /// Print head resolution
    pub dpi: Dpi,
    /// Gap between labels in millimeters
    #[serde(default)]
    pub gap: f32,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub offset: Offset,
    #[serde(default)]
    pub margins: Margins,
}

impl LabelConfig {
    /// A portrait label with no gap, offset or margins.
    pub const fn new(width: f32, height: f32, dpi: Dpi) -> Self {
        Self {
            width,
            height,
            dpi,
            gap: 0.0,
            orientation: Orientation::Portrait,
            offset: Offset {
                horizontal: 0.0,
                vertical: 0.0,
            },
            margins: Margins::NONE,
        }
    }

    pub const fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub const fn with_offset(mut self, horizontal: f32, vertical: f32) -> Self {
        self.offset = Offset {
            horizontal,
            vertical,
        };
        self
    }

    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Check the geometry invariants.
    ///
    /// Width and height must be positive and finite, the gap non-negative,
    /// and each margin non-negative and no larger than half of its
    /// dimension.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(EtiquetaError::Config(format!(
                "label width must be positive, got {} mm",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(EtiquetaError::Config(format!(
                "label height must be positive, got {} mm",
                self.height
            )));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(EtiquetaError::Config(format!(
                "label gap must be non-negative, got {} mm",
                self.gap
            )));
        }
        if !(self.offset.horizontal.is_finite() && self.offset.vertical.is_finite()) {
            return Err(EtiquetaError::Config("label offset must be finite".into()));
        }

        let m = &self.margins;
        for (side, value, limit) in [
            ("left", m.left, self.width / 2.0),
            ("right", m.right, self.width / 2.0),
            ("top", m.top, self.height / 2.0),
            ("bottom", m.bottom, self.height / 2.0),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(EtiquetaError::Config(format!(
                    "{} margin must be non-negative, got {} mm",
                    side, value
                )));
            }
            if value > limit {
                return Err(EtiquetaError::Config(format!(
                    "{} margin {} mm exceeds half the label ({} mm)",
                    side, value, limit
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn width_dots(&self) -> Dots {
        mm_to_dots(self.width, self.dpi)
    }

    #[inline]
    pub fn height_dots(&self) -> Dots {
        mm_to_dots(self.height, self.dpi)
    }

    #[inline]
    pub fn left_margin_dots(&self) -> Dots {
        mm_to_dots(self.margins.left, self.dpi)
    }

    #[inline]
    pub fn right_margin_dots(&self) -> Dots {
        mm_to_dots(self.margins.right, self.dpi)
    }

    #[inline]
    pub fn top_margin_dots(&self) -> Dots {
        mm_to_dots(self.margins.top, self.dpi)
    }

    #[inline]
    pub fn bottom_margin_dots(&self) -> Dots {
        mm_to_dots(self.margins.bottom, self.dpi)
    }

    /// Label width minus the left and right margins.
    pub fn printable_width_dots(&self) -> Dots {
        self.width_dots()
            .saturating_sub(self.left_margin_dots())
            .saturating_sub(self.right_margin_dots())
    }

    /// Label height minus the top and bottom margins.
    pub fn printable_height_dots(&self) -> Dots {
        self.height_dots()
            .saturating_sub(self.top_margin_dots())
            .saturating_sub(self.bottom_margin_dots())
    }

    /// Horizontal offset applied to every element, in dots.
    pub fn horizontal_offset_dots(&self) -> i32 {
        mm_to_signed_dots(self.offset.horizontal, self.dpi)
    }
}

// ============================================================================
// TESTS
// ============================================================================
