//! Text width estimation from a per-font character width table.
//!
//! The firmware fonts are close enough to monospace that a single advance
//! width per font predicts line width well for Latin product names. The
//! numbers below were measured on a 203 DPI printer and are not exact for
//! every model; callers that have calibrated their printer can load a
//! replacement table from JSON.

use serde::{Deserialize, Serialize};

use crate::printer::units::{Dots, Dpi};
use crate::protocol::text::FontTier;

/// Advance width per character, in dots, for each font tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontTable {
    /// Widths for fonts "1" through "5".
    pub widths: [Dots; 5],
    /// Resolution the widths were measured at.
    #[serde(default = "default_reference_dpi")]
    pub reference_dpi: Dpi,
}

fn default_reference_dpi() -> Dpi {
    Dpi::Dpi203
}

impl FontTable {
    /// Empirical table measured at 203 DPI.
    pub const REFERENCE: Self = Self {
        widths: [8, 12, 16, 24, 32],
        reference_dpi: Dpi::Dpi203,
    };

    /// Advance width of one character in `font`.
    #[inline]
    pub fn char_width(&self, font: FontTier) -> Dots {
        self.widths[font.index()]
    }

    /// Rescale the table for a printer running at `dpi`.
    ///
    /// Returns the table unchanged when the resolution already matches.
    pub fn for_dpi(&self, dpi: Dpi) -> Self {
        if dpi == self.reference_dpi {
            return *self;
        }
        let ratio = dpi.dots_per_mm() / self.reference_dpi.dots_per_mm();
        let mut widths = self.widths;
        for w in &mut widths {
            *w = (*w as f32 * ratio).round() as Dots;
        }
        Self {
            widths,
            reference_dpi: dpi,
        }
    }

    /// `chars × base width × max(1, x_mul)`.
    pub fn text_width(&self, content: &str, font: FontTier, x_mul: u8) -> Dots {
        let chars = content.chars().count() as Dots;
        chars * self.char_width(font) * Dots::from(x_mul.max(1))
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::REFERENCE
    }
}
