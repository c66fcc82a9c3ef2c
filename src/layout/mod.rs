//! # Layout Engine
//!
//! Turns an element's estimated width into an X coordinate.
//!
//! ## Horizontal Placement
//!
//! Elements are centered in the printable area:
//!
//! ```text
//! ├─ left ─┼──── slack/2 ────┼── element ──┼──── slack/2 ────┼─ right ─┤
//!   margin                                                      margin
//! ```
//!
//! `x = left + round((printable - width) / 2)`. When the element is wider
//! than the printable area it starts flush at the left margin; the right
//! side is then clipped by the printer, which is the least bad outcome for
//! a product name or a barcode quiet zone.
//!
//! ## Vertical Placement
//!
//! Not computed here. Label layouts stack a handful of elements whose order
//! is fixed per label stock, so the Y coordinate comes from the layout
//! template as a [`VerticalOffset`].
//!
//! ## Example
//!
//! ```
//! use etiqueta::layout;
//! use etiqueta::printer::{LabelConfig, Dpi};
//!
//! let config = LabelConfig::new(51.0, 25.0, Dpi::Dpi203);
//! assert_eq!(layout::center_x(230, &config), 89);
//! ```

use serde::{Deserialize, Serialize};

use crate::printer::LabelConfig;
use crate::printer::units::{Dots, mm_to_dots};

/// Element position in dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub x: Dots,
    pub y: Dots,
}

/// Caller-supplied Y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalOffset {
    Dots(Dots),
    Mm(f32),
}

impl VerticalOffset {
    /// Resolve to dots for `config`'s resolution.
    pub fn to_dots(self, config: &LabelConfig) -> Dots {
        match self {
            VerticalOffset::Dots(dots) => dots,
            VerticalOffset::Mm(mm) => mm_to_dots(mm, config.dpi),
        }
    }
}

/// Whether an element of `width` dots fits between the margins.
pub fn fits(width: Dots, config: &LabelConfig) -> bool {
    width <= config.printable_width_dots()
}

/// Center an element of `width` dots in the printable area.
///
/// The result is never left of the left margin. If the element fits, its
/// right edge never passes `label width - right margin`.
pub fn center_x(width: Dots, config: &LabelConfig) -> Dots {
    let left = config.left_margin_dots();
    let printable = config.printable_width_dots();
    if width > printable {
        return left;
    }
    let slack = printable - width;
    // round half up
    left + slack.div_ceil(2)
}

/// [`center_x`] shifted by the configured horizontal offset.
///
/// The shifted coordinate is clamped to the printable area. An element that
/// does not fit stays flush with the left margin whatever the offset.
pub fn place_x(width: Dots, config: &LabelConfig) -> Dots {
    let centered = center_x(width, config);
    let shift = config.horizontal_offset_dots();
    if shift == 0 || !fits(width, config) {
        return centered;
    }
    let min_x = config.left_margin_dots() as i64;
    let max_x = (config.width_dots() - config.right_margin_dots() - width) as i64;
    (centered as i64 + shift as i64).clamp(min_x, max_x) as Dots
}

/// Full placement for an element of `width` dots at `y`.
pub fn place(width: Dots, y: VerticalOffset, config: &LabelConfig) -> Placement {
    Placement {
        x: place_x(width, config),
        y: y.to_dots(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::{Dpi, Margins};

    fn label_51x25() -> LabelConfig {
        LabelConfig::new(51.0, 25.0, Dpi::Dpi203)
    }

    #[test]
    fn test_center_without_margins() {
        let config = label_51x25();
        assert_eq!(center_x(230, &config), 89);
        assert_eq!(center_x(408, &config), 0);
        assert_eq!(center_x(0, &config), 204);
    }

    #[test]
    fn test_center_with_margins() {
        // 1.5mm = 12 dots each side, printable 384
        let config = label_51x25().with_margins(Margins::symmetric(0.0, 1.5));
        let x = center_x(230, &config);
        // (384 - 230) / 2 + 12
        assert_eq!(x, 89);
        assert!(x >= config.left_margin_dots());
        assert!(x + 230 <= config.width_dots() - config.right_margin_dots());
    }

    #[test]
    fn test_center_with_asymmetric_margins() {
        let config = label_51x25().with_margins(Margins {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 4.0,
        });
        // printable 376, slack 146, x = 32 + 73
        assert_eq!(center_x(230, &config), 105);
    }

    #[test]
    fn test_odd_slack_rounds_half_up() {
        let config = label_51x25();
        // slack 177 -> 88.5 -> 89
        assert_eq!(center_x(231, &config), 89);
        assert!(89 + 231 <= 408);
    }

    #[test]
    fn test_oversized_is_flush_left() {
        let config = label_51x25().with_margins(Margins::uniform(1.0));
        assert_eq!(center_x(1000, &config), 8);

        let bare = label_51x25();
        assert_eq!(center_x(409, &bare), 0);
    }

    #[test]
    fn test_centering_property_over_widths() {
        for margins in [Margins::NONE, Margins::uniform(1.0), Margins::symmetric(0.5, 2.25)] {
            let config = label_51x25().with_margins(margins);
            let left = config.left_margin_dots();
            let right_limit = config.width_dots() - config.right_margin_dots();
            let printable = config.printable_width_dots();
            for w in 0..=printable {
                let x = center_x(w, &config);
                assert!(x >= left);
                assert!(x + w <= right_limit, "w={} x={}", w, x);
                let expected = ((printable - w) as f32 / 2.0).round() as u32 + left;
                assert_eq!(x, expected);
            }
        }
    }

    #[test]
    fn test_horizontal_offset_shifts_and_clamps() {
        let config = label_51x25().with_offset(-1.0, 0.0);
        assert_eq!(place_x(230, &config), 81);

        // Large negative offset clamps to the label edge
        let config = label_51x25().with_offset(-20.0, 0.0);
        assert_eq!(place_x(230, &config), 0);

        // Large positive offset clamps so the element stays on the label
        let config = label_51x25().with_offset(20.0, 0.0);
        assert_eq!(place_x(230, &config), 178);
    }

    #[test]
    fn test_horizontal_offset_respects_margins() {
        // 2mm = 16 dots each side, right edge limit 392
        let config = label_51x25()
            .with_margins(Margins::uniform(2.0))
            .with_offset(20.0, 0.0);
        assert_eq!(place_x(230, &config), 162);

        let config = label_51x25()
            .with_margins(Margins::uniform(2.0))
            .with_offset(-20.0, 0.0);
        assert_eq!(place_x(230, &config), 16);

        // oversized stays at the left margin with a positive offset
        let config = label_51x25()
            .with_margins(Margins::uniform(1.0))
            .with_offset(1.0, 0.0);
        assert_eq!(place_x(1000, &config), 8);

        for offset in [-30.0, -1.0, 0.5, 3.0, 30.0] {
            let config = label_51x25()
                .with_margins(Margins::symmetric(0.0, 1.5))
                .with_offset(offset, 0.0);
            for w in [0, 100, 230, 384] {
                let x = place_x(w, &config);
                assert!(x >= 12, "offset={} w={} x={}", offset, w, x);
                assert!(x + w <= 396, "offset={} w={} x={}", offset, w, x);
            }
        }
    }

    #[test]
    fn test_vertical_offset() {
        let config = label_51x25();
        assert_eq!(VerticalOffset::Dots(17).to_dots(&config), 17);
        assert_eq!(VerticalOffset::Mm(2.5).to_dots(&config), 20);
    }

    #[test]
    fn test_place() {
        let config = label_51x25();
        let p = place(230, VerticalOffset::Mm(5.0), &config);
        assert_eq!(p, Placement { x: 89, y: 40 });
        assert!(fits(230, &config));
        assert!(!fits(409, &config));
    }
}
