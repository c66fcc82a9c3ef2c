//! # Unit Conversion
//!
//! Millimeters are what label stock is sold in; dots are what the printer
//! addresses. Everything past [`mm_to_dots`] works in dots.
//!
//! ## Conversion Factors
//!
//! | DPI | dots/mm |
//! |-----|---------|
//! | 203 | 8       |
//! | 300 | 11.811  |
//!
//! 203 DPI is nominally 7.99 dots/mm, but TSPL firmware treats it as exactly
//! 8, so we do too.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EtiquetaError, Result};

/// Length or coordinate in printer dots.
pub type Dots = u32;

/// Print head resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Dpi {
    /// 203 DPI (8 dots/mm), the common desktop label printer head
    Dpi203,
    /// 300 DPI (11.811 dots/mm)
    Dpi300,
}

impl Dpi {
    /// Dots per inch as a number.
    pub const fn value(self) -> u16 {
        match self {
            Dpi::Dpi203 => 203,
            Dpi::Dpi300 => 300,
        }
    }

    /// Dots per millimeter used for every conversion.
    pub const fn dots_per_mm(self) -> f32 {
        match self {
            Dpi::Dpi203 => 8.0,
            Dpi::Dpi300 => 11.811,
        }
    }
}

impl TryFrom<u16> for Dpi {
    type Error = EtiquetaError;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            203 => Ok(Dpi::Dpi203),
            300 => Ok(Dpi::Dpi300),
            other => Err(EtiquetaError::Config(format!(
                "unsupported DPI {} (expected 203 or 300)",
                other
            ))),
        }
    }
}

impl From<Dpi> for u16 {
    fn from(dpi: Dpi) -> u16 {
        dpi.value()
    }
}

impl fmt::Display for Dpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} DPI", self.value())
    }
}

/// Convert millimeters to dots, rounding to the nearest dot.
///
/// Negative lengths saturate to 0.
///
/// ## Example
///
/// ```
/// use etiqueta::printer::units::{mm_to_dots, Dpi};
///
/// assert_eq!(mm_to_dots(51.0, Dpi::Dpi203), 408);
/// assert_eq!(mm_to_dots(10.0, Dpi::Dpi300), 118);
/// ```
#[inline]
pub fn mm_to_dots(mm: f32, dpi: Dpi) -> Dots {
    (mm * dpi.dots_per_mm()).round().max(0.0) as Dots
}

/// Convert dots back to millimeters. Lossy: dots are the physical grain.
#[inline]
pub fn dots_to_mm(dots: Dots, dpi: Dpi) -> f32 {
    dots as f32 / dpi.dots_per_mm()
}

/// Signed variant of [`mm_to_dots`] for offsets that may point either way.
#[inline]
pub fn mm_to_signed_dots(mm: f32, dpi: Dpi) -> i32 {
    (mm * dpi.dots_per_mm()).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi_try_from() {
        assert_eq!(Dpi::try_from(203).unwrap(), Dpi::Dpi203);
        assert_eq!(Dpi::try_from(300).unwrap(), Dpi::Dpi300);
        assert!(matches!(
            Dpi::try_from(600),
            Err(EtiquetaError::Config(_))
        ));
        assert!(Dpi::try_from(0).is_err());
    }

    #[test]
    fn test_mm_to_dots_203() {
        assert_eq!(mm_to_dots(51.0, Dpi::Dpi203), 408);
        assert_eq!(mm_to_dots(25.0, Dpi::Dpi203), 200);
        assert_eq!(mm_to_dots(0.0, Dpi::Dpi203), 0);
        // 1.06mm * 8 = 8.48
        assert_eq!(mm_to_dots(1.06, Dpi::Dpi203), 8);
    }

    #[test]
    fn test_mm_to_dots_300() {
        // 40 * 11.811 = 472.44
        assert_eq!(mm_to_dots(40.0, Dpi::Dpi300), 472);
        // 2 * 11.811 = 23.622
        assert_eq!(mm_to_dots(2.0, Dpi::Dpi300), 24);
    }

    #[test]
    fn test_negative_saturates() {
        assert_eq!(mm_to_dots(-3.0, Dpi::Dpi203), 0);
        assert_eq!(mm_to_signed_dots(-3.0, Dpi::Dpi203), -24);
    }

    #[test]
    fn test_round_trip_within_one_dot() {
        for dpi in [Dpi::Dpi203, Dpi::Dpi300] {
            let one_dot_mm = 1.0 / dpi.dots_per_mm();
            let mut mm = 0.0f32;
            while mm < 120.0 {
                let back = dots_to_mm(mm_to_dots(mm, dpi), dpi);
                assert!(
                    (back - mm).abs() <= one_dot_mm,
                    "{} mm at {} came back as {} mm",
                    mm,
                    dpi,
                    back
                );
                mm += 0.37;
            }
        }
    }

    #[test]
    fn test_dpi_serde() {
        let dpi: Dpi = serde_json::from_str("300").unwrap();
        assert_eq!(dpi, Dpi::Dpi300);
        assert!(serde_json::from_str::<Dpi>("150").is_err());
        assert_eq!(serde_json::to_string(&Dpi::Dpi203).unwrap(), "203");
    }
}
