//! # TSPL Barcode Parameters
//!
//! Symbology names and human-readable (HRI) modes for the `BARCODE`
//! instruction, plus symbology detection from a raw payload.
//!
//! ## Supported Symbologies
//!
//! | Symbology | TSPL type | Payload |
//! |-----------|-----------|---------|
//! | Code128 | `128` | any printable ASCII |
//! | EAN-13 | `EAN13` | 13 digits (12 + check digit) |
//! | EAN-8 | `EAN8` | 8 digits |
//! | UPC-A | `UPCA` | 12 digits |
//! | Code39 | `39` | A-Z, 0-9, `-. $/+%` (never auto-detected) |
//!
//! ## Detection
//!
//! Catalog barcodes come in as bare strings. The shape decides:
//!
//! ```
//! use etiqueta::protocol::barcode::Symbology;
//!
//! assert_eq!(Symbology::detect("1234567890123"), Symbology::Ean13);
//! assert_eq!(Symbology::detect("12345678"), Symbology::Ean8);
//! assert_eq!(Symbology::detect("123456789012"), Symbology::UpcA);
//! assert_eq!(Symbology::detect("SKU-0042"), Symbology::Code128);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1D barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Code128,
    Ean13,
    Ean8,
    UpcA,
    Code39,
}

impl Symbology {
    /// Infer the symbology from the payload shape.
    ///
    /// 13 digits is EAN-13, 8 digits is EAN-8, 12 digits is UPC-A, anything
    /// else is Code128.
    pub fn detect(payload: &str) -> Self {
        if !is_all_digits(payload) {
            return Symbology::Code128;
        }
        match payload.len() {
            13 => Symbology::Ean13,
            8 => Symbology::Ean8,
            12 => Symbology::UpcA,
            _ => Symbology::Code128,
        }
    }

    /// The `<type>` parameter of the `BARCODE` instruction.
    pub const fn tspl_name(self) -> &'static str {
        match self {
            Symbology::Code128 => "128",
            Symbology::Ean13 => "EAN13",
            Symbology::Ean8 => "EAN8",
            Symbology::UpcA => "UPCA",
            Symbology::Code39 => "39",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tspl_name())
    }
}

/// Human-readable interpretation printed under the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanReadable {
    /// No HRI text
    None = 0,
    /// HRI aligned left
    Left = 1,
    /// HRI centered (default)
    #[default]
    Center = 2,
    /// HRI aligned right
    Right = 3,
}

impl HumanReadable {
    /// The `<human_readable>` parameter, 0-3.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// True for a non-empty string of ASCII digits.
pub fn is_all_digits(payload: &str) -> bool {
    !payload.is_empty() && payload.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_retail_symbologies() {
        assert_eq!(Symbology::detect("7501234567893"), Symbology::Ean13);
        assert_eq!(Symbology::detect("96385074"), Symbology::Ean8);
        assert_eq!(Symbology::detect("036000291452"), Symbology::UpcA);
    }

    #[test]
    fn test_detect_falls_back_to_code128() {
        assert_eq!(Symbology::detect("ABC-123"), Symbology::Code128);
        // Digits, wrong length
        assert_eq!(Symbology::detect("1234567"), Symbology::Code128);
        assert_eq!(Symbology::detect("12345678901234"), Symbology::Code128);
        // 13 chars but not all digits
        assert_eq!(Symbology::detect("123456789012X"), Symbology::Code128);
        assert_eq!(Symbology::detect(""), Symbology::Code128);
    }

    #[test]
    fn test_tspl_names() {
        assert_eq!(Symbology::Code128.tspl_name(), "128");
        assert_eq!(Symbology::Ean13.to_string(), "EAN13");
        assert_eq!(Symbology::UpcA.tspl_name(), "UPCA");
        assert_eq!(Symbology::Code39.tspl_name(), "39");
    }

    #[test]
    fn test_human_readable_codes() {
        assert_eq!(HumanReadable::None.code(), 0);
        assert_eq!(HumanReadable::Left.code(), 1);
        assert_eq!(HumanReadable::default().code(), 2);
        assert_eq!(HumanReadable::Right.code(), 3);
    }

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits("0042"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("12a"));
        // Non-ASCII digits are not barcode digits
        assert!(!is_all_digits("١٢٣"));
    }
}
