//! # TSPL Instructions
//!
//! One function per instruction. Each returns the instruction text without
//! its line terminator; [`crate::ir`] joins them with [`CRLF`].
//!
//! ## Job Structure
//!
//! ```text
//! SIZE 51 mm,25 mm      ┐
//! GAP 2 mm,0            │
//! REFERENCE 0,0         │ setup
//! DIRECTION 1           │
//! DENSITY 8             │
//! SPEED 4               │
//! CLS                   ┘
//! TEXT ...              ┐ content
//! BARCODE ...           ┘
//! PRINT 1
//! END
//! ```
//!
//! Millimeter values use the shortest decimal form (`50.8`, not `50.80`);
//! coordinates and lengths are integer dots.

use super::barcode::{HumanReadable, Symbology};
use super::text::{FontTier, Rotation, quote};

/// Instruction terminator.
pub const CRLF: &str = "\r\n";

/// Default print darkness (0-15).
pub const DEFAULT_DENSITY: u8 = 8;

/// Default print speed in inches per second.
pub const DEFAULT_SPEED: u8 = 4;

/// # Label Size (SIZE)
///
/// ```
/// use etiqueta::protocol::commands;
///
/// assert_eq!(commands::size(50.8, 25.4), "SIZE 50.8 mm,25.4 mm");
/// ```
pub fn size(width_mm: f32, height_mm: f32) -> String {
    format!("SIZE {} mm,{} mm", width_mm, height_mm)
}

/// # Gap Between Labels (GAP)
///
/// The second parameter is the gap offset, always 0 for die-cut stock.
pub fn gap(gap_mm: f32) -> String {
    format!("GAP {} mm,0", gap_mm)
}

/// # Feed Offset (OFFSET)
///
/// Only emitted when non-zero.
pub fn offset(offset_mm: f32) -> String {
    format!("OFFSET {} mm", offset_mm)
}

/// # Reference Point (REFERENCE)
pub fn reference(x: u32, y: u32) -> String {
    format!("REFERENCE {},{}", x, y)
}

/// # Print Direction (DIRECTION)
///
/// 0 = landscape, 1 = portrait.
pub fn direction(direction: u8) -> String {
    format!("DIRECTION {}", direction)
}

/// # Print Darkness (DENSITY)
pub fn density(density: u8) -> String {
    format!("DENSITY {}", density.min(15))
}

/// # Print Speed (SPEED)
pub fn speed(speed: u8) -> String {
    format!("SPEED {}", speed)
}

/// # Clear Image Buffer (CLS)
pub fn cls() -> String {
    "CLS".to_string()
}

/// # Text (TEXT)
///
/// `TEXT x,y,"font",rotation,x_mul,y_mul,"content"`
///
/// ```
/// use etiqueta::protocol::commands;
/// use etiqueta::protocol::text::{FontTier, Rotation};
///
/// let cmd = commands::text(60, 150, FontTier::Three, Rotation::Deg0, 1, 1, "$29.99");
/// assert_eq!(cmd, "TEXT 60,150,\"3\",0,1,1,\"$29.99\"");
/// ```
pub fn text(
    x: u32,
    y: u32,
    font: FontTier,
    rotation: Rotation,
    x_mul: u8,
    y_mul: u8,
    content: &str,
) -> String {
    format!(
        "TEXT {},{},\"{}\",{},{},{},{}",
        x,
        y,
        font,
        rotation.degrees(),
        x_mul.max(1),
        y_mul.max(1),
        quote(content)
    )
}

/// # Linear Barcode (BARCODE)
///
/// `BARCODE x,y,"type",height,human_readable,rotation,narrow,wide,"content"`
#[allow(clippy::too_many_arguments)]
pub fn barcode(
    x: u32,
    y: u32,
    symbology: Symbology,
    height: u32,
    human_readable: HumanReadable,
    rotation: Rotation,
    narrow: u32,
    wide: u32,
    content: &str,
) -> String {
    format!(
        "BARCODE {},{},\"{}\",{},{},{},{},{},{}",
        x,
        y,
        symbology.tspl_name(),
        height.max(1),
        human_readable.code(),
        rotation.degrees(),
        narrow.max(1),
        wide.max(1),
        quote(content)
    )
}

/// # Print Buffer (PRINT)
pub fn print(copies: u32) -> String {
    format!("PRINT {}", copies.max(1))
}

/// # End of Job (END)
pub fn end() -> String {
    "END".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_commands() {
        assert_eq!(size(51.0, 25.0), "SIZE 51 mm,25 mm");
        assert_eq!(gap(2.0), "GAP 2 mm,0");
        assert_eq!(gap(0.0), "GAP 0 mm,0");
        assert_eq!(offset(-1.5), "OFFSET -1.5 mm");
        assert_eq!(reference(0, 0), "REFERENCE 0,0");
        assert_eq!(direction(1), "DIRECTION 1");
        assert_eq!(density(DEFAULT_DENSITY), "DENSITY 8");
        assert_eq!(speed(DEFAULT_SPEED), "SPEED 4");
        assert_eq!(cls(), "CLS");
    }

    #[test]
    fn test_density_clamped() {
        assert_eq!(density(40), "DENSITY 15");
    }

    #[test]
    fn test_text_multipliers_floor_at_one() {
        let cmd = text(10, 20, FontTier::One, Rotation::Deg90, 0, 0, "X");
        assert_eq!(cmd, "TEXT 10,20,\"1\",90,1,1,\"X\"");
    }

    #[test]
    fn test_barcode() {
        let cmd = barcode(
            89,
            40,
            Symbology::Ean13,
            60,
            HumanReadable::Center,
            Rotation::Deg0,
            2,
            2,
            "1234567890123",
        );
        assert_eq!(cmd, "BARCODE 89,40,\"EAN13\",60,2,0,2,2,\"1234567890123\"");
    }

    #[test]
    fn test_print_and_end() {
        assert_eq!(print(3), "PRINT 3");
        assert_eq!(print(0), "PRINT 1");
        assert_eq!(end(), "END");
    }
}
