//! Barcode width estimation.
//!
//! Width is `modules × narrow`, where the module count comes from the
//! symbology's structure:
//!
//! | Symbology | Modules |
//! |-----------|---------|
//! | Code128 | `11 × (symbols + 2) + 13 + quiet zone` |
//! | EAN-13 | `95 + quiet zone` |
//! | EAN-8 | `67 + quiet zone` |
//! | UPC-A | `95 + quiet zone` |
//! | other | `max(100, 11 × chars)` |
//!
//! The Code128 symbol count assumes set C packing for even-length digit
//! strings and one symbol per character otherwise. Real encoders switch
//! sets mid-symbol, so [`encoded_code128_modules`] is available for an
//! exact count.

use barcoders::sym::code128::Code128;

use crate::printer::units::Dots;
use crate::protocol::barcode::{Symbology, is_all_digits};

/// Blank modules reserved around a symbol for scanners.
pub const QUIET_ZONE_MODULES: u32 = 20;

/// Code128 start (11) + checksum (11) modules.
const CODE128_OVERHEAD_SYMBOLS: u32 = 2;

/// Code128 stop pattern.
const CODE128_STOP_MODULES: u32 = 13;

/// Approximate Code128 data symbol count.
pub fn code128_symbols(payload: &str) -> u32 {
    let len = payload.chars().count() as u32;
    if is_all_digits(payload) && len % 2 == 0 {
        len / 2
    } else {
        len
    }
}

/// Estimated module count for `payload` in `symbology`, quiet zone
/// included.
pub fn module_count(symbology: Symbology, payload: &str, quiet_zone: u32) -> u32 {
    match symbology {
        Symbology::Code128 => {
            11 * (code128_symbols(payload) + CODE128_OVERHEAD_SYMBOLS)
                + CODE128_STOP_MODULES
                + quiet_zone
        }
        Symbology::Ean13 | Symbology::UpcA => 95 + quiet_zone,
        Symbology::Ean8 => 67 + quiet_zone,
        Symbology::Code39 => generic_module_count(payload),
    }
}

/// Conservative module count for symbologies without a dedicated formula.
pub fn generic_module_count(payload: &str) -> u32 {
    (11 * payload.chars().count() as u32).max(100)
}

/// Width in dots of a symbol with `modules` modules.
#[inline]
pub fn width_for_modules(modules: u32, narrow: Dots) -> Dots {
    modules * narrow.max(1)
}

/// Exact Code128 module count (start, data, checksum, stop), without quiet
/// zone.
///
/// Encodes with set C for even-length digit strings and set B otherwise.
/// Returns `None` when the payload cannot be encoded in that set.
pub fn encoded_code128_modules(payload: &str) -> Option<u32> {
    if payload.is_empty() {
        return None;
    }
    // barcoders selects the starting character set with a prefix char:
    // Ɓ (U+0181) for set B, Ć (U+0106) for set C.
    let prefix = if is_all_digits(payload) && payload.len() % 2 == 0 {
        '\u{0106}'
    } else {
        '\u{0181}'
    };
    let prefixed = format!("{}{}", prefix, payload);
    let barcode = Code128::new(&prefixed).ok()?;
    Some(barcode.encode().len() as u32)
}
