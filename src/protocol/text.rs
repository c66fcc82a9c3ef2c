//! # TSPL Text Parameters
//!
//! Font selection, rotation and string quoting for the `TEXT` instruction.
//!
//! ## Built-in Fonts
//!
//! TSPL firmware ships numbered bitmap fonts. We only use the first five,
//! which grow roughly geometrically:
//!
//! | Font | Nominal cell (203 DPI) |
//! |------|------------------------|
//! | "1"  | 8 × 12 dots            |
//! | "2"  | 12 × 20 dots           |
//! | "3"  | 16 × 24 dots           |
//! | "4"  | 24 × 32 dots           |
//! | "5"  | 32 × 48 dots           |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in font identifier, `"1"` through `"5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FontTier {
    One,
    #[default]
    Two,
    Three,
    Four,
    Five,
}

impl FontTier {
    pub const ALL: [FontTier; 5] = [
        FontTier::One,
        FontTier::Two,
        FontTier::Three,
        FontTier::Four,
        FontTier::Five,
    ];

    /// Tier number, 1-5.
    pub const fn number(self) -> u8 {
        match self {
            FontTier::One => 1,
            FontTier::Two => 2,
            FontTier::Three => 3,
            FontTier::Four => 4,
            FontTier::Five => 5,
        }
    }

    /// Zero-based index, handy for lookup tables.
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<u8> for FontTier {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(FontTier::One),
            2 => Ok(FontTier::Two),
            3 => Ok(FontTier::Three),
            4 => Ok(FontTier::Four),
            5 => Ok(FontTier::Five),
            other => Err(format!("font tier must be 1-5, got {}", other)),
        }
    }
}

impl From<FontTier> for u8 {
    fn from(font: FontTier) -> u8 {
        font.number()
    }
}

impl fmt::Display for FontTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Clockwise rotation of a text or barcode element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Whether the element's width runs along the label's vertical axis.
    pub const fn is_sideways(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(deg: u16) -> Result<Self, Self::Error> {
        match deg {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("rotation must be 0, 90, 180 or 270, got {}", other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.degrees()
    }
}

/// Quote a string for use as a TSPL string parameter.
///
/// TSPL has no backslash escapes; an embedded double quote is written as
/// `\["]`. Line breaks would terminate the instruction, so they become
/// spaces.
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::text::quote;
///
/// assert_eq!(quote("12\" ruler"), "\"12\\[\"] ruler\"");
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\[\"]"),
            '\r' | '\n' => out.push(' '),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
