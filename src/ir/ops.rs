//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for label jobs.
//! The IR is a sequence of opcodes that can be inspected and validated
//! before being compiled to TSPL text.
//!
//! ## Design Philosophy
//!
//! The IR sits between the label builder and the printer's command text:
//!
//! ```text
//! LabelContent + Preset → IR (inspectable) → Codegen → TSPL
//! ```
//!
//! Each opcode is exactly one TSPL instruction. Positions and lengths are
//! already resolved to dots; nothing downstream does geometry.

use crate::layout::Placement;
use crate::printer::Orientation;
use crate::printer::units::Dots;
use crate::protocol::barcode::{HumanReadable, Symbology};
use crate::protocol::text::{FontTier, Rotation};

/// A positioned text element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    pub content: String,
    pub font: FontTier,
    pub rotation: Rotation,
    /// Horizontal multiplier, at least 1
    pub x_mul: u8,
    /// Vertical multiplier, at least 1
    pub y_mul: u8,
    pub position: Placement,
}

/// A positioned 1D barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeElement {
    pub symbology: Symbology,
    pub payload: String,
    /// Bar height in dots
    pub height: Dots,
    pub human_readable: HumanReadable,
    pub rotation: Rotation,
    /// Narrow module width in dots
    pub narrow: Dots,
    /// Wide module width in dots
    pub wide: Dots,
    pub position: Placement,
}

/// IR opcodes, one per TSPL instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Setup ==========
    /// Label size in millimeters.
    Size { width_mm: f32, height_mm: f32 },

    /// Gap between labels in millimeters.
    Gap { mm: f32 },

    /// Feed offset in millimeters.
    Offset { mm: f32 },

    /// Reference point in dots.
    Reference { x: Dots, y: Dots },

    /// Print direction.
    Direction(Orientation),

    /// Print darkness, 0-15.
    Density(u8),

    /// Print speed.
    Speed(u8),

    /// Clear the image buffer.
    Cls,

    // ========== Content ==========
    Text(TextElement),

    Barcode(BarcodeElement),

    // ========== Job Control ==========
    /// Print the buffer this many times.
    Print { copies: u32 },

    /// End of job.
    End,
}

impl Op {
    /// Whether this op puts something on the label.
    pub fn is_content(&self) -> bool {
        matches!(self, Op::Text(_) | Op::Barcode(_))
    }

    /// Whether this op belongs to the per-label setup block.
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            Op::Size { .. }
                | Op::Gap { .. }
                | Op::Offset { .. }
                | Op::Reference { .. }
                | Op::Direction(_)
                | Op::Density(_)
                | Op::Speed(_)
                | Op::Cls
        )
    }
}

/// A label job as IR.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Number of content ops (TEXT + BARCODE).
    pub fn content_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_content()).count()
    }

    /// Number of PRINT ops.
    pub fn print_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Print { .. }))
            .count()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
