//! # Code Generation
//!
//! Converts IR programs to TSPL text.

use std::fmt;

use super::ops::{Op, Program};
use crate::protocol::commands::{self, CRLF};

/// Finished TSPL job text, one instruction per `\r\n`-terminated line.
///
/// Opaque to callers: hand it to whatever channel reaches the printer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandStream(String);

impl CommandStream {
    /// Wrap raw TSPL text (e.g. read back from a file for validation).
    pub fn from_raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Instructions without their terminators. Blank lines are skipped.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0
            .split('\n')
            .map(|line| line.trim_end_matches('\r').trim())
            .filter(|line| !line.is_empty())
    }
}

impl fmt::Display for CommandStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommandStream {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CommandStream> for String {
    fn from(stream: CommandStream) -> String {
        stream.0
    }
}

/// TSPL instruction for a single op.
pub fn instruction(op: &Op) -> String {
    match op {
        // ===== Setup =====
        Op::Size {
            width_mm,
            height_mm,
        } => commands::size(*width_mm, *height_mm),
        Op::Gap { mm } => commands::gap(*mm),
        Op::Offset { mm } => commands::offset(*mm),
        Op::Reference { x, y } => commands::reference(*x, *y),
        Op::Direction(orientation) => commands::direction(orientation.direction()),
        Op::Density(density) => commands::density(*density),
        Op::Speed(speed) => commands::speed(*speed),
        Op::Cls => commands::cls(),

        // ===== Content =====
        Op::Text(t) => commands::text(
            t.position.x,
            t.position.y,
            t.font,
            t.rotation,
            t.x_mul,
            t.y_mul,
            &t.content,
        ),
        Op::Barcode(b) => commands::barcode(
            b.position.x,
            b.position.y,
            b.symbology,
            b.height,
            b.human_readable,
            b.rotation,
            b.narrow,
            b.wide,
            &b.payload,
        ),

        // ===== Job Control =====
        Op::Print { copies } => commands::print(*copies),
        Op::End => commands::end(),
    }
}

impl Program {
    /// Compile the IR program to TSPL text.
    pub fn to_tspl(&self) -> CommandStream {
        let mut out = String::new();
        for op in &self.ops {
            out.push_str(&instruction(op));
            out.push_str(CRLF);
        }
        CommandStream(out)
    }
}
