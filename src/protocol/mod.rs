//! # TSPL Protocol Implementation
//!
//! This module provides instruction builders for TSPL, the text command
//! language spoken by most desktop thermal label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: One builder per instruction (SIZE, GAP, TEXT, BARCODE, ...)
//! - [`text`]: Font tiers, rotation, string quoting
//! - [`barcode`]: Symbologies, HRI modes, payload detection
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::protocol::{commands, text::{FontTier, Rotation}};
//!
//! let job = [
//!     commands::size(50.0, 20.0),
//!     commands::gap(2.0),
//!     commands::cls(),
//!     commands::text(10, 10, FontTier::Two, Rotation::Deg0, 1, 1, "HELLO"),
//!     commands::print(1),
//!     commands::end(),
//! ]
//! .join(commands::CRLF);
//!
//! assert!(job.starts_with("SIZE 50 mm,20 mm\r\n"));
//! ```
//!
//! TSPL is plain text. Each instruction is one CRLF-terminated line with
//! comma-separated parameters.

pub mod barcode;
pub mod commands;
pub mod text;
