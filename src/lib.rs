//! # Etiqueta - TSPL Label Generation
//!
//! Etiqueta turns product records into TSPL command streams for thermal
//! label printers (TSC, Xprinter, Gprinter and other TSPL clones). It
//! provides:
//!
//! - **Presets**: registered label stocks with their layouts
//! - **Width estimation**: predicting printed text and barcode widths
//! - **Layout**: horizontal centering inside the printable area
//! - **Command building**: single labels and batches as one job
//! - **Validation**: structural checks on generated or hand-written jobs
//!
//! The library only produces text. Sending it to a printer (USB, spooler,
//! raw TCP 9100) is left to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use etiqueta::{LabelContent, render};
//!
//! let content = LabelContent::new("Producto de Prueba", "1234567890123", 29.99);
//! let stream = render("51x25", &content)?;
//!
//! assert!(stream.as_str().starts_with("SIZE 51 mm,25 mm\r\n"));
//! assert!(stream.as_str().ends_with("PRINT 1\r\nEND\r\n"));
//! assert!(etiqueta::validate(&stream).is_empty());
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`printer`] | Units, label geometry and the preset registry |
//! | [`protocol`] | TSPL instruction builders |
//! | [`metrics`] | Text and barcode width estimation |
//! | [`layout`] | Centering and placement |
//! | [`label`] | Content, layouts and the builder |
//! | [`ir`] | Instruction IR, code generation and validation |
//! | [`json_api`] | JSON batch requests |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with 203 DPI TSPL printers. 300 DPI presets are
//! generated with a rescaled font table; calibrate with
//! [`metrics::TableEstimator::from_json_file`] if centering looks off.

pub mod error;
pub mod ir;
pub mod json_api;
pub mod label;
pub mod layout;
pub mod metrics;
pub mod printer;
pub mod protocol;
pub mod server;

// Re-exports for convenience
pub use error::{EtiquetaError, Result};
pub use ir::{CommandStream, Violation, validate};
pub use label::{LabelBuilder, LabelContent, render, render_many};
pub use printer::{Dpi, LabelConfig};
