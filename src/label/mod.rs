//! # Labels
//!
//! The front door of the engine: a [`LabelContent`] record plus a stock
//! (preset key, or explicit [`LabelConfig`](crate::printer::LabelConfig) and
//! [`LabelLayout`]) in, a TSPL [`CommandStream`](crate::ir::CommandStream)
//! out.
//!
//! ## Example
//!
//! ```
//! use etiqueta::label::{self, LabelContent};
//!
//! let content = LabelContent::new("Producto de Prueba", "1234567890123", 29.99)
//!     .with_sku("PP-001");
//! let stream = label::render("51x25", &content)?;
//!
//! assert!(stream.as_str().starts_with("SIZE 51 mm,25 mm\r\n"));
//! assert!(stream.as_str().contains("\"$29.99\""));
//! assert!(stream.as_str().ends_with("PRINT 1\r\nEND\r\n"));
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```

mod builder;
mod content;
mod template;

pub use builder::{LabelBuilder, build, build_many, render, render_many};
pub use content::{LabelContent, format_price, parse_price, truncate_chars};
pub use template::{BarcodeStyle, LabelLayout, Slot, SlotKind};
