//! # Printer Module
//!
//! Label stock geometry and the conversions between millimeters and dots.
//!
//! ## Modules
//!
//! - [`units`]: DPI and mm ↔ dot conversion
//! - [`config`]: Physical label configuration
//! - [`presets`]: Registry of named label stocks

pub mod config;
pub mod presets;
pub mod units;

pub use config::{LabelConfig, Margins, Offset, Orientation};
pub use presets::{Preset, resolve};
pub use units::{Dots, Dpi, dots_to_mm, mm_to_dots};
