//! # JSON API
//!
//! Deserialize JSON batch requests into label jobs.
//!
//! This is the shape the storefront's catalog pages send: a preset key and
//! the product records to print on it.
//!
//! ## Example
//!
//! ```
//! use etiqueta::json_api::LabelRequest;
//!
//! let json = r#"{
//!     "preset": "50x20",
//!     "labels": [
//!         {"name": "Tornillo 3/8", "barcode": "12345678", "price": 0.35},
//!         {"name": "Tuerca", "barcode": "TU-38", "price": "0.20"}
//!     ]
//! }"#;
//!
//! let request = LabelRequest::from_json(json).unwrap();
//! let stream = request.to_commands().unwrap();
//! assert_eq!(stream.lines().filter(|l| l.starts_with("PRINT")).count(), 2);
//! ```

mod convert;
mod schema;

pub use schema::{LabelRequest, ValidationReport};
