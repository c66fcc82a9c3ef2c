//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for label jobs. The IR is a list of
//! TSPL instructions with every coordinate already resolved, sitting
//! between the label builder and the final command text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐     ┌───────────┐
//! │   Builder   │ ──► │     IR      │ ──► │ Codegen  │ ──► │ Validator │
//! │ (geometry)  │     │  (Vec<Op>)  │     │  (TSPL)  │     │           │
//! └─────────────┘     └─────────────┘     └──────────┘     └───────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use etiqueta::ir::{Op, Program, is_valid};
//!
//! let mut program = Program::new();
//! program.push(Op::Size { width_mm: 50.0, height_mm: 20.0 });
//! program.push(Op::Cls);
//! program.push(Op::Print { copies: 1 });
//! program.push(Op::End);
//!
//! let stream = program.to_tspl();
//! assert!(is_valid(&stream));
//! ```

mod codegen;
mod ops;
mod validate;

pub use codegen::{CommandStream, instruction};
pub use ops::*;
pub use validate::{Violation, is_valid, validate};
