//! Source emission utilities for OpenSCAD code generation.
//!
//! This crate provides the low-level text writer that model trees drive
//! to produce OpenSCAD source:
//!
//! - [`CodeWriter`] - Indentation-aware buffer with scoped block and delimiter helpers
//! - [`Indent`] - Indentation configuration

mod indent;
mod writer;

pub use indent::Indent;
pub use writer::CodeWriter;
