//! Configuration for scadkit, read from `scadkit.toml`.
//!
//! ```toml
//! [compiler]
//! binary = "openscad"
//! args = ["--backend=manifold"]
//!
//! [output]
//! format = "stl"
//! indent = 4
//! ```
//!
//! Every section and key is optional.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{CompilerConfig, Config, OutputConfig};
pub use error::{Error, Result};
pub use file::ScadToml;
