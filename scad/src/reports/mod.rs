//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod mesh;
mod output;

pub use mesh::MeshReport;
pub use output::{Report, TerminalOutput};
