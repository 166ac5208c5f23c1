//! Declarative OpenSCAD model trees.
//!
//! A [`Model`] is one node of a modeling expression: a command name, an
//! ordered parameter list and, for combinators, the child models nested in
//! its block. Trees are built bottom-up with the constructor functions and
//! serialized to OpenSCAD source with [`Model::to_scad`] or `Display`.
//!
//! # Module Organization
//!
//! - [`value`] - Parameter values ([`Value`])
//! - [`param`] - Parameters and argument bags ([`Param`], [`Args`])
//! - [`model`] - The tree node and its serialization ([`Model`])
//! - [`matrix`] - Affine transform matrices ([`Matrix`])
//! - [`primitives`] - Leaf shapes (`cube`, `sphere`, ...)
//! - [`operators`] - Combinators (`union`, `hull`, `linear_extrude`, ...)
//!
//! # Example
//!
//! ```
//! use scadkit_model::{Args, cube, sphere, union};
//!
//! let model = union([cube(Args::new().arg(1)), sphere(Args::new().arg(2))], ());
//! assert_eq!(model.to_string(), "union() {\n    cube(1);\n    sphere(2);\n}");
//! ```

pub mod matrix;
pub mod model;
pub mod operators;
pub mod param;
pub mod primitives;
pub mod value;

pub use matrix::Matrix;
pub use model::Model;
pub use operators::{
    difference, hull, intersection, linear_extrude, minkowski, multmatrix, offset, projection,
    rotate_extrude, union,
};
pub use param::{Args, Param};
pub use primitives::{circle, cube, cylinder, polygon, polyhedron, sphere, square};
pub use scadkit_codegen::{CodeWriter, Indent};
pub use value::Value;
