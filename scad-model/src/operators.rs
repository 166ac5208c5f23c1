//! Combinators that nest other models inside a block.
//!
//! `union`, `intersection`, `difference` and `minkowski` take any number of
//! operands, including none. The remaining operators wrap exactly one model.

use crate::{Args, Model};

/// Sum of all operands.
pub fn union(models: impl IntoIterator<Item = Model>, args: impl Into<Args>) -> Model {
    Model::with_operands("union", args, models)
}

/// Overlap of all operands.
pub fn intersection(models: impl IntoIterator<Item = Model>, args: impl Into<Args>) -> Model {
    Model::with_operands("intersection", args, models)
}

/// First operand minus every following operand.
pub fn difference(models: impl IntoIterator<Item = Model>, args: impl Into<Args>) -> Model {
    Model::with_operands("difference", args, models)
}

/// Minkowski sum of all operands.
pub fn minkowski(models: impl IntoIterator<Item = Model>, args: impl Into<Args>) -> Model {
    Model::with_operands("minkowski", args, models)
}

/// Convex hull of the operand.
pub fn hull(model: Model, args: impl Into<Args>) -> Model {
    Model::with_operands("hull", args, [model])
}

/// Operand transformed by an affine matrix.
pub fn multmatrix(model: Model, args: impl Into<Args>) -> Model {
    Model::with_operands("multmatrix", args, [model])
}

/// 2D operand extruded along Z.
pub fn linear_extrude(model: Model, args: impl Into<Args>) -> Model {
    Model::with_operands("linear_extrude", args, [model])
}

/// 2D operand revolved around Z.
pub fn rotate_extrude(model: Model, args: impl Into<Args>) -> Model {
    Model::with_operands("rotate_extrude", args, [model])
}

/// 3D operand projected onto the XY plane.
pub fn projection(model: Model, args: impl Into<Args>) -> Model {
    Model::with_operands("projection", args, [model])
}

/// 2D operand grown or shrunk.
pub fn offset(model: Model, args: impl Into<Args>) -> Model {
    Model::with_operands("offset", args, [model])
}
