//! Transform matrices for `multmatrix`.

use std::ops::Mul;

use crate::{Model, Value};

/// A row-major transform matrix.
///
/// OpenSCAD accepts 4x4 (or 3x4) affine matrices in `multmatrix`; the
/// dimensions are passed through unchecked.
///
/// Multiplying a matrix by a model (`matrix * model`) wraps the model in a
/// `multmatrix` node:
///
/// ```
/// use scadkit_model::{Matrix, cube};
///
/// let moved = Matrix::translation(1.0, 2.0, 3.0) * cube(());
/// assert_eq!(
///     moved.to_string(),
///     "multmatrix([[1, 0, 0, 1], [0, 1, 0, 2], [0, 0, 1, 3], [0, 0, 0, 1]]) {\n    cube();\n}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Create a matrix from its rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// The `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self { rows }
    }

    /// A 4x4 translation matrix.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.rows[0][3] = x;
        matrix.rows[1][3] = y;
        matrix.rows[2][3] = z;
        matrix
    }

    /// A 4x4 scaling matrix.
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.rows[0][0] = x;
        matrix.rows[1][1] = y;
        matrix.rows[2][2] = z;
        matrix
    }

    /// The matrix rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Nested vector value for use as a parameter.
    pub fn to_value(&self) -> Value {
        Value::array(self.rows.iter().map(|row| Value::array(row.iter().copied())))
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows)
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(rows: [[f64; C]; R]) -> Self {
        Self::new(rows.iter().map(|row| row.to_vec()).collect())
    }
}

impl Mul<Model> for Matrix {
    type Output = Model;

    fn mul(self, model: Model) -> Model {
        model.apply_transform_matrix(self)
    }
}
