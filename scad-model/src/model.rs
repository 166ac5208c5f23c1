//! The model tree node and its serialization.

use std::{fmt, ops::Add};

use scadkit_codegen::{CodeWriter, Indent};

use crate::{Args, Matrix, Param, operators};

/// One operation in a modeling expression.
///
/// A model without operands is a leaf statement (`cube(10);`). A model with
/// operands, even an empty list, is emitted as a block containing each
/// operand (`union() { ... }`). Models are never mutated after
/// construction; the combinator methods consume their inputs and return a
/// fresh parent node.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    command: String,
    params: Vec<Param>,
    operands: Option<Vec<Model>>,
}

impl Model {
    /// Create a leaf model.
    pub fn new(command: impl Into<String>, args: impl Into<Args>) -> Self {
        Self {
            command: command.into(),
            params: args.into().into_params(),
            operands: None,
        }
    }

    /// Create a model whose operands are emitted inside a block.
    pub fn with_operands(
        command: impl Into<String>,
        args: impl Into<Args>,
        operands: impl IntoIterator<Item = Model>,
    ) -> Self {
        Self {
            command: command.into(),
            params: args.into().into_params(),
            operands: Some(operands.into_iter().collect()),
        }
    }

    /// The command name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The parameters, positional first.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The nested operands, `None` for leaf statements.
    pub fn operands(&self) -> Option<&[Model]> {
        self.operands.as_deref()
    }

    /// Returns true if this model is emitted as a terminal statement.
    pub fn is_leaf(&self) -> bool {
        self.operands.is_none()
    }

    /// Emit this model and its operands into `writer`.
    ///
    /// Each model starts on a new line, so the very first statement of a
    /// document is preceded by a newline.
    pub fn render_into(&self, writer: &mut CodeWriter) {
        writer.fill(&self.command);
        writer.delimit("(", ")", |w| {
            w.interleave(
                &self.params,
                |w| {
                    w.write(", ");
                },
                |w, param| {
                    w.write(&param.to_string());
                },
            );
        });

        match &self.operands {
            None => {
                writer.write(";");
            }
            Some(operands) => {
                writer.write(" ");
                writer.block(|w| {
                    for operand in operands {
                        operand.render_into(w);
                    }
                });
            }
        }
    }

    /// Serialize to OpenSCAD source with 4-space indentation.
    pub fn to_scad(&self) -> String {
        self.to_scad_with(Indent::SCAD)
    }

    /// Serialize to OpenSCAD source with the given indentation.
    pub fn to_scad_with(&self, indent: Indent) -> String {
        let mut writer = CodeWriter::new(indent);
        self.render_into(&mut writer);
        let source = writer.build();
        match source.strip_prefix('\n') {
            Some(stripped) => stripped.to_string(),
            None => source,
        }
    }

    /// Minkowski sum of `self` and `other`.
    pub fn combine_by_minkowski(self, other: Model) -> Model {
        operators::minkowski([self, other], ())
    }

    /// Union of `self` and `other`.
    pub fn union(self, other: Model) -> Model {
        operators::union([self, other], ())
    }

    /// Intersection of `self` and `other`.
    pub fn intersection(self, other: Model) -> Model {
        operators::intersection([self, other], ())
    }

    /// `self` with `other` subtracted.
    pub fn difference(self, other: Model) -> Model {
        operators::difference([self, other], ())
    }

    /// Wrap `self` in a `multmatrix` with the given transform.
    pub fn apply_transform_matrix(self, matrix: impl Into<Matrix>) -> Model {
        operators::multmatrix(self, Args::new().arg(matrix.into().to_value()))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_scad())
    }
}

impl Add for Model {
    type Output = Model;

    fn add(self, other: Model) -> Model {
        self.combine_by_minkowski(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, cube, sphere};

    #[test]
    fn test_leaf_statement() {
        let model = Model::new("cube", Args::new().arg(10).kwarg("center", true));
        assert!(model.is_leaf());
        assert_eq!(model.to_string(), "cube(10, center=true);");
    }

    #[test]
    fn test_leaf_without_params() {
        assert_eq!(Model::new("cube", ()).to_string(), "cube();");
    }

    #[test]
    fn test_block_statement() {
        let model = Model::with_operands(
            "translate",
            Args::new().arg([1, 2, 3]),
            [cube(Args::new().arg(1))],
        );
        assert_eq!(model.to_string(), "translate([1, 2, 3]) {\n    cube(1);\n}");
    }

    #[test]
    fn test_empty_operands_still_block() {
        let model = Model::with_operands("group", (), Vec::new());
        assert!(!model.is_leaf());
        assert_eq!(model.operands(), Some(&[][..]));
        assert_eq!(model.to_string(), "group() {\n}");
    }

    #[test]
    fn test_nested_indentation() {
        let inner = Model::with_operands("hull", (), [sphere(Args::new().arg(1))]);
        let outer = Model::with_operands("union", (), [inner, cube(Args::new().arg(2))]);
        assert_eq!(
            outer.to_string(),
            "union() {\n    hull() {\n        sphere(1);\n    }\n    cube(2);\n}"
        );
    }

    #[test]
    fn test_no_leading_newline() {
        let source = cube(()).to_scad();
        assert!(!source.starts_with('\n'));
    }

    #[test]
    fn test_render_into_keeps_leading_newline() {
        let mut writer = CodeWriter::default();
        cube(Args::new().arg(1)).render_into(&mut writer);
        assert_eq!(writer.source(), "\ncube(1);");
    }

    #[test]
    fn test_tab_indent() {
        let model = Model::with_operands("union", (), [cube(())]);
        assert_eq!(model.to_scad_with(Indent::Tab), "union() {\n\tcube();\n}");
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let model = cube(Args::new().arg(1)).union(sphere(Args::new().kwarg("r", 2)));
        let first = model.to_scad();
        let second = model.to_scad();
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_is_minkowski() {
        let model = cube(Args::new().arg(1)) + sphere(Args::new().arg(2));
        assert_eq!(model.command(), "minkowski");
        let operands = model.operands().unwrap();
        assert_eq!(operands.len(), 2);
        assert_eq!(operands[0].command(), "cube");
        assert_eq!(operands[1].command(), "sphere");
    }

    #[test]
    fn test_combinator_methods() {
        let a = || cube(Args::new().arg(1));
        let b = || sphere(Args::new().arg(1));
        assert_eq!(a().union(b()).command(), "union");
        assert_eq!(a().intersection(b()).command(), "intersection");
        assert_eq!(a().difference(b()).command(), "difference");
        assert_eq!(a().combine_by_minkowski(b()).command(), "minkowski");
    }

    #[test]
    fn test_apply_transform_matrix() {
        let model = cube(()).apply_transform_matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(model.command(), "multmatrix");
        assert_eq!(
            model.params()[0].value,
            Value::from(vec![vec![1.0, 0.0], vec![0.0, 1.0]])
        );
        assert_eq!(
            model.to_string(),
            "multmatrix([[1, 0], [0, 1]]) {\n    cube();\n}"
        );
    }
}
