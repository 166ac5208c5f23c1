//! Leaf shapes.
//!
//! Primitives never carry operands and always serialize as a terminal
//! statement.

use crate::{Args, Model};

/// `cube(size, center)`
pub fn cube(args: impl Into<Args>) -> Model {
    Model::new("cube", args)
}

/// `sphere(r | d)`
pub fn sphere(args: impl Into<Args>) -> Model {
    Model::new("sphere", args)
}

/// `circle(r | d)`
pub fn circle(args: impl Into<Args>) -> Model {
    Model::new("circle", args)
}

/// `square(size, center)`
pub fn square(args: impl Into<Args>) -> Model {
    Model::new("square", args)
}

/// `polyhedron(points, faces, convexity)`
pub fn polyhedron(args: impl Into<Args>) -> Model {
    Model::new("polyhedron", args)
}

/// `cylinder(h, r1, r2, center)`
pub fn cylinder(args: impl Into<Args>) -> Model {
    Model::new("cylinder", args)
}

/// `polygon(points, paths, convexity)`
pub fn polygon(args: impl Into<Args>) -> Model {
    Model::new("polygon", args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_cube_with_center() {
        let model = cube(Args::new().arg(10).kwarg("center", true));
        assert_eq!(model.to_string(), "cube(10, center=true);");
    }

    #[test]
    fn test_command_names() {
        let names: Vec<String> = [
            cube(()),
            sphere(()),
            circle(()),
            square(()),
            polyhedron(()),
            cylinder(()),
            polygon(()),
        ]
        .iter()
        .map(|m| m.command().to_string())
        .collect();
        assert_eq!(
            names,
            ["cube", "sphere", "circle", "square", "polyhedron", "cylinder", "polygon"]
        );
    }

    #[test]
    fn test_primitives_are_leaves() {
        assert!(sphere(Args::new().kwarg("r", 3)).is_leaf());
        assert!(polygon(()).is_leaf());
    }

    #[test]
    fn test_cylinder_named() {
        let model = cylinder(Args::new().kwarg("h", 10).kwarg("r1", 2).kwarg("r2", 1));
        assert_eq!(model.to_string(), "cylinder(h=10, r1=2, r2=1);");
    }

    #[test]
    fn test_special_variable() {
        let model = sphere(Args::new().arg(5).kwarg("_fn", Value::ident("_fn")));
        assert_eq!(model.to_string(), "sphere(5, $fn=_fn);");
    }

    #[test]
    fn test_polyhedron_nested_vectors() {
        let model = polyhedron(
            Args::new()
                .kwarg("points", [[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1]])
                .kwarg("faces", [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]),
        );
        assert_eq!(
            model.to_string(),
            "polyhedron(points=[[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1]], \
             faces=[[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);"
        );
    }
}
