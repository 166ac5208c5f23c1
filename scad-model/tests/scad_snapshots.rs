//! Snapshot tests for OpenSCAD source generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use scadkit_model::{
    Args, Matrix, Model, Value, circle, cube, cylinder, difference, hull, linear_extrude, sphere,
    square, union,
};

fn rounded_plate() -> Model {
    let plate = cube(Args::new().arg([20, 10, 2]).kwarg("center", true));
    let corner = cylinder(
        Args::new()
            .kwarg("r", 1)
            .kwarg("h", 0.5)
            .kwarg("_fn", Value::ident("_fn")),
    );
    plate + corner
}

#[test]
fn test_rounded_plate() {
    insta::assert_snapshot!(rounded_plate().to_string(), @r"
minkowski() {
    cube([20, 10, 2], center=true);
    cylinder(r=1, h=0.5, $fn=_fn);
}
");
}

#[test]
fn test_bracket() {
    let body = difference(
        [
            cube(Args::new().arg([30, 20, 5])),
            Matrix::translation(15.0, 10.0, -1.0)
                * cylinder(Args::new().kwarg("h", 7).kwarg("r", 3)),
        ],
        (),
    );
    let profile = linear_extrude(
        hull(
            union([circle(Args::new().arg(2)), square(Args::new().arg(3))], ()),
            (),
        ),
        Args::new().kwarg("height", 4),
    );

    insta::assert_snapshot!(union([body, profile], ()).to_string(), @r"
union() {
    difference() {
        cube([30, 20, 5]);
        multmatrix([[1, 0, 0, 15], [0, 1, 0, 10], [0, 0, 1, -1], [0, 0, 0, 1]]) {
            cylinder(h=7, r=3);
        }
    }
    linear_extrude(height=4) {
        hull() {
            union() {
                circle(2);
                square(3);
            }
        }
    }
}
");
}

#[test]
fn test_difference_method_chain() {
    let model = cube(Args::new().arg(10).kwarg("center", true))
        .difference(sphere(Args::new().kwarg("r", 6)))
        .intersection(sphere(Args::new().kwarg("r", 8)));

    insta::assert_snapshot!(model.to_string(), @r"
intersection() {
    difference() {
        cube(10, center=true);
        sphere(r=6);
    }
    sphere(r=8);
}
");
}

#[test]
fn test_serializing_twice_is_identical() {
    let model = rounded_plate();
    assert_eq!(model.to_string(), model.to_string());
    assert_eq!(model.to_scad(), model.to_string());
}

#[test]
fn test_block_depth_matches_nesting() {
    let model = union([union([union([cube(())], ())], ())], ());
    let source = model.to_string();
    let lines: Vec<&str> = source.lines().collect();
    assert_eq!(
        lines,
        [
            "union() {",
            "    union() {",
            "        union() {",
            "            cube();",
            "        }",
            "    }",
            "}",
        ]
    );
}
