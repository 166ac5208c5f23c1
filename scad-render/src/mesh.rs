//! STL triangle meshes.
//!
//! Both encodings OpenSCAD can export are accepted:
//!
//! - binary: 80-byte header, little-endian `u32` triangle count, then one
//!   50-byte record per triangle (normal, three vertices, attribute word)
//! - ASCII: `solid` / `facet normal` / `outer loop` / `vertex` blocks

use std::{
    path::Path,
    str::{Lines, SplitWhitespace},
};

use crate::{Error, Result};

const HEADER_LEN: usize = 80;
const RECORD_LEN: usize = 50;

/// One triangle with its stored facet normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: [f32; 3],
    pub vertices: [[f32; 3]; 3],
}

/// A triangle soup as read from an STL file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a mesh from triangles.
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Read and parse an STL file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_bytes(&bytes)
    }

    /// Parse STL data, detecting binary or ASCII encoding.
    ///
    /// Binary is chosen whenever the length matches the declared triangle
    /// count, since binary headers may also begin with `solid`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if let Some(count) = binary_triangle_count(bytes) {
            return Ok(Self::new(parse_binary(bytes, count)));
        }
        if bytes.trim_ascii_start().starts_with(b"solid") {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| Error::mesh(format!("ASCII STL is not UTF-8: {e}")))?;
            return parse_ascii(text).map(Self::new);
        }
        Err(Error::mesh(format!(
            "{} bytes is neither a binary STL nor an ASCII STL",
            bytes.len()
        )))
    }

    /// The triangles, in file order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounding box as `(min, max)`, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut points = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(mut min, mut max), p| {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
            (min, max)
        }))
    }
}

fn binary_triangle_count(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < HEADER_LEN + 4 {
        return None;
    }
    let count = u32::from_le_bytes([
        bytes[HEADER_LEN],
        bytes[HEADER_LEN + 1],
        bytes[HEADER_LEN + 2],
        bytes[HEADER_LEN + 3],
    ]) as usize;
    let expected = count.checked_mul(RECORD_LEN)?.checked_add(HEADER_LEN + 4)?;
    (expected == bytes.len()).then_some(count)
}

fn parse_binary(bytes: &[u8], count: usize) -> Vec<Triangle> {
    bytes[HEADER_LEN + 4..]
        .chunks_exact(RECORD_LEN)
        .take(count)
        .map(|record| Triangle {
            normal: read_vec3(record, 0),
            vertices: [
                read_vec3(record, 12),
                read_vec3(record, 24),
                read_vec3(record, 36),
            ],
        })
        .collect()
}

fn read_vec3(record: &[u8], at: usize) -> [f32; 3] {
    let f = |i: usize| {
        let o = at + i * 4;
        f32::from_le_bytes([record[o], record[o + 1], record[o + 2], record[o + 3]])
    };
    [f(0), f(1), f(2)]
}

/// Whitespace-separated tokens that can also drop the rest of a line.
struct Tokens<'a> {
    lines: Lines<'a>,
    line: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: "".split_whitespace(),
        }
    }

    fn skip_line(&mut self) {
        self.line = "".split_whitespace();
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(token) = self.line.next() {
                return Some(token);
            }
            self.line = self.lines.next()?.split_whitespace();
        }
    }
}

fn parse_ascii(text: &str) -> Result<Vec<Triangle>> {
    let mut tokens = Tokens::new(text);
    let mut triangles = Vec::new();
    let mut in_solid = false;

    while let Some(token) = tokens.next() {
        match token {
            // The solid name is the rest of the `solid` / `endsolid` line.
            "solid" if !in_solid => {
                in_solid = true;
                tokens.skip_line();
            }
            "endsolid" if in_solid => {
                in_solid = false;
                tokens.skip_line();
            }
            "facet" if in_solid => triangles.push(parse_facet(&mut tokens)?),
            other => return Err(Error::mesh(format!("unexpected token '{other}'"))),
        }
    }

    if in_solid {
        return Err(Error::mesh("missing 'endsolid'"));
    }
    Ok(triangles)
}

fn parse_facet(tokens: &mut Tokens<'_>) -> Result<Triangle> {
    expect(tokens, "normal")?;
    let normal = parse_vec3(tokens)?;
    expect(tokens, "outer")?;
    expect(tokens, "loop")?;
    let mut vertices = [[0.0; 3]; 3];
    for vertex in &mut vertices {
        expect(tokens, "vertex")?;
        *vertex = parse_vec3(tokens)?;
    }
    expect(tokens, "endloop")?;
    expect(tokens, "endfacet")?;
    Ok(Triangle { normal, vertices })
}

fn expect(tokens: &mut Tokens<'_>, keyword: &str) -> Result<()> {
    match tokens.next() {
        Some(token) if token == keyword => Ok(()),
        Some(token) => Err(Error::mesh(format!(
            "expected '{keyword}', found '{token}'"
        ))),
        None => Err(Error::mesh(format!(
            "expected '{keyword}', found end of data"
        ))),
    }
}

fn parse_vec3(tokens: &mut Tokens<'_>) -> Result<[f32; 3]> {
    let mut v = [0.0; 3];
    for component in &mut v {
        let token = tokens
            .next()
            .ok_or_else(|| Error::mesh("expected a number, found end of data"))?;
        *component = token
            .parse()
            .map_err(|_| Error::mesh(format!("invalid number '{token}'")))?;
    }
    Ok(v)
}
