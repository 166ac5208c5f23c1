//! Compile OpenSCAD source and load the resulting meshes.
//!
//! This crate sits beside the model tree: it consumes finished source text
//! and never inspects the tree itself.
//!
//! - [`OpenScad`] - Invokes the external compiler
//! - [`Workspace`] - Scratch directory removed on drop
//! - [`Mesh`] - STL triangle meshes (binary and ASCII)
//! - [`scad_eval`] - Source text in, mesh out
//! - [`Renderer`], [`RenderExt`] - The same, starting from a [`Model`]

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod compiler;
mod error;
mod mesh;
mod workspace;

pub use compiler::OpenScad;
pub use error::{CompilationError, Error, Result};
pub use mesh::{Mesh, Triangle};
use scadkit_config::Config;
use scadkit_model::{Indent, Model};
pub use workspace::Workspace;

/// Output format that [`scad_eval`] can load back as a [`Mesh`].
pub const MESH_FORMAT: &str = "stl";

/// Compile `source` to `format` in a scratch workspace and load the mesh.
///
/// Only [`MESH_FORMAT`] can be loaded; any other format is rejected with
/// [`Error::UnsupportedFormat`] before the compiler runs. The workspace is
/// removed whether or not compilation succeeds. Compiler failures surface
/// as [`Error::Compilation`] untouched.
#[tracing::instrument(skip_all, fields(source_len = source.len(), format = %format))]
pub fn scad_eval(compiler: &OpenScad, source: &str, format: &str) -> Result<Mesh> {
    if !format.eq_ignore_ascii_case(MESH_FORMAT) {
        return Err(Error::UnsupportedFormat {
            format: format.to_string(),
        });
    }

    let workspace = Workspace::new()?;
    let source_path = workspace.stage(source)?;
    let output_path = workspace.output_path(format);

    compiler.run(&source_path, &output_path)?;
    let mesh = Mesh::from_file(&output_path)?;
    tracing::debug!(triangles = mesh.triangle_count(), "loaded mesh");

    workspace.close()?;
    Ok(mesh)
}

/// Renders models with a configured compiler, output format and source
/// indentation.
#[derive(Debug, Clone)]
pub struct Renderer {
    compiler: OpenScad,
    format: String,
    indent: Indent,
}

impl Renderer {
    /// Create a renderer producing STL with 4-space indentation.
    pub fn new(compiler: OpenScad) -> Self {
        Self {
            compiler,
            format: MESH_FORMAT.to_string(),
            indent: Indent::SCAD,
        }
    }

    /// Create a renderer from scadkit.toml settings.
    pub fn from_config(config: &Config) -> Self {
        Self {
            compiler: OpenScad::from_config(&config.compiler),
            format: config.output.format.clone(),
            indent: Indent::Spaces(config.output.indent),
        }
    }

    /// Set the indentation of emitted source.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the compiled output format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// The compiler this renderer invokes.
    pub fn compiler(&self) -> &OpenScad {
        &self.compiler
    }

    /// The compiled output format.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Source text for `model`.
    pub fn source(&self, model: &Model) -> String {
        model.to_scad_with(self.indent)
    }

    /// Compile `model` and load the resulting mesh.
    pub fn render(&self, model: &Model) -> Result<Mesh> {
        scad_eval(&self.compiler, &self.source(model), &self.format)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OpenScad::default())
    }
}

/// Extension trait for compiling a [`Model`] directly.
pub trait RenderExt {
    /// Compile to STL with `compiler` and load the resulting mesh.
    fn render(&self, compiler: &OpenScad) -> Result<Mesh>;
}

impl RenderExt for Model {
    fn render(&self, compiler: &OpenScad) -> Result<Mesh> {
        scad_eval(compiler, &self.to_scad(), MESH_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use scadkit_model::{Args, cube, sphere};

    use super::*;

    #[test]
    fn test_renderer_source_uses_indent() {
        let renderer = Renderer::default().with_indent(Indent::Spaces(2));
        let model = cube(Args::new().arg(1)).union(sphere(()));
        assert_eq!(
            renderer.source(&model),
            "union() {\n  cube(1);\n  sphere();\n}"
        );
    }

    #[test]
    fn test_renderer_from_config() {
        let mut config = Config::default();
        config.compiler.binary = "openscad-nightly".to_string();
        config.output.indent = 8;

        let renderer = Renderer::from_config(&config);
        assert_eq!(renderer.compiler().binary(), "openscad-nightly");
        assert_eq!(renderer.format(), "stl");
        assert_eq!(
            renderer.source(&cube(()).union(cube(()))),
            "union() {\n        cube();\n        cube();\n}"
        );
    }

    #[test]
    fn test_renderer_from_config_odd_indent() {
        let config: Config = "[output]\nindent = 6\n".parse().unwrap();
        let renderer = Renderer::from_config(&config);
        assert_eq!(
            renderer.source(&cube(Args::new().arg(1)).union(cube(()))),
            "union() {\n      cube(1);\n      cube();\n}"
        );
    }

    #[test]
    fn test_non_stl_format_rejected_before_compiling() {
        let config: Config = "[compiler]\nbinary = \"scadkit-test-no-such-compiler\"\n\
                              [output]\nformat = \"off\"\n"
            .parse()
            .unwrap();
        let renderer = Renderer::from_config(&config);
        assert_eq!(renderer.format(), "off");

        let err = renderer.render(&cube(())).unwrap_err();
        match err {
            Error::UnsupportedFormat { format } => assert_eq!(format, "off"),
            other => panic!("expected unsupported format error, got {other:?}"),
        }
    }

    #[test]
    fn test_format_check_ignores_case() {
        let compiler = OpenScad::new("scadkit-test-no-such-compiler");
        let err = scad_eval(&compiler, "cube();", "STL").unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[test]
    fn test_missing_compiler_is_spawn_error() {
        let compiler = OpenScad::new("scadkit-test-no-such-compiler");
        let err = cube(()).render(&compiler).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
