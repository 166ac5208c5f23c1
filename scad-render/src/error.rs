use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for compiling and loading meshes
pub type Result<T> = std::result::Result<T, Error>;

/// The geometry compiler ran and reported a failure.
///
/// `output` is the compiler's diagnostic output, unmodified.
#[derive(Debug, Diagnostic)]
#[diagnostic(code(scadkit::compilation_error))]
pub struct CompilationError {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub output: String,
}

impl fmt::Display for CompilationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(
                f,
                "OpenSCAD compilation failed (exit code {code}):\n{}",
                self.output
            ),
            None => write!(f, "OpenSCAD compilation failed:\n{}", self.output),
        }
    }
}

impl std::error::Error for CompilationError {}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Compilation(#[from] CompilationError),

    #[error("failed to run '{binary}'")]
    #[diagnostic(help("install OpenSCAD or set `binary` under [compiler] in scadkit.toml"))]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to access '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot load '{format}' output as a mesh")]
    #[diagnostic(
        code(scadkit::unsupported_format),
        help("set `format = \"stl\"` under [output] in scadkit.toml")
    )]
    UnsupportedFormat { format: String },

    #[error("invalid STL data: {message}")]
    #[diagnostic(code(scadkit::mesh_error))]
    Mesh { message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn mesh(message: impl Into<String>) -> Self {
        Error::Mesh {
            message: message.into(),
        }
    }
}
