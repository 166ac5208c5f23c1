//! Invocation of the OpenSCAD compiler.

use std::{path::Path, process::Command};

use scadkit_config::CompilerConfig;

use crate::{CompilationError, Error, Result};

/// How to run the geometry compiler.
///
/// The command line is `<binary> [args...] -o <output> <source>`; the
/// output format follows the extension of `<output>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenScad {
    binary: String,
    args: Vec<String>,
}

impl OpenScad {
    /// Use `binary`, resolved through PATH when not absolute.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            args: Vec::new(),
        }
    }

    /// Build from the `[compiler]` section of scadkit.toml.
    pub fn from_config(config: &CompilerConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            args: config.args.clone(),
        }
    }

    /// Add an argument placed before `-o`.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The compiler executable.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Extra arguments placed before `-o`.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Compile `source` into `output`, returning the compiler's stdout.
    ///
    /// A non-zero exit becomes a [`CompilationError`] carrying stderr (or
    /// stdout, when stderr is empty) verbatim.
    #[tracing::instrument(skip_all, fields(binary = %self.binary))]
    pub fn run(&self, source: &Path, output: &Path) -> Result<String> {
        tracing::debug!(
            source = %source.display(),
            output = %output.display(),
            "invoking compiler"
        );

        let result = Command::new(&self.binary)
            .args(&self.args)
            .arg("-o")
            .arg(output)
            .arg(source)
            .output()
            .map_err(|source| Error::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&result.stdout).into_owned();
        if result.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
        let output = if stderr.trim().is_empty() {
            stdout
        } else {
            stderr
        };
        tracing::warn!(status = ?result.status, "compiler failed");

        Err(CompilationError {
            status: result.status.code(),
            output,
        }
        .into())
    }
}

impl Default for OpenScad {
    fn default() -> Self {
        Self::from_config(&CompilerConfig::default())
    }
}
