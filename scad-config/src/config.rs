use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, Result};

/// Root of scadkit.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How to invoke the geometry compiler
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Emitted source and compiled output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[compiler]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Compiler executable, looked up on PATH when not absolute
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Extra arguments placed before `-o <output> <source>`
    #[serde(default)]
    pub args: Vec<String>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Extension of the compiled file, which selects the compiler's export format
    #[serde(default = "default_format")]
    pub format: String,

    /// Spaces per nesting level in emitted source
    #[serde(default = "default_indent")]
    pub indent: u8,
}

fn default_binary() -> String {
    "openscad".to_string()
}

fn default_format() -> String {
    "stl".to_string()
}

fn default_indent() -> u8 {
    4
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            args: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            indent: default_indent(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "scadkit.toml")
    }
}

impl Config {
    /// Parse from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.compiler.binary.trim().is_empty() {
            return Err(Error::validation(
                "compiler binary must not be empty",
                "binary",
                src,
                filename,
            ));
        }
        if self.output.format.trim().is_empty() {
            return Err(Error::validation(
                "output format must not be empty",
                "format",
                src,
                filename,
            ));
        }
        if self.output.format.contains(['.', '/', '\\']) {
            return Err(Error::validation(
                "output format is a bare extension such as 'stl' or 'off'",
                "format",
                src,
                filename,
            ));
        }
        if self.output.indent == 0 {
            return Err(Error::validation(
                "indent must be at least 1",
                "indent",
                src,
                filename,
            ));
        }
        Ok(())
    }
}
