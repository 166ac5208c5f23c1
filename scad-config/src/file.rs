use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// A scadkit.toml file with both raw content and parsed configuration.
pub struct ScadToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ScadToml {
    /// Open and parse a scadkit.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path` if it exists, otherwise fall back to defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if path.exists() {
            Ok(Self::open(path)?.config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
