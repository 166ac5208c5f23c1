//! Scratch directory for staging source and receiving compiled output.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{Error, Result};

const SOURCE_FILE: &str = "_.scad";

/// A temporary directory that is deleted when dropped.
///
/// Dropping the workspace on an error path cleans up the same way as a
/// successful [`close`](Self::close); `close` additionally reports any
/// failure to delete.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace under the system temp directory.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("scadkit-")
            .tempdir()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        tracing::trace!(path = %dir.path().display(), "created workspace");
        Ok(Self { dir })
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where staged source is written.
    pub fn source_path(&self) -> PathBuf {
        self.dir.path().join(SOURCE_FILE)
    }

    /// Where the compiler writes its output; `format` is the file extension.
    pub fn output_path(&self, format: &str) -> PathBuf {
        self.dir.path().join(format!("_.{format}"))
    }

    /// Write `source` to [`source_path`](Self::source_path) and return that path.
    pub fn stage(&self, source: &str) -> Result<PathBuf> {
        let path = self.source_path();
        std::fs::write(&path, source).map_err(|e| Error::io(&path, e))?;
        Ok(path)
    }

    /// Delete the workspace, reporting failures.
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| Error::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_inside_workspace() {
        let workspace = Workspace::new().unwrap();
        assert!(workspace.path().is_dir());
        assert_eq!(workspace.source_path(), workspace.path().join("_.scad"));
        assert_eq!(workspace.output_path("stl"), workspace.path().join("_.stl"));
        assert_eq!(workspace.output_path("off"), workspace.path().join("_.off"));
    }

    #[test]
    fn test_stage_writes_source() {
        let workspace = Workspace::new().unwrap();
        let path = workspace.stage("cube(1);").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "cube(1);");
    }

    #[test]
    fn test_close_removes_directory() {
        let workspace = Workspace::new().unwrap();
        workspace.stage("cube(1);").unwrap();
        let root = workspace.path().to_path_buf();
        workspace.close().unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_drop_removes_directory() {
        let root = {
            let workspace = Workspace::new().unwrap();
            std::fs::write(workspace.output_path("stl"), b"partial").unwrap();
            workspace.path().to_path_buf()
        };
        assert!(!root.exists());
    }
}
