//! File emission for generated artifacts

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DdlError;

/// Writes generated artifacts under a root output directory.
///
/// Emission is idempotent: re-writing the same logical artifact overwrites
/// the previous content. Intermediate directories are created as needed,
/// and any I/O failure is wrapped with the target path; the caller aborts
/// remaining emission on the first failure.
pub struct Emitter {
    root: PathBuf,
}

impl Emitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write one artifact, returning the path it was written to.
    pub fn write(
        &self,
        rel_dir: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, DdlError> {
        let dir = self.root.join(rel_dir);
        fs::create_dir_all(&dir).map_err(|source| DdlError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(file_name);
        fs::write(&path, content).map_err(|source| DdlError::WriteFile {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote generated file");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_intermediate_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());

        let path = emitter
            .write(Path::new("docs/schema"), "User.md", "# user\n")
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# user\n");
    }

    #[test]
    fn test_rewrite_overwrites_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());

        emitter.write(Path::new("docs"), "User.md", "old").unwrap();
        let path = emitter.write(Path::new("docs"), "User.md", "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_dir_creation_failure_carries_target_path() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());

        // A plain file where the intermediate directory should go
        fs::write(tmp.path().join("docs"), "not a dir").unwrap();
        let err = emitter.write(Path::new("docs"), "User.md", "x").unwrap_err();
        match err {
            DdlError::CreateDir { path, .. } => assert!(path.ends_with("docs")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_failure_carries_target_path() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());

        // A directory where the file should go
        fs::create_dir(tmp.path().join("User.md")).unwrap();
        let err = emitter.write(Path::new(""), "User.md", "x").unwrap_err();
        match err {
            DdlError::WriteFile { path, .. } => assert!(path.ends_with("User.md")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
