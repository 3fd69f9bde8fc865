//! Tag sources
//!
//! The page generator only needs the raw newline-separated tag listing; where
//! it comes from is abstracted so tests and offline builds can feed a file.

use std::path::PathBuf;
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::version::error::SourceError;

/// Trait for anything able to produce the raw tag listing
#[cfg_attr(test, automock)]
pub trait TagSource {
    /// Return all tags, one per line
    fn list_tags(&self) -> Result<String, SourceError>;
}

/// Lists tags with `git tag -l`, optionally inside a given repository
#[derive(Debug, Clone, Default)]
pub struct GitTagSource {
    repo: Option<PathBuf>,
}

impl GitTagSource {
    pub fn new(repo: Option<PathBuf>) -> Self {
        Self { repo }
    }
}

impl TagSource for GitTagSource {
    fn list_tags(&self) -> Result<String, SourceError> {
        let mut cmd = Command::new("git");
        cmd.args(["tag", "-l"])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(repo) = &self.repo {
            cmd.current_dir(repo);
        }

        debug!("Listing tags with {:?}", cmd);
        let output = cmd.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("git tag -l exited with {}", output.status);
            return Err(SourceError::Git {
                operation: "tag -l",
                message: stderr.trim().to_owned(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Reads a tag dump previously saved to a file
#[derive(Debug, Clone)]
pub struct FileTagSource {
    path: PathBuf,
}

impl FileTagSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TagSource for FileTagSource {
    fn list_tags(&self) -> Result<String, SourceError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn file_tag_source_returns_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "v5.0.0\nv4.0.0\n").unwrap();

        let source = FileTagSource::new(file.path());

        assert_eq!(source.list_tags().unwrap(), "v5.0.0\nv4.0.0\n");
    }

    #[test]
    fn file_tag_source_fails_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = FileTagSource::new(dir.path().join("missing.txt"));

        assert!(matches!(source.list_tags(), Err(SourceError::Io(_))));
    }

    #[test]
    fn git_tag_source_fails_outside_a_repository() {
        let dir = TempDir::new().unwrap();
        let source = GitTagSource::new(Some(dir.path().to_path_buf()));

        // Either git is missing (Io) or it refuses to run outside a repo (Git)
        assert!(source.list_tags().is_err());
    }
}
