//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::io::ErrorKind;
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn remove_tree(&self, path: &Path) -> FsResult<bool> {
        // symlink_metadata: a symlinked output dir is unlinked, not followed
        let metadata = match path.symlink_metadata() {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(FsError::from_io(path, e)),
        };

        let removed = if metadata.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };

        match removed {
            Ok(()) => Ok(true),
            // Raced with something else deleting it
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remove_tree_deletes_nested_directories() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        std::fs::create_dir_all(out.join("css/vendor")).unwrap();
        std::fs::write(out.join("index.html"), "<h1>hi</h1>").unwrap();
        std::fs::write(out.join("css/vendor/a.css"), "a{}").unwrap();

        let fs = LocalFs::new();
        assert!(fs.remove_tree(&out).unwrap());
        assert!(!out.exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn remove_tree_on_missing_path_is_not_an_error() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        assert!(!fs.remove_tree(&dir.path().join("dist")).unwrap());
        assert!(!fs.remove_tree(&dir.path().join("dist")).unwrap());
    }

    #[test]
    fn remove_tree_handles_a_plain_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("dist");
        std::fs::write(&file, "not a directory").unwrap();

        assert!(LocalFs.remove_tree(&file).unwrap());
        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn remove_tree_unlinks_symlink_without_following_it() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("real");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "keep").unwrap();
        let link = dir.path().join("dist");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(LocalFs.remove_tree(&link).unwrap());
        assert!(!link.exists());
        assert!(target.join("keep.txt").exists());
    }
}
