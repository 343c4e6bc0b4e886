//! FileSystem port - the little disk access the dispatcher needs
//!
//! Only `clean` touches the disk directly; everything else happens inside
//! external commands.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Attach the path to a raw I/O error
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory doubles for testing
pub trait FileSystem {
    /// Remove a directory tree (or a single file)
    ///
    /// Returns `Ok(false)` when nothing was there. A missing path is never
    /// an error.
    fn remove_tree(&self, path: &Path) -> FsResult<bool>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn remove_tree(&self, path: &Path) -> FsResult<bool> {
        (**self).remove_tree(path)
    }
}
