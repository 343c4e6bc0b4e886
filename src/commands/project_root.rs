use std::path::{Path, PathBuf};

use sitetask::config::PROJECT_CONFIG_FILE;

/// Discover the project root directory from an invocation directory.
///
/// The nearest directory (walking upward from `start`) holding a
/// `sitetask.toml` wins. Falls back to `start` when none is found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file())
        .unwrap_or(start)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_project_root_prefers_nearest_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("sitetask.toml"), "").unwrap();
        std::fs::create_dir_all(root.join("sub/src")).unwrap();
        std::fs::write(root.join("sub/sitetask.toml"), "").unwrap();

        assert_eq!(discover_project_root(&root.join("sub/src")), root.join("sub"));
    }

    #[test]
    fn discover_project_root_falls_back_to_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("a/b");
        std::fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_project_root(&start), start);
    }

    #[test]
    fn directory_named_like_the_config_is_ignored() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("site");
        std::fs::create_dir_all(start.join("sitetask.toml")).unwrap();

        assert_eq!(discover_project_root(&start), start);
    }
}
