//! Local path resolution for working copies

use std::path::{Path, PathBuf};

use crate::{RepoName, Result};

/// Directory under the current working directory used when no root is given
pub const DEFAULT_ROOT_DIR: &str = "repos";

/// Map a workspace root and repository name to the working copy path
///
/// Pure join with no filesystem access. Because [`RepoName`] is a single
/// validated path component, the result is always a direct child of `root`.
pub fn resolve(root: &Path, name: &RepoName) -> PathBuf {
    root.join(name.as_str())
}

/// Get the default workspace root
///
/// Returns `<cwd>/repos`
pub fn default_root() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(DEFAULT_ROOT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_name() {
        let name = RepoName::parse("demo").unwrap();
        let path = resolve(Path::new("/tmp/work"), &name);
        assert_eq!(path, PathBuf::from("/tmp/work/demo"));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let name = RepoName::parse("demo").unwrap();
        let root = Path::new("/tmp/work");
        assert_eq!(resolve(root, &name), resolve(root, &name));
    }

    #[test]
    fn test_resolve_is_strict_descendant() {
        let root = Path::new("/srv/repos");
        for raw in ["a", "with.dot", "...", "x-y_z"] {
            let name = RepoName::parse(raw).unwrap();
            let path = resolve(root, &name);
            assert!(path.starts_with(root));
            assert_ne!(path, root);
            assert_eq!(path.parent(), Some(root));
        }
    }

    #[test]
    fn test_default_root() {
        let root = default_root().unwrap();
        assert!(root.ends_with(DEFAULT_ROOT_DIR));
        assert!(root.is_absolute());
    }
}
