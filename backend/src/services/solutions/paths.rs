//! Mapping between client-supplied relative paths and files on disk.

use std::path::{Component, Path, PathBuf};

use crate::errors::ApiError;

/// Resolves `relative` below `root` and checks that it names a regular file
/// inside `root`.
///
/// Absolute paths, `..` and any other non-plain component are rejected before
/// touching the filesystem; symlinks leading outside `root` are rejected after
/// canonicalization.
pub fn resolve_solution(root: &Path, relative: &str) -> Result<PathBuf, ApiError> {
    let relative_path = Path::new(relative);
    if relative.is_empty()
        || relative_path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(ApiError::InvalidPath);
    }

    let root = root.canonicalize().map_err(|_| ApiError::InvalidPath)?;
    let full = root
        .join(relative_path)
        .canonicalize()
        .map_err(|_| ApiError::InvalidPath)?;
    if !full.starts_with(&root) || !full.is_file() {
        return Err(ApiError::InvalidPath);
    }
    Ok(full)
}

/// `path` relative to `root`, with `/` separators whatever the platform.
pub fn relative_filename(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    let filename = parts?.join("/");
    (!filename.is_empty()).then_some(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("python/arrays")).unwrap();
        fs::write(dir.path().join("python/arrays/two-sum.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("secret.txt"), "nope").unwrap();
        dir
    }

    #[test]
    fn resolves_files_inside_root() {
        let dir = fixture();
        let root = dir.path().join("python");
        let full = resolve_solution(&root, "arrays/two-sum.py").unwrap();
        assert!(full.ends_with("arrays/two-sum.py"));
    }

    #[test]
    fn rejects_traversal_and_missing_files() {
        let dir = fixture();
        let root = dir.path().join("python");
        for bad in ["", "../secret.txt", "arrays/../../secret.txt", "/etc/passwd", "arrays", "arrays/missing.py"] {
            assert!(
                matches!(resolve_solution(&root, bad), Err(ApiError::InvalidPath)),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn relative_filename_uses_forward_slashes() {
        let root = Path::new("/data/python");
        assert_eq!(
            relative_filename(root, &root.join("arrays").join("two-sum.py")).as_deref(),
            Some("arrays/two-sum.py")
        );
        assert_eq!(relative_filename(root, root), None);
        assert_eq!(relative_filename(root, Path::new("/elsewhere/x.py")), None);
    }
}
