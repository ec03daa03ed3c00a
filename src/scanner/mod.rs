
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Failed to read directory entry: {0}")]
    Unreadable(#[from] walkdir::Error),

    #[error("Non-UTF-8 path component in: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Walk `root` depth-first and list every non-directory entry as a
/// virtual path rooted at "/"
///
/// Recurses into each subdirectory at the point the OS listing yields
/// it; output order is traversal order, not sorted. Whatever the
/// filesystem reports as not-a-directory (including symlinks and
/// special files) is treated as a leaf file.
pub fn scan_tree(root: &Path) -> Result<Vec<String>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let mut paths = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir yields paths under its root");
        paths.push(virtual_path(relative)?);
    }

    Ok(paths)
}

/// Join a root-relative path into a "/"-separated virtual path
fn virtual_path(relative: &Path) -> Result<String, ScanError> {
    let mut out = String::new();

    for component in relative.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| ScanError::InvalidPath(relative.to_path_buf()))?;
        out.push('/');
        out.push_str(part);
    }

    Ok(out)
}
