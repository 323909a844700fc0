use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod commands;

/// Absolute kitchen root for a `--root` argument.
///
/// `.` is the working directory. Existing paths are canonicalized; a root that
/// does not exist yet (as for `init-kitchen`) is taken relative to the working
/// directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let cwd = || env::current_dir().context("Failed to get current directory");
    let path = Path::new(root);
    if path == Path::new(".") {
        return cwd();
    }
    match path.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(_) if path.is_absolute() => Ok(path.to_path_buf()),
        Err(_) => Ok(cwd()?.join(path)),
    }
}

/// Infer a kitchen name from the root path.
///
/// If the root has no final component (e.g., `/`), fallback to `unnamed-kitchen`.
pub fn infer_kitchen_name(root: &Path) -> String {
    root.file_name().and_then(|os_str| os_str.to_str()).unwrap_or("unnamed-kitchen").to_string()
}
