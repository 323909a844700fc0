use std::path::{Path, PathBuf};

/// Logical layout of a kitchen on disk.
///
/// This is derived from a chosen root path. It does not perform any IO itself.
#[derive(Debug, Clone)]
pub struct KitchenLayout {
    /// Root directory of the kitchen.
    pub root: PathBuf,
    /// Directory for internal metadata (.kitchen).
    pub meta_dir: PathBuf,
    /// Path to the kitchen config file (JSON).
    pub config_path: PathBuf,
    /// Default directory for recipe definition files.
    pub recipes_dir: PathBuf,
    /// Default pantry stock file.
    pub pantry_path: PathBuf,
}

impl KitchenLayout {
    /// Compute the default layout for a kitchen rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(".kitchen");
        let config_path = meta_dir.join("kitchen.json");
        let recipes_dir = root.join("recipes");
        let pantry_path = root.join("pantry.json");

        Self { root, meta_dir, config_path, recipes_dir, pantry_path }
    }

    /// Path string suitable for storing in `KitchenConfig`, relative to `root` when possible.
    pub fn relative_string(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => path.to_string_lossy().to_string(),
        }
    }

    /// Resolve a configured path: absolute paths are kept, relative ones join `root`.
    pub fn resolve(&self, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
