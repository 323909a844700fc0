use std::path::Path;

use anyhow::Result;
use meal_core::kitchen::{KitchenContext, KitchenLayout, KitchenOptions};

use crate::canonicalize_or_current;

/// Resolve `root` and open the kitchen there (config, pantry and recipes).
pub fn open_kitchen(root: &str, options: KitchenOptions) -> Result<KitchenContext> {
    let root_path = canonicalize_or_current(root)?;
    KitchenContext::open(&root_path, options)
}

/// Resolve `root` into a layout without touching the filesystem.
pub fn kitchen_layout(root: &str) -> Result<KitchenLayout> {
    Ok(KitchenLayout::new(canonicalize_or_current(root)?))
}

/// Helper to print whether a path exists.
pub fn print_path_status(label: &str, path: &Path) {
    let exists = path.exists();
    println!("- {label}: {} ({})", if exists { "OK" } else { "MISSING" }, path.display());
}
