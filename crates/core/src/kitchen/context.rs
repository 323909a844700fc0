use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cook::{ConsumptionMode, Cook};
use crate::kitchen::{KitchenConfig, KitchenLayout};
use crate::pantry::InMemoryPantry;

/// Recipe file extensions picked up from the recipes directory.
const RECIPE_EXTENSIONS: &[&str] = &["txt", "recipe"];

/// Per-session overrides applied on top of the kitchen config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitchenOptions {
    pub seed: Option<u64>,
    pub consumption: Option<ConsumptionMode>,
}

/// Convenience wrapper bundling layout, config, and a cook loaded with the
/// kitchen's pantry and recipes.
#[derive(Debug)]
pub struct KitchenContext {
    pub layout: KitchenLayout,
    pub config: KitchenConfig,
    pub pantry_path: PathBuf,
    pub recipes_dir: PathBuf,
    pub recipe_files: Vec<PathBuf>,
    pub cook: Cook<InMemoryPantry>,
}

impl KitchenContext {
    /// Load config, pantry and recipes for a given root.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        Self::open(root, KitchenOptions::default())
    }

    pub fn open(root: impl AsRef<Path>, options: KitchenOptions) -> Result<Self> {
        let layout = KitchenLayout::new(root);
        let config = load_kitchen_config(&layout)?;

        let (pantry_path, pantry) = load_pantry(&layout, &config)?;

        let recipes_dir = layout.resolve(&config.recipes_dir);
        let recipe_files = collect_recipe_files(&recipes_dir)?;

        let consumption = options.consumption.unwrap_or(config.consumption);
        let mut cook = match options.seed.or(config.seed) {
            Some(seed) => Cook::seeded(pantry, seed),
            None => Cook::new(pantry),
        }
        .with_consumption(consumption);
        cook.load_recipe_files(&recipe_files)
            .with_context(|| format!("Failed to load recipes from {}", recipes_dir.display()))?;
        debug!(
            kitchen = %config.name,
            recipes = cook.recipe_book().len(),
            consumption = consumption.as_str(),
            "opened kitchen"
        );

        Ok(Self { layout, config, pantry_path, recipes_dir, recipe_files, cook })
    }
}

/// Load the kitchen config JSON from disk for a given layout.
pub fn load_kitchen_config(layout: &KitchenLayout) -> Result<KitchenConfig> {
    let config_json = fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read kitchen config at {}", layout.config_path.display())
    })?;
    let config: KitchenConfig =
        serde_json::from_str(&config_json).context("Failed to parse kitchen config JSON")?;
    Ok(config)
}

/// Resolve the configured pantry file and load its stock.
pub fn load_pantry(
    layout: &KitchenLayout,
    config: &KitchenConfig,
) -> Result<(PathBuf, InMemoryPantry)> {
    let pantry_path = layout.resolve(&config.pantry_path);
    let pantry = InMemoryPantry::from_path(&pantry_path)
        .with_context(|| format!("Failed to load pantry at {}", pantry_path.display()))?;
    Ok((pantry_path, pantry))
}

/// Recipe files directly under `dir`, sorted by file name. A missing directory yields none.
pub fn collect_recipe_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }

    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if RECIPE_EXTENSIONS.contains(&ext) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
