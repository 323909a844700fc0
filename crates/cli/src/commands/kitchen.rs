use std::fs;

use anyhow::{anyhow, Context, Result};
use meal_core::catalog::{RecipeCatalog, RecipeCatalogLoader};
use meal_core::kitchen::{collect_recipe_files, load_kitchen_config, load_pantry, KitchenConfig};
use meal_core::pantry::PantryStock;
use serde::Serialize;
use tracing::info;

use crate::commands::{kitchen_layout, print_path_status};
use crate::infer_kitchen_name;

#[derive(Serialize)]
pub struct KitchenInfoSnapshot {
    pub name: String,
    pub description: Option<String>,
    pub root: String,
    pub config_file: String,
    pub config_version: String,
    pub recipes_dir: String,
    pub pantry_path: String,
    pub consumption: String,
    pub seed: Option<u64>,
    pub recipe_files: Vec<String>,
    pub recipe_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes_error: Option<String>,
    pub pantry_ingredients: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantry_error: Option<String>,
}

/// Initialize a new kitchen at `root`.
///
/// Existing pantry files are left alone; the config is (re)written.
pub fn init_kitchen_command(root: &str, name: Option<String>) -> Result<()> {
    let layout = kitchen_layout(root)?;

    // Derive kitchen name if not provided.
    let kitchen_name = match name {
        Some(n) => n,
        None => infer_kitchen_name(&layout.root),
    };

    fs::create_dir_all(&layout.meta_dir)
        .with_context(|| format!("Failed to create meta dir: {}", layout.meta_dir.display()))?;
    fs::create_dir_all(&layout.recipes_dir).with_context(|| {
        format!("Failed to create recipes dir: {}", layout.recipes_dir.display())
    })?;

    let config = KitchenConfig::for_layout(&kitchen_name, &layout);
    let json = serde_json::to_string_pretty(&config)?;
    fs::write(&layout.config_path, json).with_context(|| {
        format!("Failed to write kitchen config: {}", layout.config_path.display())
    })?;

    if !layout.pantry_path.exists() {
        let empty = serde_json::to_string_pretty(&PantryStock::default())?;
        fs::write(&layout.pantry_path, empty).with_context(|| {
            format!("Failed to write pantry stock: {}", layout.pantry_path.display())
        })?;
    }

    info!(kitchen = %kitchen_name, root = %layout.root.display(), "initialized kitchen");
    println!("Initialized kitchen:");
    println!("  Name: {}", kitchen_name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    println!("  Recipes dir: {}", layout.recipes_dir.display());
    println!("  Pantry: {}", layout.pantry_path.display());

    Ok(())
}

/// Show basic information about an existing kitchen.
///
/// Only the config has to be readable; pantry and recipe problems are reported
/// as part of the output rather than failing the command.
pub fn kitchen_info_command(root: &str, json: bool) -> Result<()> {
    let layout = kitchen_layout(root)?;
    let config = load_kitchen_config(&layout)?;
    let recipes_dir = layout.resolve(&config.recipes_dir);
    let recipe_files = collect_recipe_files(&recipes_dir)?;

    let pantry = load_pantry(&layout, &config);
    let recipes: Result<usize> = match &pantry {
        Ok((_, pantry)) => {
            let mut catalog = RecipeCatalog::new();
            RecipeCatalogLoader::new(pantry)
                .load_files_into(&mut catalog, &recipe_files)
                .with_context(|| format!("Failed to load recipes from {}", recipes_dir.display()))
        }
        Err(_) => Err(anyhow!("Recipes need a readable pantry")),
    };

    let snapshot = KitchenInfoSnapshot {
        name: config.name.clone(),
        description: config.description.clone(),
        root: layout.root.display().to_string(),
        config_file: layout.config_path.display().to_string(),
        config_version: config.config_version.clone(),
        recipes_dir: recipes_dir.display().to_string(),
        pantry_path: layout.resolve(&config.pantry_path).display().to_string(),
        consumption: config.consumption.as_str().to_string(),
        seed: config.seed,
        recipe_files: recipe_files.iter().map(|p| p.display().to_string()).collect(),
        recipe_count: recipes.as_ref().copied().unwrap_or(0),
        recipes_error: recipes.as_ref().err().map(|err| format!("{err:#}")),
        pantry_ingredients: pantry.as_ref().map(|(_, p)| p.len()).unwrap_or(0),
        pantry_error: pantry.as_ref().err().map(|err| format!("{err:#}")),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Kitchen Info");
    println!("============");
    println!("Name: {}", snapshot.name);
    if let Some(desc) = &snapshot.description {
        println!("Description: {desc}");
    }
    println!("Root: {}", snapshot.root);
    println!("Config file: {}", snapshot.config_file);
    println!("Config version: {}", snapshot.config_version);
    println!("Consumption: {}", snapshot.consumption);
    match snapshot.seed {
        Some(seed) => println!("Seed: {seed}"),
        None => println!("Seed: (entropy)"),
    }
    println!();

    println!("Paths:");
    print_path_status("Meta dir (.kitchen)", &layout.meta_dir);
    print_path_status("Recipes dir", &recipes_dir);
    print_path_status("Pantry", &layout.resolve(&config.pantry_path));
    println!();

    match &snapshot.pantry_error {
        None => println!("Pantry ingredients: {}", snapshot.pantry_ingredients),
        Some(err) => println!("Pantry: failed to load ({err})"),
    }
    match &snapshot.recipes_error {
        None => println!("Recipes loaded: {}", snapshot.recipe_count),
        Some(err) => println!("Recipes: failed to load ({err})"),
    }

    Ok(())
}
