use std::path::PathBuf;

use anyhow::{anyhow, Result};
use meal_core::catalog::{RecipeCatalogLoader, RecipeSource};
use meal_core::kitchen::{collect_recipe_files, load_kitchen_config, load_pantry};
use meal_core::model::Recipe;
use serde::Serialize;

use crate::commands::{kitchen_layout, open_kitchen};

#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub name: String,
    pub success_rate: f64,
    pub ingredients: Vec<IngredientLine>,
}

#[derive(Debug, Serialize)]
pub struct IngredientLine {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name().to_string(),
            success_rate: recipe.success_rate(),
            ingredients: recipe
                .ingredients()
                .iter()
                .map(|r| IngredientLine {
                    name: r.ingredient.name().to_string(),
                    kind: r.ingredient.kind().to_string(),
                    quantity: r.quantity,
                })
                .collect(),
        }
    }
}

/// List the kitchen's recipe book (load order, or by name with `sorted`).
pub fn list_recipes_command(root: &str, json: bool, sorted: bool) -> Result<()> {
    let ctx = open_kitchen(root, Default::default())?;
    let book = ctx.cook.recipe_book();
    let recipes: Vec<&Recipe> = if sorted { book.sorted_by_name() } else { book.iter().collect() };
    let summaries: Vec<RecipeSummary> = recipes.into_iter().map(RecipeSummary::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Recipes ({}):", summaries.len());
    if summaries.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for recipe in summaries {
        println!("  - {} [success rate: {}]", recipe.name, recipe.success_rate);
        for line in recipe.ingredients {
            if line.kind.is_empty() {
                println!("      {} x{}", line.name, line.quantity);
            } else {
                println!("      {} ({}) x{}", line.name, line.kind, line.quantity);
            }
        }
    }

    Ok(())
}

/// Parse recipe files against the kitchen pantry without cooking anything.
///
/// Checks `files` (relative to the kitchen root) when given, otherwise every
/// recipe file in the recipes dir.
/// Every file is checked and reported; the command fails if any of them is
/// malformed. Returns the number of valid recipes.
pub fn validate_recipes_command(root: &str, files: &[String]) -> Result<usize> {
    let layout = kitchen_layout(root)?;
    let config = load_kitchen_config(&layout)?;
    let (_pantry_path, pantry) = load_pantry(&layout, &config)?;

    let paths: Vec<PathBuf> = if files.is_empty() {
        collect_recipe_files(&layout.resolve(&config.recipes_dir))?
    } else {
        files.iter().map(|f| layout.resolve(f)).collect()
    };

    let loader = RecipeCatalogLoader::new(&pantry);
    let mut valid = 0;
    let mut failures = 0;
    for path in &paths {
        match RecipeSource::from_path(path).and_then(|source| loader.parse(&source)) {
            Ok(recipe) => {
                valid += 1;
                println!(
                    "OK   {} ({}, {} ingredient(s))",
                    path.display(),
                    recipe.name(),
                    recipe.ingredients().len()
                );
            }
            Err(err) => {
                failures += 1;
                println!("FAIL {}: {err}", path.display());
            }
        }
    }

    println!("Checked {} recipe file(s): {} valid, {} invalid", paths.len(), valid, failures);
    if failures > 0 {
        return Err(anyhow!("{failures} recipe file(s) failed validation"));
    }
    Ok(valid)
}
