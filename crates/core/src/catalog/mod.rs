//! Recipe catalog and the line-oriented recipe loader.
//!
//! A recipe source looks like:
//!
//! ```text
//! <name> <successRate>
//! <ingredientName> <quantity>
//! <ingredientName> <quantity>
//! ```
//!
//! Tokens are whitespace-delimited. Ingredient names are resolved against the
//! pantry's known ingredients (case-insensitive); unknown names become untyped
//! ingredients that will simply report zero stock.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{Ingredient, Recipe, RequiredIngredient};
use crate::pantry::Pantry;

/// Error type for recipe loading.
///
/// `source_label` is the file path (or caller-supplied label) of the offending
/// source; `line` numbers are 1-based.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read recipe file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer than two lines: a header plus at least one ingredient line is required.
    #[error(
        "Invalid recipe format in {source_label}: \
         expected a header and at least one ingredient line, found {lines} line(s)"
    )]
    InvalidFormat { source_label: String, lines: usize },

    #[error(
        "Malformed recipe header in {source_label}: \
         expected `<name> <successRate>`, found {tokens} token(s)"
    )]
    MalformedHeader { source_label: String, tokens: usize },

    #[error("Invalid success rate '{value}' in {source_label}")]
    InvalidSuccessRate { source_label: String, value: String },

    #[error(
        "Malformed ingredient line {line} in {source_label}: \
         expected `<ingredientName> <quantity>`, found {tokens} token(s)"
    )]
    MalformedIngredientLine { source_label: String, line: usize, tokens: usize },

    #[error("Invalid quantity '{value}' on line {line} in {source_label}")]
    InvalidQuantity { source_label: String, line: usize, value: String },

    #[error("Ingredient '{ingredient}' appears more than once in {source_label} (line {line})")]
    DuplicateIngredient { source_label: String, line: usize, ingredient: String },
}

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Raw recipe definition text plus a label used in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSource {
    pub label: String,
    pub text: String,
}

impl RecipeSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self { label: label.into(), text: text.into() }
    }

    /// Read a recipe file; the label is the path as given.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Ok(Self::new(path.display().to_string(), text))
    }
}

/// Append-ordered recipe collection. Duplicated names are kept; lookups return
/// the first match.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// First recipe (insertion order) whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.matches_name(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes ordered by name (ordinal); ties keep insertion order.
    pub fn sorted_by_name(&self) -> Vec<&Recipe> {
        let mut sorted: Vec<&Recipe> = self.recipes.iter().collect();
        sorted.sort_by(|a, b| a.cmp_by_name(b));
        sorted
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Parses recipe sources, resolving ingredient names against a pantry.
pub struct RecipeCatalogLoader<'p, P: Pantry> {
    pantry: &'p P,
}

impl<'p, P: Pantry> RecipeCatalogLoader<'p, P> {
    pub fn new(pantry: &'p P) -> Self {
        Self { pantry }
    }

    /// Parse one source into a recipe.
    pub fn parse(&self, source: &RecipeSource) -> CatalogResult<Recipe> {
        let label = &source.label;
        let lines: Vec<&str> = source.text.lines().collect();
        if lines.len() < 2 {
            return Err(CatalogError::InvalidFormat {
                source_label: label.clone(),
                lines: lines.len(),
            });
        }

        let header: Vec<&str> = lines[0].split_whitespace().collect();
        if header.len() < 2 {
            return Err(CatalogError::MalformedHeader {
                source_label: label.clone(),
                tokens: header.len(),
            });
        }
        let name = header[0];
        let success_rate: f64 = header[1].parse().map_err(|_| CatalogError::InvalidSuccessRate {
            source_label: label.clone(),
            value: header[1].to_string(),
        })?;
        if !(0.0..=1.0).contains(&success_rate) {
            warn!(recipe = name, success_rate, source = %label, "success rate outside [0, 1]");
        }

        let mut ingredients = Vec::with_capacity(lines.len() - 1);
        for (offset, raw) in lines[1..].iter().enumerate() {
            let line = offset + 2;
            let parts: Vec<&str> = raw.split_whitespace().collect();
            if parts.len() < 2 {
                return Err(CatalogError::MalformedIngredientLine {
                    source_label: label.clone(),
                    line,
                    tokens: parts.len(),
                });
            }
            let quantity: u32 = parts[1].parse().map_err(|_| CatalogError::InvalidQuantity {
                source_label: label.clone(),
                line,
                value: parts[1].to_string(),
            })?;

            let ingredient = self.resolve_ingredient(name, parts[0]);
            ingredients.push(RequiredIngredient::new(ingredient, quantity));
        }

        // Ingredient lines start on line 2.
        let recipe = Recipe::new(name, ingredients, success_rate).map_err(|dup| {
            CatalogError::DuplicateIngredient {
                source_label: label.clone(),
                line: dup.position + 2,
                ingredient: dup.ingredient,
            }
        })?;
        debug!(
            recipe = recipe.name(),
            ingredients = recipe.ingredients().len(),
            success_rate,
            source = %label,
            "parsed recipe"
        );
        Ok(recipe)
    }

    /// Parse each source in order, appending to `catalog` as it goes.
    ///
    /// Fails fast on the first bad source. Recipes appended before the failure
    /// stay in the catalog; the failing source adds nothing.
    pub fn load_into<I>(&self, catalog: &mut RecipeCatalog, sources: I) -> CatalogResult<usize>
    where
        I: IntoIterator<Item = RecipeSource>,
    {
        let mut appended = 0;
        for source in sources {
            catalog.push(self.parse(&source)?);
            appended += 1;
        }
        info!(appended, total = catalog.len(), "loaded recipes");
        Ok(appended)
    }

    /// Like [`load_into`](Self::load_into), reading each file just before parsing it.
    pub fn load_files_into<I>(&self, catalog: &mut RecipeCatalog, paths: I) -> CatalogResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut appended = 0;
        for path in paths {
            let source = RecipeSource::from_path(path)?;
            catalog.push(self.parse(&source)?);
            appended += 1;
        }
        info!(appended, total = catalog.len(), "loaded recipe files");
        Ok(appended)
    }

    fn resolve_ingredient(&self, recipe: &str, name: &str) -> Ingredient {
        match self.pantry.find_by_name(name) {
            Some(known) => known.clone(),
            None => {
                warn!(recipe, ingredient = name, "ingredient not known to the pantry");
                Ingredient::untyped(name)
            }
        }
    }
}
