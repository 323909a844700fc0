//! The cook: recipe lookup, stock checks, consumption and the outcome draw.
//!
//! `cook_meal` is a linear pipeline with early exits:
//! 1. find the recipe (case-insensitive, first match);
//! 2. check every requirement against the pantry without touching it;
//! 3. consume the requirements;
//! 4. draw a uniform sample in `[0, 1)` and compare it with the success rate.
//!
//! Not-found and shortage results are ordinary [`CookOutcome`] values, not errors.

use std::fmt;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogResult, RecipeCatalog, RecipeCatalogLoader, RecipeSource};
use crate::pantry::Pantry;

/// How the consumption step debits the pantry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionMode {
    /// One all-or-nothing `try_consume_all` call; a failure leaves stock untouched.
    #[default]
    Transactional,
    /// One `consume` call per ingredient; debits made before a failure are kept.
    Sequential,
}

impl ConsumptionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumptionMode::Transactional => "transactional",
            ConsumptionMode::Sequential => "sequential",
        }
    }
}

/// Result of a cooking attempt. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CookOutcome {
    RecipeNotFound { recipe: String },
    /// Required ingredient with nothing on hand.
    MissingIngredient { recipe: String, ingredient: String },
    /// Required ingredient with some, but not enough, on hand.
    InsufficientQuantity { recipe: String, ingredient: String, needed: u32, on_hand: u32 },
    /// The pantry refused a debit after the stock check passed.
    NotEnoughIngredients { recipe: String },
    Succeeded { recipe: String },
    /// Ingredients were consumed but the dish was ruined.
    Failed { recipe: String },
}

impl CookOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CookOutcome::Succeeded { .. })
    }

    /// Whether the attempt got as far as consuming every ingredient.
    pub fn consumed_ingredients(&self) -> bool {
        matches!(self, CookOutcome::Succeeded { .. } | CookOutcome::Failed { .. })
    }

    /// Recipe name as requested (not found) or as stored in the catalog.
    pub fn recipe(&self) -> &str {
        match self {
            CookOutcome::RecipeNotFound { recipe }
            | CookOutcome::MissingIngredient { recipe, .. }
            | CookOutcome::InsufficientQuantity { recipe, .. }
            | CookOutcome::NotEnoughIngredients { recipe }
            | CookOutcome::Succeeded { recipe }
            | CookOutcome::Failed { recipe } => recipe,
        }
    }
}

impl fmt::Display for CookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookOutcome::RecipeNotFound { .. } => f.write_str("Recipe not found."),
            CookOutcome::MissingIngredient { ingredient, .. } => {
                write!(f, "Missing ingredient: {ingredient}")
            }
            CookOutcome::InsufficientQuantity { ingredient, needed, on_hand, .. } => {
                write!(f, "Not enough {ingredient} (need {needed}, have {on_hand})")
            }
            CookOutcome::NotEnoughIngredients { .. } => f.write_str("Not enough ingredients"),
            CookOutcome::Succeeded { recipe } => write!(f, "Cooking '{recipe}' succeeded!"),
            CookOutcome::Failed { recipe } => {
                write!(f, "Cooking '{recipe}' failed. Ingredients burned...")
            }
        }
    }
}

/// Orchestrator holding the pantry, the recipe book and the random source.
///
/// The generator is injected so callers (and tests) control the outcome draw.
#[derive(Debug)]
pub struct Cook<P, R = StdRng> {
    pantry: P,
    recipe_book: RecipeCatalog,
    rng: R,
    consumption: ConsumptionMode,
}

impl<P: Pantry> Cook<P, StdRng> {
    /// Cook drawing outcomes from an entropy-seeded `StdRng`.
    pub fn new(pantry: P) -> Self {
        Self::with_rng(pantry, StdRng::from_entropy())
    }

    /// Cook with a reproducible outcome sequence.
    pub fn seeded(pantry: P, seed: u64) -> Self {
        Self::with_rng(pantry, StdRng::seed_from_u64(seed))
    }
}

impl<P: Pantry, R: Rng> Cook<P, R> {
    pub fn with_rng(pantry: P, rng: R) -> Self {
        Self {
            pantry,
            recipe_book: RecipeCatalog::new(),
            rng,
            consumption: ConsumptionMode::default(),
        }
    }

    pub fn with_consumption(mut self, consumption: ConsumptionMode) -> Self {
        self.consumption = consumption;
        self
    }

    pub fn consumption(&self) -> ConsumptionMode {
        self.consumption
    }

    pub fn pantry(&self) -> &P {
        &self.pantry
    }

    /// Mutable access for restocking between attempts.
    pub fn pantry_mut(&mut self) -> &mut P {
        &mut self.pantry
    }

    pub fn into_pantry(self) -> P {
        self.pantry
    }

    /// Loaded recipes in insertion order.
    pub fn recipe_book(&self) -> &RecipeCatalog {
        &self.recipe_book
    }

    /// Parse and append recipes from in-memory sources. Returns how many were appended.
    ///
    /// Fails fast; recipes appended before a failing source are kept.
    pub fn load_recipe_sources<I>(&mut self, sources: I) -> CatalogResult<usize>
    where
        I: IntoIterator<Item = RecipeSource>,
    {
        RecipeCatalogLoader::new(&self.pantry).load_into(&mut self.recipe_book, sources)
    }

    /// Read, parse and append recipe files in order. Same failure semantics as
    /// [`load_recipe_sources`](Self::load_recipe_sources).
    pub fn load_recipe_files<I>(&mut self, paths: I) -> CatalogResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        RecipeCatalogLoader::new(&self.pantry).load_files_into(&mut self.recipe_book, paths)
    }

    /// Attempt to cook `recipe_name`.
    pub fn cook_meal(&mut self, recipe_name: &str) -> CookOutcome {
        let Some(recipe) = self.recipe_book.find(recipe_name) else {
            info!(recipe = recipe_name, "recipe not found");
            return CookOutcome::RecipeNotFound { recipe: recipe_name.to_string() };
        };

        for required in recipe.ingredients() {
            let on_hand = self.pantry.quantity(&required.ingredient);
            if on_hand < required.quantity {
                info!(
                    recipe = recipe.name(),
                    ingredient = %required.ingredient,
                    needed = required.quantity,
                    on_hand,
                    "not enough stock"
                );
                if on_hand == 0 {
                    return CookOutcome::MissingIngredient {
                        recipe: recipe.name().to_string(),
                        ingredient: required.ingredient.name().to_string(),
                    };
                }
                return CookOutcome::InsufficientQuantity {
                    recipe: recipe.name().to_string(),
                    ingredient: required.ingredient.name().to_string(),
                    needed: required.quantity,
                    on_hand,
                };
            }
        }

        let consumed = match self.consumption {
            ConsumptionMode::Transactional => self.pantry.try_consume_all(recipe.ingredients()),
            ConsumptionMode::Sequential => recipe
                .ingredients()
                .iter()
                .all(|required| self.pantry.consume(&required.ingredient, required.quantity)),
        };
        if !consumed {
            info!(recipe = recipe.name(), mode = self.consumption.as_str(), "consumption refused");
            return CookOutcome::NotEnoughIngredients { recipe: recipe.name().to_string() };
        }

        let sample: f64 = self.rng.gen();
        debug!(
            recipe = recipe.name(),
            sample,
            success_rate = recipe.success_rate(),
            "drew outcome"
        );
        if sample < recipe.success_rate() {
            info!(recipe = recipe.name(), "cooking succeeded");
            CookOutcome::Succeeded { recipe: recipe.name().to_string() }
        } else {
            info!(recipe = recipe.name(), "cooking failed");
            CookOutcome::Failed { recipe: recipe.name().to_string() }
        }
    }
}
