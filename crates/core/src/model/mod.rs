//! Kitchen data model: ingredients and recipes.
//!
//! Both types are immutable once built. Ingredient identity is case-insensitive
//! on name and type; recipes keep their required ingredients in source order so
//! stock checks and consumption walk them deterministically.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named ingredient with an optional type (e.g., "vegetable", "spice").
///
/// Equality and hashing use a lower-cased `(name, type)` key, so `Water` and
/// `water` of the same type are the same ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "IngredientRepr", into = "IngredientRepr")]
pub struct Ingredient {
    name: String,
    kind: String,
    key: (String, String),
}

#[derive(Serialize, Deserialize)]
struct IngredientRepr {
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
}

impl From<IngredientRepr> for Ingredient {
    fn from(repr: IngredientRepr) -> Self {
        Ingredient::new(repr.name, repr.kind)
    }
}

impl From<Ingredient> for IngredientRepr {
    fn from(ingredient: Ingredient) -> Self {
        IngredientRepr { name: ingredient.name, kind: ingredient.kind }
    }
}

impl Ingredient {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        let name = name.into();
        let kind = kind.into();
        let key = (name.to_lowercase(), kind.to_lowercase());
        Self { name, kind, key }
    }

    /// Ingredient with an empty type, as synthesized for names the pantry does not know.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ingredient type; empty when unknown.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Lower-cased name, the part of the key pantries look stock up by.
    pub fn normalized_name(&self) -> &str {
        &self.key.0
    }

    /// Case-insensitive comparison against a bare name (type is ignored).
    pub fn matches_name(&self, name: &str) -> bool {
        self.key.0 == name.to_lowercase()
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One ingredient requirement of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredIngredient {
    pub ingredient: Ingredient,
    pub quantity: u32,
}

impl RequiredIngredient {
    pub fn new(ingredient: Ingredient, quantity: u32) -> Self {
        Self { ingredient, quantity }
    }
}

/// Raised when a recipe lists the same ingredient twice.
///
/// `position` is the index of the second occurrence in the ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Ingredient '{ingredient}' is listed more than once in recipe '{recipe}'")]
pub struct DuplicateIngredient {
    pub recipe: String,
    pub ingredient: String,
    pub position: usize,
}

/// A named bundle of ingredient requirements plus the odds of cooking it well.
///
/// `success_rate` is intended to lie in `[0, 1]` but is not validated here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<RequiredIngredient>,
    success_rate: f64,
}

impl Recipe {
    /// Build a recipe, rejecting duplicate ingredients. Order of `ingredients` is kept.
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<RequiredIngredient>,
        success_rate: f64,
    ) -> Result<Self, DuplicateIngredient> {
        let name = name.into();
        for (idx, required) in ingredients.iter().enumerate() {
            if ingredients[..idx].iter().any(|earlier| earlier.ingredient == required.ingredient) {
                return Err(DuplicateIngredient {
                    recipe: name,
                    ingredient: required.ingredient.name().to_string(),
                    position: idx,
                });
            }
        }
        Ok(Self { name, ingredients, success_rate })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[RequiredIngredient] {
        &self.ingredients
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    /// Required quantity for `ingredient`, if the recipe uses it.
    pub fn quantity_of(&self, ingredient: &Ingredient) -> Option<u32> {
        self.ingredients.iter().find(|r| &r.ingredient == ingredient).map(|r| r.quantity)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Ordinal (byte-wise, case-sensitive) ordering by recipe name.
    pub fn cmp_by_name(&self, other: &Recipe) -> Ordering {
        self.name.cmp(&other.name)
    }
}
