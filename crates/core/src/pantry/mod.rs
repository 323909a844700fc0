//! Pantry collaborator: the stock the cook checks and consumes.
//!
//! The cook only depends on the [`Pantry`] trait. [`InMemoryPantry`] is the
//! stock keeper used by the CLI and tests; its contents can be seeded from a
//! JSON or YAML stock file (see [`PantryStock`]).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{Ingredient, RequiredIngredient};

/// Error type for pantry stock operations.
#[derive(Debug, Error)]
pub enum PantryError {
    #[error("Failed to read pantry stock at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pantry stock JSON at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse pantry stock YAML at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The same ingredient name (case-insensitive) appears twice in a stock file.
    #[error("Ingredient '{name}' is stocked more than once")]
    DuplicateEntry { name: String },

    #[error("Stock of '{name}' would overflow ({current} + {added})")]
    StockOverflow { name: String, current: u32, added: u32 },
}

/// Convenience result type for pantry operations.
pub type PantryResult<T> = Result<T, PantryError>;

/// Stock-keeping contract consumed by the recipe loader and the cook.
pub trait Pantry {
    /// Known ingredients, in the pantry's own order.
    fn ingredients(&self) -> impl Iterator<Item = &Ingredient>;

    /// Amount on hand, looked up by name; unknown ingredients report zero.
    fn quantity(&self, ingredient: &Ingredient) -> u32;

    /// Debit `amount` of `ingredient`. Returns `false` (and leaves stock untouched)
    /// when less than `amount` is on hand.
    fn consume(&mut self, ingredient: &Ingredient, amount: u32) -> bool;

    /// First known ingredient whose name matches case-insensitively.
    fn find_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients().find(|ingredient| ingredient.matches_name(name))
    }

    /// Debit every requirement or none of them. Returns `false` with stock untouched
    /// when any requirement cannot be met; repeated requirements for the same
    /// ingredient count together.
    fn try_consume_all(&mut self, needed: &[RequiredIngredient]) -> bool;
}

impl<P: Pantry + ?Sized> Pantry for &mut P {
    fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        (**self).ingredients()
    }

    fn quantity(&self, ingredient: &Ingredient) -> u32 {
        (**self).quantity(ingredient)
    }

    fn consume(&mut self, ingredient: &Ingredient, amount: u32) -> bool {
        (**self).consume(ingredient, amount)
    }

    fn find_by_name(&self, name: &str) -> Option<&Ingredient> {
        (**self).find_by_name(name)
    }

    fn try_consume_all(&mut self, needed: &[RequiredIngredient]) -> bool {
        (**self).try_consume_all(needed)
    }
}

/// One line of a pantry stock file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub quantity: u32,
}

/// Serializable pantry contents.
///
/// Lives (by default) at `pantry.json` in the kitchen root:
/// `{"ingredients": [{"name": "Water", "type": "liquid", "quantity": 4}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryStock {
    #[serde(default)]
    pub ingredients: Vec<StockEntry>,
}

impl PantryStock {
    /// Read a stock file; `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> PantryResult<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .map_err(|source| PantryError::Io { path: path.to_path_buf(), source })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&body)
                .map_err(|source| PantryError::Yaml { path: path.to_path_buf(), source }),
            _ => serde_json::from_str(&body)
                .map_err(|source| PantryError::Json { path: path.to_path_buf(), source }),
        }
    }
}

/// Insertion-ordered, in-memory stock.
///
/// Stock is keyed by lower-cased name alone: an ingredient's type never hides
/// stock filed under the same name, and the first entry stocked under a name
/// keeps its identity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPantry {
    entries: Vec<(Ingredient, u32)>,
    index: HashMap<String, usize>,
}

impl InMemoryPantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pantry from stock-file contents, rejecting entries that repeat a name.
    pub fn from_stock(stock: PantryStock) -> PantryResult<Self> {
        let mut pantry = Self::new();
        for entry in stock.ingredients {
            let ingredient = Ingredient::new(entry.name, entry.kind);
            if pantry.position(&ingredient).is_some() {
                return Err(PantryError::DuplicateEntry { name: ingredient.name().to_string() });
            }
            pantry.stock(ingredient, entry.quantity)?;
        }
        Ok(pantry)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PantryResult<Self> {
        Self::from_stock(PantryStock::from_path(path)?)
    }

    /// Add `amount` of `ingredient`, registering it if its name is unknown.
    /// Returns the new quantity.
    pub fn stock(&mut self, ingredient: Ingredient, amount: u32) -> PantryResult<u32> {
        match self.position(&ingredient) {
            Some(idx) => {
                let (known, current) = &mut self.entries[idx];
                let updated = current.checked_add(amount).ok_or_else(|| {
                    PantryError::StockOverflow {
                        name: known.name().to_string(),
                        current: *current,
                        added: amount,
                    }
                })?;
                *current = updated;
                Ok(updated)
            }
            None => {
                self.index.insert(ingredient.normalized_name().to_string(), self.entries.len());
                self.entries.push((ingredient, amount));
                Ok(amount)
            }
        }
    }

    /// Snapshot of the current stock in insertion order.
    pub fn to_stock(&self) -> PantryStock {
        PantryStock {
            ingredients: self
                .entries
                .iter()
                .map(|(ingredient, quantity)| StockEntry {
                    name: ingredient.name().to_string(),
                    kind: ingredient.kind().to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, ingredient: &Ingredient) -> Option<usize> {
        self.index.get(ingredient.normalized_name()).copied()
    }
}

impl Pantry for InMemoryPantry {
    fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.entries.iter().map(|(ingredient, _)| ingredient)
    }

    fn quantity(&self, ingredient: &Ingredient) -> u32 {
        self.position(ingredient).map(|idx| self.entries[idx].1).unwrap_or(0)
    }

    fn consume(&mut self, ingredient: &Ingredient, amount: u32) -> bool {
        let Some(idx) = self.position(ingredient) else {
            return amount == 0;
        };
        let current = &mut self.entries[idx].1;
        let Some(remaining) = current.checked_sub(amount) else {
            return false;
        };
        *current = remaining;
        debug!(ingredient = %ingredient, amount, remaining, "consumed stock");
        true
    }

    fn try_consume_all(&mut self, needed: &[RequiredIngredient]) -> bool {
        // Requirements naming the same stock are summed before anything is checked.
        let mut totals: HashMap<usize, u32> = HashMap::new();
        for required in needed {
            match self.position(&required.ingredient) {
                Some(idx) => {
                    let total = totals.entry(idx).or_insert(0);
                    let Some(sum) = total.checked_add(required.quantity) else {
                        return false;
                    };
                    *total = sum;
                }
                None if required.quantity == 0 => {}
                None => return false,
            }
        }

        let mut debits = Vec::with_capacity(totals.len());
        for (idx, total) in totals {
            match self.entries[idx].1.checked_sub(total) {
                Some(remaining) => debits.push((idx, remaining)),
                None => return false,
            }
        }
        for (idx, remaining) in debits {
            self.entries[idx].1 = remaining;
        }
        debug!(ingredients = needed.len(), "consumed stock in one batch");
        true
    }
}
