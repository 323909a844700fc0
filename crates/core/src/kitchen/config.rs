use serde::{Deserialize, Serialize};

use crate::cook::ConsumptionMode;
use crate::kitchen::KitchenLayout;

/// Serializable configuration describing a kitchen.
///
/// This lives at `.kitchen/kitchen.json` in the kitchen root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// Human-friendly kitchen name.
    pub name: String,
    /// Optional description / notes.
    pub description: Option<String>,
    /// Config format version.
    pub config_version: String,
    /// Recipe directory (relative to the root, or absolute).
    pub recipes_dir: String,
    /// Pantry stock file (relative to the root, or absolute).
    pub pantry_path: String,
    #[serde(default)]
    pub consumption: ConsumptionMode,
    /// Fixed seed for the outcome draw; entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl KitchenConfig {
    pub fn new(
        name: impl Into<String>,
        recipes_dir: impl Into<String>,
        pantry_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            config_version: "0.1.0".to_string(),
            recipes_dir: recipes_dir.into(),
            pantry_path: pantry_path.into(),
            consumption: ConsumptionMode::default(),
            seed: None,
        }
    }

    /// Config pointing at the layout's default recipe dir and pantry file.
    pub fn for_layout(name: impl Into<String>, layout: &KitchenLayout) -> Self {
        Self::new(
            name,
            layout.relative_string(&layout.recipes_dir),
            layout.relative_string(&layout.pantry_path),
        )
    }
}
