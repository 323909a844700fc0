use anyhow::{anyhow, Result};
use meal_core::cook::{ConsumptionMode, CookOutcome};
use meal_core::kitchen::KitchenOptions;
use meal_core::pantry::PantryStock;
use serde::Serialize;
use tracing::info;

use crate::commands::{open_kitchen, print_stock};

/// Everything one cooking session produced.
#[derive(Debug, Serialize)]
pub struct CookReport {
    pub kitchen: String,
    pub consumption: String,
    pub outcomes: Vec<CookOutcome>,
    /// Stock left after the session. The pantry file itself is never rewritten.
    pub pantry: PantryStock,
}

/// Cook each recipe in order against the kitchen's pantry, in one session.
///
/// Not-found and shortage outcomes are reported, not treated as errors.
pub fn cook_command(
    root: &str,
    recipes: &[String],
    seed: Option<u64>,
    sequential: bool,
    json: bool,
) -> Result<CookReport> {
    if recipes.is_empty() {
        return Err(anyhow!("Specify at least one recipe to cook"));
    }

    let options = KitchenOptions {
        seed,
        consumption: sequential.then_some(ConsumptionMode::Sequential),
    };
    let mut ctx = open_kitchen(root, options)?;
    info!(kitchen = %ctx.config.name, recipes = recipes.len(), "starting cooking session");

    let outcomes: Vec<CookOutcome> =
        recipes.iter().map(|name| ctx.cook.cook_meal(name)).collect();
    let report = CookReport {
        kitchen: ctx.config.name.clone(),
        consumption: ctx.cook.consumption().as_str().to_string(),
        outcomes,
        pantry: ctx.cook.pantry().to_stock(),
    };
    let succeeded = report.outcomes.iter().filter(|o| o.is_success()).count();
    info!(attempted = report.outcomes.len(), succeeded, "cooking session finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report);
    }

    for (name, outcome) in recipes.iter().zip(&report.outcomes) {
        println!("{name}: {outcome}");
    }
    println!();
    println!("Remaining stock:");
    print_stock(&report.pantry);

    Ok(report)
}
