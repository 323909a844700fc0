use anyhow::Result;
use meal_core::kitchen::{load_kitchen_config, load_pantry};
use meal_core::pantry::PantryStock;

use crate::commands::kitchen_layout;

/// Show the kitchen's pantry stock.
pub fn show_pantry_command(root: &str, json: bool) -> Result<()> {
    let layout = kitchen_layout(root)?;
    let config = load_kitchen_config(&layout)?;
    let (pantry_path, pantry) = load_pantry(&layout, &config)?;
    let stock = pantry.to_stock();

    if json {
        println!("{}", serde_json::to_string_pretty(&stock)?);
        return Ok(());
    }

    println!("Pantry: {}", pantry_path.display());
    print_stock(&stock);
    Ok(())
}

/// Print stock entries as an indented list.
pub fn print_stock(stock: &PantryStock) {
    println!("Ingredients ({}):", stock.ingredients.len());
    if stock.ingredients.is_empty() {
        println!("  (none)");
        return;
    }

    for entry in &stock.ingredients {
        let kind_display = if entry.kind.is_empty() { "-" } else { entry.kind.as_str() };
        println!("  - {} [type: {}] x{}", entry.name, kind_display, entry.quantity);
    }
}
