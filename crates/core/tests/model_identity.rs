use std::cmp::Ordering;
use std::collections::HashSet;

use meal_core::model::{Ingredient, Recipe, RequiredIngredient};

#[test]
fn ingredients_compare_case_insensitively_on_name_and_type() {
    let a = Ingredient::new("Water", "Liquid");
    let b = Ingredient::new("WATER", "liquid");
    let c = Ingredient::new("water", "");

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Ingredient> = [a.clone(), b, c].into_iter().collect();
    assert_eq!(set.len(), 2, "equal ingredients must hash alike");

    // The original spelling is kept for display.
    assert_eq!(a.name(), "Water");
    assert_eq!(a.to_string(), "Water");
    assert!(a.matches_name("wAtEr"));
}

#[test]
fn ingredient_serializes_type_field() {
    let json = serde_json::to_value(Ingredient::new("Salt", "spice")).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Salt", "type": "spice" }));

    let parsed: Ingredient = serde_json::from_str(r#"{"name":"SALT"}"#).unwrap();
    assert_eq!(parsed, Ingredient::untyped("salt"));
    assert_eq!(parsed.kind(), "");
}

#[test]
fn recipe_keeps_ingredient_order_and_quantities() {
    let recipe = Recipe::new(
        "Soup",
        vec![
            RequiredIngredient::new(Ingredient::untyped("Water"), 2),
            RequiredIngredient::new(Ingredient::untyped("Salt"), 1),
        ],
        0.8,
    )
    .expect("recipe");

    let names: Vec<&str> = recipe.ingredients().iter().map(|r| r.ingredient.name()).collect();
    assert_eq!(names, ["Water", "Salt"]);
    assert_eq!(recipe.quantity_of(&Ingredient::untyped("salt")), Some(1));
    assert_eq!(recipe.quantity_of(&Ingredient::untyped("Pepper")), None);
    assert!(recipe.matches_name("SOUP"));
}

#[test]
fn recipe_rejects_duplicate_ingredients() {
    let err = Recipe::new(
        "Soup",
        vec![
            RequiredIngredient::new(Ingredient::untyped("Water"), 2),
            RequiredIngredient::new(Ingredient::untyped("Salt"), 1),
            RequiredIngredient::new(Ingredient::untyped("water"), 3),
        ],
        0.8,
    )
    .unwrap_err();

    assert_eq!(err.ingredient, "water");
    assert_eq!(err.position, 2);
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn recipes_order_ordinally_by_name() {
    let make = |name: &str| Recipe::new(name, vec![], 1.0).unwrap();
    let bread = make("Bread");
    let apple = make("apple");

    // Ordinal: uppercase sorts before lowercase.
    assert_eq!(bread.cmp_by_name(&apple), Ordering::Less);
    assert_eq!(apple.cmp_by_name(&make("apple")), Ordering::Equal);
}
