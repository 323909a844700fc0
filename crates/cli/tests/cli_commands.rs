use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use meal_core::kitchen::KitchenLayout;
use predicates::prelude::*;
use tempfile::tempdir;

fn init_kitchen(root: &std::path::Path) {
    cargo_bin_cmd!("meal-planner")
        .arg("init-kitchen")
        .arg("--root")
        .arg(root)
        .arg("--name")
        .arg("CliKitchen")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized kitchen:"));
}

/// init-kitchen without an explicit --root should use the current directory.
#[test]
fn init_kitchen_uses_default_root_when_not_provided() {
    let dir = tempdir().expect("tempdir");

    cargo_bin_cmd!("meal-planner").current_dir(dir.path()).arg("init-kitchen").assert().success();

    let layout = KitchenLayout::new(dir.path());
    assert!(
        layout.config_path.exists(),
        "kitchen config should exist at {}",
        layout.config_path.display()
    );
    assert!(layout.pantry_path.exists());
}

/// kitchen-info should fail (non-zero exit) if no kitchen config exists.
#[test]
fn kitchen_info_fails_when_config_missing() {
    let dir = tempdir().expect("tempdir");

    cargo_bin_cmd!("meal-planner")
        .arg("kitchen-info")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read kitchen config"));
}

#[test]
fn kitchen_info_json_reports_counts() {
    let dir = tempdir().expect("tempdir");
    init_kitchen(dir.path());
    fs::write(dir.path().join("recipes/tea.txt"), "Tea 1.0\nWater 1\n").unwrap();
    fs::write(
        dir.path().join("pantry.json"),
        r#"{"ingredients":[{"name":"Water","type":"liquid","quantity":3}]}"#,
    )
    .unwrap();

    let output = cargo_bin_cmd!("meal-planner")
        .arg("kitchen-info")
        .arg("--root")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let body: serde_json::Value = serde_json::from_slice(&output).expect("kitchen-info json");
    assert_eq!(body["name"], "CliKitchen");
    assert_eq!(body["recipe_count"], 1);
    assert_eq!(body["pantry_ingredients"], 1);
    assert_eq!(body["consumption"], "transactional");
    assert!(body.get("pantry_error").is_none());
}

#[test]
fn cook_prints_outcome_messages_and_remaining_stock() {
    let dir = tempdir().expect("tempdir");
    init_kitchen(dir.path());
    fs::write(
        dir.path().join("pantry.json"),
        concat!(
            r#"{"ingredients":[{"name":"Water","type":"liquid","quantity":3},"#,
            r#"{"name":"Leaves","quantity":1}]}"#
        ),
    )
    .unwrap();
    fs::write(dir.path().join("recipes/tea.txt"), "Tea 1.0\nWater 1\nLeaves 1\n").unwrap();
    fs::write(dir.path().join("recipes/toast.txt"), "Toast 0.0\nWater 1\n").unwrap();

    cargo_bin_cmd!("meal-planner")
        .arg("cook")
        .arg("--root")
        .arg(dir.path())
        .args(["Tea", "Toast", "Tea", "Pie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea: Cooking 'Tea' succeeded!"))
        .stdout(predicate::str::contains("Toast: Cooking 'Toast' failed. Ingredients burned..."))
        .stdout(predicate::str::contains("Tea: Missing ingredient: Leaves"))
        .stdout(predicate::str::contains("Pie: Recipe not found."))
        .stdout(predicate::str::contains("Water [type: liquid] x1"));
}

#[test]
fn cook_json_reports_insufficient_quantity() {
    let dir = tempdir().expect("tempdir");
    init_kitchen(dir.path());
    fs::write(
        dir.path().join("pantry.json"),
        r#"{"ingredients":[{"name":"Flour","type":"grain","quantity":1}]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("recipes/bread.txt"), "Bread 0.5\nFlour 3\n").unwrap();

    let output = cargo_bin_cmd!("meal-planner")
        .arg("cook")
        .arg("--root")
        .arg(dir.path())
        .arg("--json")
        .arg("--seed")
        .arg("42")
        .arg("bread")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let body: serde_json::Value = serde_json::from_slice(&output).expect("cook json");
    let outcome = &body["outcomes"][0];
    assert_eq!(outcome["outcome"], "insufficient_quantity");
    assert_eq!(outcome["recipe"], "Bread");
    assert_eq!(outcome["needed"], 3);
    assert_eq!(outcome["on_hand"], 1);
    assert_eq!(body["pantry"]["ingredients"][0]["quantity"], 1);
}

#[test]
fn cook_requires_a_recipe_argument() {
    let dir = tempdir().expect("tempdir");
    init_kitchen(dir.path());

    cargo_bin_cmd!("meal-planner").arg("cook").arg("--root").arg(dir.path()).assert().failure();
}

#[test]
fn validate_recipes_reports_failures_with_nonzero_exit() {
    let dir = tempdir().expect("tempdir");
    init_kitchen(dir.path());
    fs::write(dir.path().join("recipes/good.txt"), "Good 0.9\nWater 1\n").unwrap();
    fs::write(dir.path().join("recipes/short.txt"), "Short 0.9\n").unwrap();

    cargo_bin_cmd!("meal-planner")
        .arg("validate-recipes")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("OK   "))
        .stdout(predicate::str::contains("FAIL "))
        .stdout(predicate::str::contains("1 valid, 1 invalid"));
}

#[test]
fn list_recipes_shows_unknown_ingredients_as_untyped() {
    let dir = tempdir().expect("tempdir");
    init_kitchen(dir.path());
    fs::write(dir.path().join("recipes/mystery.txt"), "Mystery 0.3\nUnobtainium 2\n").unwrap();

    cargo_bin_cmd!("meal-planner")
        .arg("list-recipes")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipes (1):"))
        .stdout(predicate::str::contains("Unobtainium x2"));
}

#[test]
fn kitchen_info_reports_an_unreadable_pantry() {
    let dir = tempdir().expect("tempdir");
    init_kitchen(dir.path());
    fs::write(dir.path().join("pantry.json"), "not-json").unwrap();

    cargo_bin_cmd!("meal-planner")
        .arg("kitchen-info")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pantry: failed to load (Failed to load pantry at"))
        .stdout(predicate::str::contains("Recipes: failed to load (Recipes need a readable pantry)"));

    let output = cargo_bin_cmd!("meal-planner")
        .arg("kitchen-info")
        .arg("--root")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let body: serde_json::Value = serde_json::from_slice(&output).expect("kitchen-info json");
    assert_eq!(body["pantry_ingredients"], 0);
    assert!(body["pantry_error"].as_str().unwrap().contains("Failed to parse pantry stock JSON"));
    assert!(body.get("recipes_error").is_some());
}
