use meal_core::cook::ConsumptionMode;
use meal_core::kitchen::{
    collect_recipe_files, load_kitchen_config, KitchenConfig, KitchenContext, KitchenLayout,
    KitchenOptions,
};
use meal_core::model::Ingredient;
use meal_core::pantry::Pantry;
use tempfile::tempdir;

fn write_kitchen(root: &std::path::Path, config: &KitchenConfig) -> KitchenLayout {
    let layout = KitchenLayout::new(root);
    std::fs::create_dir_all(&layout.meta_dir).unwrap();
    std::fs::create_dir_all(&layout.recipes_dir).unwrap();
    std::fs::write(&layout.config_path, serde_json::to_string_pretty(config).unwrap()).unwrap();
    std::fs::write(
        &layout.pantry_path,
        concat!(
            r#"{"ingredients":[{"name":"Water","type":"liquid","quantity":6},"#,
            r#"{"name":"Salt","type":"spice","quantity":2}]}"#
        ),
    )
    .unwrap();
    layout
}

#[test]
fn layout_paths_hang_off_the_root() {
    let root = tempdir().unwrap();
    let layout = KitchenLayout::new(root.path());

    assert!(layout.config_path.ends_with(".kitchen/kitchen.json"));
    assert_eq!(layout.relative_string(&layout.recipes_dir), "recipes");
    assert_eq!(layout.relative_string(&layout.pantry_path), "pantry.json");
    assert_eq!(layout.resolve("recipes"), layout.recipes_dir);

    let absolute = root.path().join("elsewhere/pantry.yaml");
    assert_eq!(layout.resolve(&absolute.to_string_lossy()), absolute);
}

#[test]
fn config_defaults_consumption_and_omits_missing_seed() {
    let layout = KitchenLayout::new("/tmp/kitchen");
    let config = KitchenConfig::for_layout("Home", &layout);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["consumption"], "transactional");
    assert!(json.get("seed").is_none());

    let parsed: KitchenConfig = serde_json::from_str(
        concat!(
            r#"{"name":"Old","description":null,"config_version":"0.1.0","#,
            r#""recipes_dir":"r","pantry_path":"p.json"}"#
        ),
    )
    .unwrap();
    assert_eq!(parsed.consumption, ConsumptionMode::Transactional);
    assert_eq!(parsed.seed, None);
}

#[test]
fn context_loads_pantry_and_sorted_recipe_files() {
    let root = tempdir().unwrap();
    let layout = KitchenLayout::new(root.path());
    let mut config = KitchenConfig::for_layout("Home", &layout);
    config.seed = Some(42);
    write_kitchen(root.path(), &config);

    std::fs::write(layout.recipes_dir.join("b_soup.txt"), "Soup 1.0\nwater 2\nSalt 1\n").unwrap();
    std::fs::write(layout.recipes_dir.join("a_tea.recipe"), "Tea 1.0\nWater 1\n").unwrap();
    std::fs::write(layout.recipes_dir.join("notes.md"), "not a recipe").unwrap();

    let mut ctx = KitchenContext::from_root(root.path()).expect("context");
    assert_eq!(ctx.config.name, "Home");
    assert_eq!(ctx.recipe_files.len(), 2);

    let names: Vec<&str> = ctx.cook.recipe_book().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["Tea", "Soup"]);

    // Recipe ingredients resolved to the pantry's typed identity.
    let soup = ctx.cook.recipe_book().find("soup").unwrap();
    assert_eq!(soup.ingredients()[0].ingredient.kind(), "liquid");

    assert!(ctx.cook.cook_meal("Soup").is_success());
    assert_eq!(ctx.cook.pantry().quantity(&Ingredient::new("Water", "liquid")), 4);
}

#[test]
fn options_override_config() {
    let root = tempdir().unwrap();
    let layout = KitchenLayout::new(root.path());
    let config = KitchenConfig::for_layout("Home", &layout);
    write_kitchen(root.path(), &config);

    let ctx = KitchenContext::open(
        root.path(),
        KitchenOptions { seed: Some(1), consumption: Some(ConsumptionMode::Sequential) },
    )
    .unwrap();
    assert_eq!(ctx.cook.consumption(), ConsumptionMode::Sequential);
    assert!(ctx.cook.recipe_book().is_empty());
}

#[test]
fn context_reports_missing_config_and_bad_recipes() {
    let root = tempdir().unwrap();
    let err = KitchenContext::from_root(root.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to read kitchen config"));

    let layout = KitchenLayout::new(root.path());
    write_kitchen(root.path(), &KitchenConfig::for_layout("Home", &layout));
    std::fs::write(layout.recipes_dir.join("broken.txt"), "Broken 0.5\n").unwrap();

    let err = KitchenContext::from_root(root.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to load recipes"), "unexpected error: {err}");
    assert!(format!("{err:#}").contains("broken.txt"));
}

#[test]
fn config_parse_errors_are_reported() {
    let root = tempdir().unwrap();
    let layout = KitchenLayout::new(root.path());
    std::fs::create_dir_all(&layout.meta_dir).unwrap();
    std::fs::write(&layout.config_path, "not-json").unwrap();

    let err = load_kitchen_config(&layout).unwrap_err();
    assert!(err.to_string().contains("Failed to parse kitchen config JSON"));
}

#[test]
fn collect_recipe_files_handles_missing_dir() {
    let root = tempdir().unwrap();
    let files = collect_recipe_files(&root.path().join("nope")).unwrap();
    assert!(files.is_empty());
}
