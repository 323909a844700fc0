use std::fs;
use std::path::Path;

use meal_planner::{canonicalize_or_current, infer_kitchen_name};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let result = canonicalize_or_current(".").expect("canonicalize");
    assert_eq!(result, std::env::current_dir().expect("cwd"));
}

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");

    let result = canonicalize_or_current(&subdir.to_string_lossy()).expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));
}

#[test]
fn canonicalize_or_current_joins_missing_relative_path_onto_cwd() {
    let result = canonicalize_or_current("no-such-kitchen-dir").expect("resolve");
    assert_eq!(result, std::env::current_dir().expect("cwd").join("no-such-kitchen-dir"));
}

#[test]
fn infer_kitchen_name_uses_last_path_component() {
    assert_eq!(infer_kitchen_name(Path::new("/home/chef/sunday-brunch")), "sunday-brunch");
    assert_eq!(infer_kitchen_name(Path::new("/tmp/kitchen-root")), "kitchen-root");
}

#[test]
fn infer_kitchen_name_falls_back_when_missing() {
    assert_eq!(infer_kitchen_name(Path::new("/")), "unnamed-kitchen");
}

#[test]
fn canonicalize_or_current_keeps_missing_absolute_path() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("not-yet-a-kitchen");

    let result = canonicalize_or_current(&missing.to_string_lossy()).expect("resolve");
    assert_eq!(result, missing);
}
