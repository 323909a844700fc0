//! meal-core
//!
//! Core library for pantry-backed recipe loading and cooking.
//!
//! This crate defines the kitchen model (ingredients and recipes), the pantry
//! collaborator contract, the recipe catalog and its text loader, the cooking
//! orchestrator, and the on-disk kitchen layout/config used by frontends.
//!
//! All decision logic lives here so it is fully testable and reusable from
//! multiple frontends (CLI, tests, embedding applications).

pub mod catalog;
pub mod cook;
pub mod kitchen;
pub mod model;
pub mod pantry;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
