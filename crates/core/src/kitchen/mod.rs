//! On-disk kitchen: layout, configuration and the loaded context.
//!
//! A kitchen root looks like:
//!
//! ```text
//! <root>/
//!   .kitchen/kitchen.json   KitchenConfig
//!   recipes/*.txt|*.recipe  recipe definitions
//!   pantry.json             PantryStock
//! ```
//!
//! `KitchenLayout` only computes paths; `KitchenContext` does the IO.

pub mod config;
pub mod context;
pub mod layout;

pub use config::*;
pub use context::*;
pub use layout::*;
