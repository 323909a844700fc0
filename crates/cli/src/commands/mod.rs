pub mod cook;
pub mod kitchen;
pub mod pantry;
pub mod recipes;
pub mod util;

pub use cook::*;
pub use kitchen::*;
pub use pantry::*;
pub use recipes::*;
pub use util::*;
