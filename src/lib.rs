pub mod cli;
pub mod config;
pub mod core;
pub mod games;
pub mod geo;
pub mod headless;

// Re-export for convenience
pub use crate::core::game::{Context, Game};
pub use crate::games::globe::{DistanceGame, GuessResult};
pub use crate::geo::CountryCatalog;
