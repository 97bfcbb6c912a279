/// Globe distance game - guess the hidden country by distance
pub mod game;
pub mod renderer;
pub mod state;

pub use game::GlobeGame;
pub use state::{DistanceGame, GameState, GeoPoint, GuessRecord, GuessResult, Marker};
