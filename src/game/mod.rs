//! Match state: players, phases, the supply, movement primitives and
//! scoring.

pub mod player;
pub mod score;
pub mod setup;
pub mod state;

pub use player::Player;
pub use score::Collection;
pub use state::{GainDest, Game, GameBuilder, GameOutcome, Phase, HAND_SIZE};
