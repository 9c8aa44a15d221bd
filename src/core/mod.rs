//! Core identifiers, per-seat storage, RNG, and the error taxonomy.

pub mod error;
pub mod player;
pub mod rng;

pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
