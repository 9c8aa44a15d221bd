//! Effect execution: the engine's top-level moves and the context card
//! routines run against.

pub mod context;
pub mod engine;

pub use context::EffectContext;
pub use engine::Engine;
