//! # provincial
//!
//! A deck-building card game core: turn state machine, single-owner
//! zone ledger, trigger-driven card effects, and a synchronous choice
//! protocol.
//!
//! ## Design Principles
//!
//! 1. **Conservation by construction**: every card instance lives in
//!    exactly one zone of the ledger, which has no remove operation.
//!    Cards move; they never appear or vanish.
//!
//! 2. **Data-driven catalog**: a card kind is tags, a cost rule, yields,
//!    a victory rule, and optional trigger routines. New cards are
//!    registry entries, not engine changes.
//!
//! 3. **Synchronous choices**: effects suspend at the exact point a
//!    decision is needed and resume with the strategy's answer. Answers
//!    are validated against pre-computed candidates.
//!
//! ## Modules
//!
//! - `core`: player IDs, per-seat storage, RNG, the error taxonomy
//! - `zones`: zone names and the ownership ledger
//! - `cards`: kinds, instances, the registry, the standard catalog
//! - `game`: match state, phases, supply, movement primitives, scoring
//! - `effects`: the turn engine and the effect execution context
//! - `choice`: choice queries, answers, and the `Strategy` trait

pub mod cards;
pub mod choice;
pub mod core;
pub mod effects;
pub mod game;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, PlayerId, PlayerMap};

pub use crate::zones::{Ledger, Zone};

pub use crate::cards::{
    base_set, CardInstance, CardKind, CardRegistry, CardTypeId, CostRule, Expansion, InstanceId,
    Tag, VictoryRule, Yields,
};

pub use crate::game::{Collection, GainDest, Game, GameBuilder, GameOutcome, Phase};

pub use crate::effects::{EffectContext, Engine};

pub use crate::choice::{
    Answer, CardChoice, CardQuery, CardsQuery, ChoiceSource, Decliner, FirstPick, Scripted,
    Strategy,
};
