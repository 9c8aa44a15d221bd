//! Error taxonomy for the game core.
//!
//! Four conditions cover every failure the engine can surface:
//!
//! - [`GameError::OutOfSupply`]: a gain was requested for an empty or
//!   unknown supply pile. Validated before any state change.
//! - [`GameError::IllegalMove`]: a play or buy outside its legal phase,
//!   with insufficient counters, or naming a card that is not in the
//!   required zone. Validated before any state change.
//! - [`GameError::ConstraintViolation`]: a strategy answered a choice
//!   request with a value outside the stated constraints. This is a
//!   programming error in the strategy; the core never re-prompts.
//! - [`GameError::IllegalEffectState`]: a step inside an effect became
//!   invalid mid-resolution (for example duplicating a card that has
//!   since moved). Completed movement primitives stay applied; there is
//!   no rollback.

use thiserror::Error;

/// Errors surfaced by game operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A gain was requested from an empty or unknown supply pile.
    #[error("supply pile for {kind} is empty or not part of this game")]
    OutOfSupply {
        /// Name of the requested card kind.
        kind: String,
    },

    /// An operation was attempted outside its legal phase or preconditions.
    #[error("illegal move: {reason}")]
    IllegalMove {
        /// What was violated.
        reason: String,
    },

    /// A strategy's answer violated the constraints of the choice request.
    #[error("strategy answer violated choice constraints: {reason}")]
    ConstraintViolation {
        /// Which constraint was violated.
        reason: String,
    },

    /// An effect's own step became invalid mid-resolution.
    #[error("effect reached an illegal state: {reason}")]
    IllegalEffectState {
        /// What became invalid.
        reason: String,
    },
}

impl GameError {
    /// An out-of-supply error for the named kind.
    pub fn out_of_supply(kind: impl Into<String>) -> Self {
        Self::OutOfSupply { kind: kind.into() }
    }

    /// An illegal-move error with a reason.
    pub fn illegal_move(reason: impl Into<String>) -> Self {
        Self::IllegalMove {
            reason: reason.into(),
        }
    }

    /// A constraint-violation error with a reason.
    pub fn constraint(reason: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            reason: reason.into(),
        }
    }

    /// An illegal-effect-state error with a reason.
    pub fn effect_state(reason: impl Into<String>) -> Self {
        Self::IllegalEffectState {
            reason: reason.into(),
        }
    }
}
