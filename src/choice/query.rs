//! Constraints and answer types for choice requests.
//!
//! Effects never hand a strategy free rein: every request carries a
//! query describing where candidates come from and what shape the answer
//! must take, and the engine pre-computes the legal candidates before
//! the strategy is consulted. An answer outside the candidates is a
//! [`ConstraintViolation`](crate::core::GameError::ConstraintViolation).

use serde::{Deserialize, Serialize};

use crate::cards::{CardTypeId, InstanceId, Tag};

/// Where the candidates of a card choice come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceSource {
    /// The choosing player's hand.
    Hand,
    /// The shared supply (non-empty piles only).
    Supply,
    /// The choosing player's play area.
    Play,
}

/// Constraints for a zero-or-one card choice.
#[derive(Clone, Copy, Debug)]
pub struct CardQuery {
    /// Candidate source.
    pub source: ChoiceSource,
    /// Maximum acceptable cost, evaluated at request time.
    pub max_cost: Option<u32>,
    /// Restrict candidates to kinds carrying this tag.
    pub tag: Option<Tag>,
    /// Whether declining is a constraint violation.
    pub required: bool,
}

impl CardQuery {
    /// A choice from the player's hand, optional by default.
    #[must_use]
    pub fn from_hand() -> Self {
        Self {
            source: ChoiceSource::Hand,
            max_cost: None,
            tag: None,
            required: false,
        }
    }

    /// A choice from the supply, optional by default.
    #[must_use]
    pub fn from_supply() -> Self {
        Self {
            source: ChoiceSource::Supply,
            max_cost: None,
            tag: None,
            required: false,
        }
    }

    /// Cap the acceptable cost.
    #[must_use]
    pub fn max_cost(mut self, cost: u32) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// Restrict candidates to a tag.
    #[must_use]
    pub fn tagged(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Make declining a constraint violation (when candidates exist).
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Constraints for a multi-card choice.
#[derive(Clone, Copy, Debug)]
pub struct CardsQuery {
    /// Candidate source.
    pub source: ChoiceSource,
    /// Restrict candidates to kinds carrying this tag.
    pub tag: Option<Tag>,
    /// Minimum number of cards to pick (clamped to the candidate count).
    pub min: usize,
    /// Maximum number of cards to pick. `None` means any number.
    pub max: Option<usize>,
}

impl CardsQuery {
    /// Any number of cards from the player's hand.
    #[must_use]
    pub fn from_hand() -> Self {
        Self {
            source: ChoiceSource::Hand,
            tag: None,
            min: 0,
            max: None,
        }
    }

    /// Restrict candidates to a tag.
    #[must_use]
    pub fn tagged(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Require at most `n` cards.
    #[must_use]
    pub fn at_most(mut self, n: usize) -> Self {
        self.max = Some(n);
        self
    }

    /// Require exactly `n` cards (fewer only if fewer candidates exist).
    #[must_use]
    pub fn exactly(mut self, n: usize) -> Self {
        self.min = n;
        self.max = Some(n);
        self
    }
}

/// Answer to a zero-or-one card choice.
///
/// Supply choices name a kind; zone choices name a specific instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardChoice {
    /// A kind picked from the supply.
    Kind(CardTypeId),
    /// A specific instance picked from a zone.
    Instance(InstanceId),
}

impl CardChoice {
    /// The kind, if this is a supply pick.
    #[must_use]
    pub fn as_kind(self) -> Option<CardTypeId> {
        match self {
            CardChoice::Kind(k) => Some(k),
            CardChoice::Instance(_) => None,
        }
    }

    /// The instance, if this is a zone pick.
    #[must_use]
    pub fn as_instance(self) -> Option<InstanceId> {
        match self {
            CardChoice::Instance(i) => Some(i),
            CardChoice::Kind(_) => None,
        }
    }
}
