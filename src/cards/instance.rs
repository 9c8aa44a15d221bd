//! Card instances - individually tracked physical cards.
//!
//! A `CardInstance` is one physical card: a unique identity plus a
//! reference to its kind. All instances are created during supply
//! initialization and thereafter only ever *moved* between zones by the
//! ledger; the instance itself never changes.

use serde::{Deserialize, Serialize};

use super::CardTypeId;

/// Unique identifier for one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// One physical card: identity plus kind.
///
/// Where the card currently is lives in the
/// [`Ledger`](crate::zones::Ledger), not here, so an instance can never
/// disagree with the ledger about its own location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique identity.
    pub id: InstanceId,
    /// The kind this card is a copy of.
    pub kind: CardTypeId,
}

impl CardInstance {
    /// Create an instance of a kind.
    #[must_use]
    pub const fn new(id: InstanceId, kind: CardTypeId) -> Self {
        Self { id, kind }
    }
}
