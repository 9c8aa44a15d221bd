//! Per-seat player state.
//!
//! A `Player` holds what the zone ledger does not: turn-scoped counters,
//! victory-point tokens, the attack-prevented flag, and the bookkeeping
//! of gains and buys. The player's six zones live in the ledger, keyed
//! by seat.

use serde::{Deserialize, Serialize};

use crate::cards::{CardTypeId, InstanceId};
use crate::core::PlayerId;

/// One seat at the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Display identity; purely cosmetic.
    identity: Option<String>,

    /// Fixed seat position.
    position: PlayerId,

    /// Persistent victory-point token counter.
    pub(crate) vp_tokens: i32,

    /// Actions available this turn.
    pub(crate) actions: u32,
    /// Buys available this turn.
    pub(crate) buys: u32,
    /// Coins available this turn.
    pub(crate) coins: u32,
    /// Potions (premium currency) available this turn.
    pub(crate) potions: u32,

    /// Instances gained this turn, in order of gain.
    pub(crate) gained_this_turn: Vec<InstanceId>,
    /// Instances gained during the previous turn.
    pub(crate) gained_last_turn: Vec<InstanceId>,
    /// Kinds bought this turn, in order of purchase.
    pub(crate) bought_this_turn: Vec<CardTypeId>,

    /// Set while one attack resolves against this player; never
    /// persists across attacks.
    pub(crate) attack_prevented: bool,

    /// Duration cards played this turn; moved to carry-over at cleanup.
    pub(crate) durations_played: Vec<InstanceId>,

    /// Duration cards carried over from this player's most recently
    /// completed turn.
    pub(crate) carried_over: Vec<InstanceId>,
}

impl Player {
    /// Create a player at a seat, with the standard opening counters.
    #[must_use]
    pub fn new(position: PlayerId, identity: Option<String>) -> Self {
        Self {
            identity,
            position,
            vp_tokens: 0,
            actions: 1,
            buys: 1,
            coins: 0,
            potions: 0,
            gained_this_turn: Vec::new(),
            gained_last_turn: Vec::new(),
            bought_this_turn: Vec::new(),
            attack_prevented: false,
            durations_played: Vec::new(),
            carried_over: Vec::new(),
        }
    }

    /// Display identity, if one was given.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Seat position.
    #[must_use]
    pub fn position(&self) -> PlayerId {
        self.position
    }

    /// Victory-point tokens accumulated so far.
    #[must_use]
    pub fn vp_tokens(&self) -> i32 {
        self.vp_tokens
    }

    /// Actions available this turn.
    #[must_use]
    pub fn actions(&self) -> u32 {
        self.actions
    }

    /// Buys available this turn.
    #[must_use]
    pub fn buys(&self) -> u32 {
        self.buys
    }

    /// Coins available this turn.
    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Potions available this turn.
    #[must_use]
    pub fn potions(&self) -> u32 {
        self.potions
    }

    /// Instances gained this turn.
    #[must_use]
    pub fn gained_this_turn(&self) -> &[InstanceId] {
        &self.gained_this_turn
    }

    /// Instances gained during the previous turn.
    #[must_use]
    pub fn gained_last_turn(&self) -> &[InstanceId] {
        &self.gained_last_turn
    }

    /// Kinds bought this turn.
    #[must_use]
    pub fn bought_this_turn(&self) -> &[CardTypeId] {
        &self.bought_this_turn
    }

    /// Whether the attack currently resolving is prevented for this
    /// player.
    #[must_use]
    pub fn attack_prevented(&self) -> bool {
        self.attack_prevented
    }

    /// Duration cards carried over from this player's most recently
    /// completed turn.
    #[must_use]
    pub fn carried_over(&self) -> &[InstanceId] {
        &self.carried_over
    }

    /// Reset the transient counters to the per-turn defaults.
    pub(crate) fn reset_turn_counters(&mut self) {
        self.actions = 1;
        self.buys = 1;
        self.coins = 0;
        self.potions = 0;
    }

    /// Shift gain bookkeeping across the turn boundary.
    pub(crate) fn shift_turn_records(&mut self) {
        self.gained_last_turn = std::mem::take(&mut self.gained_this_turn);
        self.bought_this_turn.clear();
    }
}
