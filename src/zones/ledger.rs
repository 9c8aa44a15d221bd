//! The zone-ownership ledger.
//!
//! The `Ledger` is the single authority for "where is this card right
//! now". Every instance is placed exactly once, during supply
//! initialization, and thereafter only ever moved. The invariant it
//! upholds: at any instant, every placed instance is in exactly one
//! zone, and the total number of placed instances never changes for the
//! lifetime of the match. There is deliberately no `remove` operation.
//!
//! Everything above the ledger (the movement primitives on
//! [`Game`](crate::game::Game)) routes through [`Ledger::move_to`], so
//! duplication and loss bugs have exactly one place to not happen.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardTypeId, InstanceId};
use crate::core::{GameError, GameRng, PlayerId};

/// A named location holding card instances.
///
/// Player zones are keyed by seat; the supply is keyed by kind; the
/// trash is global.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// A player's draw deck. Ordered; the last element is the top.
    Deck(PlayerId),
    /// A player's hand. Logically unordered.
    Hand(PlayerId),
    /// A player's discard pile. Ordered by arrival.
    Discard(PlayerId),
    /// A player's play area. Ordered by play.
    Play(PlayerId),
    /// A player's set-aside area, used by effects that stage cards.
    SetAside(PlayerId),
    /// A player's carry-over area for duration cards between turns.
    CarryOver(PlayerId),
    /// The shared supply pile for one kind.
    Supply(CardTypeId),
    /// The global trash. Nothing ever comes back out.
    Trash,
}

impl Zone {
    /// The seat that owns this zone, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Zone::Deck(p)
            | Zone::Hand(p)
            | Zone::Discard(p)
            | Zone::Play(p)
            | Zone::SetAside(p)
            | Zone::CarryOver(p) => Some(*p),
            Zone::Supply(_) | Zone::Trash => None,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck(p) => write!(f, "deck of {p}"),
            Zone::Hand(p) => write!(f, "hand of {p}"),
            Zone::Discard(p) => write!(f, "discard of {p}"),
            Zone::Play(p) => write!(f, "play area of {p}"),
            Zone::SetAside(p) => write!(f, "set-aside of {p}"),
            Zone::CarryOver(p) => write!(f, "carry-over of {p}"),
            Zone::Supply(k) => write!(f, "supply pile {k}"),
            Zone::Trash => write!(f, "trash"),
        }
    }
}

/// Tracks the location of every card instance in a match.
///
/// All zones keep their contents in order; ordering only carries meaning
/// for decks, discards and play areas, but keeping it everywhere makes
/// observation deterministic.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    /// instance -> current zone.
    locations: FxHashMap<InstanceId, Zone>,

    /// zone -> instances in order. Decks: last element is the top.
    contents: FxHashMap<Zone, Vec<InstanceId>>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a brand-new instance into a zone.
    ///
    /// Only supply initialization calls this. Panics if the instance is
    /// already placed; creating the same card twice is a programming
    /// error, not a game condition.
    pub fn place(&mut self, card: InstanceId, zone: Zone) {
        if self.locations.contains_key(&card) {
            panic!("{card} is already placed in the ledger");
        }
        self.locations.insert(card, zone);
        self.contents.entry(zone).or_default().push(card);
    }

    /// Move an instance to a new zone, appending to the destination.
    ///
    /// Returns the zone it came from. Fails without changing anything if
    /// the instance was never placed. Moving a card to the zone it is
    /// already in re-appends it (used by deck rebuilds).
    pub fn move_to(&mut self, card: InstanceId, to: Zone) -> Result<Zone, GameError> {
        let from = *self
            .locations
            .get(&card)
            .ok_or_else(|| GameError::effect_state(format!("{card} is not a card in this game")))?;

        if let Some(cards) = self.contents.get_mut(&from) {
            cards.retain(|&c| c != card);
        }
        self.locations.insert(card, to);
        self.contents.entry(to).or_default().push(card);

        Ok(from)
    }

    /// The zone an instance is currently in.
    #[must_use]
    pub fn zone_of(&self, card: InstanceId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Whether an instance is currently in the given zone.
    #[must_use]
    pub fn is_in(&self, card: InstanceId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// The instances in a zone, in order. Empty for untouched zones.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> &[InstanceId] {
        self.contents.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Number of instances in a zone.
    #[must_use]
    pub fn len_of(&self, zone: Zone) -> usize {
        self.contents.get(&zone).map_or(0, Vec::len)
    }

    /// The top instance of an ordered zone (last element).
    #[must_use]
    pub fn top_of(&self, zone: Zone) -> Option<InstanceId> {
        self.contents.get(&zone)?.last().copied()
    }

    /// Shuffle a zone's order in place.
    pub fn shuffle(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(cards) = self.contents.get_mut(&zone) {
            rng.shuffle(cards);
        }
    }

    /// Total number of placed instances.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Whether an instance has ever been placed.
    #[must_use]
    pub fn contains(&self, card: InstanceId) -> bool {
        self.locations.contains_key(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn c(i: u32) -> InstanceId {
        InstanceId::new(i)
    }

    #[test]
    fn test_place_and_lookup() {
        let mut ledger = Ledger::new();
        ledger.place(c(1), Zone::Deck(p(0)));
        ledger.place(c(2), Zone::Deck(p(0)));

        assert_eq!(ledger.zone_of(c(1)), Some(Zone::Deck(p(0))));
        assert_eq!(ledger.zone_of(c(9)), None);
        assert!(ledger.is_in(c(2), Zone::Deck(p(0))));
        assert_eq!(ledger.len_of(Zone::Deck(p(0))), 2);
        assert_eq!(ledger.total_cards(), 2);
    }

    #[test]
    fn test_move_between_zones() {
        let mut ledger = Ledger::new();
        ledger.place(c(1), Zone::Deck(p(0)));

        let from = ledger.move_to(c(1), Zone::Hand(p(0))).unwrap();

        assert_eq!(from, Zone::Deck(p(0)));
        assert_eq!(ledger.zone_of(c(1)), Some(Zone::Hand(p(0))));
        assert_eq!(ledger.len_of(Zone::Deck(p(0))), 0);
        assert_eq!(ledger.len_of(Zone::Hand(p(0))), 1);
        // Conservation: no instance appeared or vanished.
        assert_eq!(ledger.total_cards(), 1);
    }

    #[test]
    fn test_move_unknown_card_fails_cleanly() {
        let mut ledger = Ledger::new();
        ledger.place(c(1), Zone::Trash);

        let err = ledger.move_to(c(99), Zone::Hand(p(0))).unwrap_err();
        assert!(matches!(err, GameError::IllegalEffectState { .. }));
        assert_eq!(ledger.total_cards(), 1);
    }

    #[test]
    fn test_ordering_and_top() {
        let mut ledger = Ledger::new();
        let deck = Zone::Deck(p(0));
        ledger.place(c(1), deck);
        ledger.place(c(2), deck);
        ledger.place(c(3), deck);

        assert_eq!(ledger.cards_in(deck), &[c(1), c(2), c(3)]);
        assert_eq!(ledger.top_of(deck), Some(c(3)));

        ledger.move_to(c(1), deck).unwrap();
        assert_eq!(ledger.top_of(deck), Some(c(1)));
    }

    #[test]
    fn test_shuffle_preserves_contents() {
        let mut ledger = Ledger::new();
        let deck = Zone::Deck(p(0));
        for i in 0..20 {
            ledger.place(c(i), deck);
        }

        let mut rng = GameRng::new(42);
        let before: Vec<_> = ledger.cards_in(deck).to_vec();
        ledger.shuffle(deck, &mut rng);
        let after: Vec<_> = ledger.cards_in(deck).to_vec();

        assert_ne!(before, after);
        let mut sorted = after.clone();
        sorted.sort();
        assert_eq!(sorted, before);
    }

    #[test]
    fn test_supply_zones_keyed_by_kind() {
        let mut ledger = Ledger::new();
        let copper = Zone::Supply(CardTypeId::new(0));
        let estate = Zone::Supply(CardTypeId::new(5));

        ledger.place(c(1), copper);
        ledger.place(c(2), copper);
        ledger.place(c(3), estate);

        assert_eq!(ledger.len_of(copper), 2);
        assert_eq!(ledger.len_of(estate), 1);
    }

    #[test]
    #[should_panic(expected = "already placed")]
    fn test_double_placement_panics() {
        let mut ledger = Ledger::new();
        ledger.place(c(1), Zone::Trash);
        ledger.place(c(1), Zone::Trash);
    }
}
