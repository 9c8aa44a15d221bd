//! Central match state: phases, the supply, card instances, movement
//! primitives and scoring.
//!
//! `Game` owns the zone ledger, the per-seat players, the instance
//! table and the RNG. It exposes the low-level movement vocabulary
//! (draw, discard, trash, gain, put on deck, stage) that both the
//! engine and card effects build on. Choice handling and trigger
//! dispatch live a layer up, in [`crate::effects`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{
    base_set, CardInstance, CardKind, CardRegistry, CardTypeId, CostRule, InstanceId,
};
use crate::core::{GameError, GameRng, PlayerId, PlayerMap};
use crate::game::score::Collection;
use crate::game::{setup, Player};
use crate::zones::{Ledger, Zone};

/// Number of coppers in each starting deck.
const STARTING_COPPERS: usize = 7;
/// Number of estates in each starting deck.
const STARTING_ESTATES: usize = 3;
/// Hand size drawn at the start of every turn.
pub const HAND_SIZE: usize = 5;
/// Number of empty piles that ends the match.
const PILE_OUT_LIMIT: usize = 3;

/// The phase the match is currently in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Built but the supply is not dealt yet.
    Init,
    /// Supply dealt; starting decks not yet in place.
    Setup,
    /// The current player may play action cards.
    Action,
    /// The current player may play treasures and buy cards.
    Buy,
    /// Transient phase while the turn is torn down.
    Cleanup,
    /// The match has ended; only queries are legal.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Init => "init",
            Phase::Setup => "setup",
            Phase::Action => "action",
            Phase::Buy => "buy",
            Phase::Cleanup => "cleanup",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Destination zone for a gained card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GainDest {
    /// The default: the player's discard pile.
    Discard,
    /// On top of the player's deck.
    DeckTop,
    /// Directly into the player's hand.
    Hand,
}

/// Final result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// The single winning seat.
    pub winner: PlayerId,
    /// Final score per seat, indexable by `PlayerId`.
    pub scores: PlayerMap<i32>,
    /// The seat whose turn ended the match.
    pub ended_by: PlayerId,
}

/// Deferred setup choices carried from the builder until [`Game::setup`]
/// runs.
#[derive(Clone, Debug, Default)]
struct SetupOptions {
    kingdom: Option<Vec<CardTypeId>>,
    extended_tier: Option<bool>,
    bane: Option<CardTypeId>,
    random_bane: bool,
}

/// Full state of one match.
pub struct Game {
    registry: CardRegistry,
    players: PlayerMap<Player>,
    current: PlayerId,
    phase: Phase,
    turn_number: u32,
    ledger: Ledger,
    instances: FxHashMap<InstanceId, CardInstance>,
    /// Every supply pile in the match, in deal order.
    supply_kinds: Vec<CardTypeId>,
    /// Starting size of each pile; piles never grow past this.
    initial_counts: FxHashMap<CardTypeId, usize>,
    /// The kingdom kinds dealt into this match.
    roster: Vec<CardTypeId>,
    extended_tier: bool,
    bane: Option<CardTypeId>,
    rng: GameRng,
    next_instance: u32,
    deal_starting_cards: bool,
    pending_setup: Option<SetupOptions>,
    ended_by: Option<PlayerId>,
}

/// Builder for a [`Game`].
///
/// Everything is optional: the default is a two-seat match with the
/// standard catalog, a random roster and random extended-tier decision.
pub struct GameBuilder {
    registry: Option<CardRegistry>,
    identities: Vec<Option<String>>,
    options: SetupOptions,
    no_deal: bool,
    no_setup: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: None,
            identities: vec![None, None],
            options: SetupOptions::default(),
            no_deal: false,
            no_setup: false,
        }
    }

    /// Use a custom catalog instead of the standard one.
    ///
    /// The catalog must still register the common-pool kinds under the
    /// identities in [`base_set`], since the supply is built around
    /// them.
    #[must_use]
    pub fn registry(mut self, registry: CardRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set the number of anonymous seats.
    #[must_use]
    pub fn num_players(mut self, count: usize) -> Self {
        self.identities = vec![None; count];
        self
    }

    /// Set named seats, one per player.
    #[must_use]
    pub fn identities(mut self, names: &[&str]) -> Self {
        self.identities = names.iter().map(|n| Some((*n).to_string())).collect();
        self
    }

    /// Fix the kingdom roster instead of drawing one at random.
    #[must_use]
    pub fn kingdom(mut self, kinds: &[CardTypeId]) -> Self {
        self.options.kingdom = Some(kinds.to_vec());
        self
    }

    /// Force the extended-tier decision instead of rolling for it.
    #[must_use]
    pub fn extended_tier(mut self, on: bool) -> Self {
        self.options.extended_tier = Some(on);
        self
    }

    /// Add a fixed bane pile alongside the roster.
    #[must_use]
    pub fn bane(mut self, kind: CardTypeId) -> Self {
        self.options.bane = Some(kind);
        self
    }

    /// Add a randomly chosen bane pile (a kingdom kind costing two or
    /// three coins, outside the roster).
    #[must_use]
    pub fn random_bane(mut self) -> Self {
        self.options.random_bane = true;
        self
    }

    /// Skip dealing starting decks when the engine starts; players
    /// begin with empty decks. Used by tests that stage exact zones.
    #[must_use]
    pub fn no_deal(mut self) -> Self {
        self.no_deal = true;
        self
    }

    /// Leave the match in [`Phase::Init`] without building the supply;
    /// call [`Game::setup`] later.
    #[must_use]
    pub fn no_setup(mut self) -> Self {
        self.no_setup = true;
        self
    }

    /// Build the match state.
    ///
    /// Panics on structurally invalid configuration (no seats, a
    /// kingdom naming an unregistered kind); those are programming
    /// errors, not game conditions.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        let registry = self.registry.unwrap_or_else(base_set::registry);
        assert!(!self.identities.is_empty(), "a match needs at least one seat");
        if let Some(kingdom) = &self.options.kingdom {
            for id in kingdom {
                assert!(
                    registry.contains(*id),
                    "kingdom kind {id} is not in the registry"
                );
            }
        }

        let identities = self.identities;
        let players =
            PlayerMap::new(identities.len(), |p| Player::new(p, identities[p.index()].clone()));

        let mut game = Game {
            registry,
            players,
            current: PlayerId::new(0),
            phase: Phase::Init,
            turn_number: 0,
            ledger: Ledger::new(),
            instances: FxHashMap::default(),
            supply_kinds: Vec::new(),
            initial_counts: FxHashMap::default(),
            roster: Vec::new(),
            extended_tier: false,
            bane: None,
            rng: GameRng::new(seed),
            next_instance: 0,
            deal_starting_cards: !self.no_deal,
            pending_setup: Some(self.options),
            ended_by: None,
        };

        if !self.no_setup {
            game.setup();
        }
        game
    }
}

impl Game {
    /// Shorthand for `GameBuilder::new()`.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Build the supply: resolve the roster, decide the tier, create
    /// every card instance and stack the piles.
    ///
    /// Runs once, moving the match from `Init` to `Setup`. A second
    /// call is a no-op.
    pub fn setup(&mut self) {
        let Some(options) = self.pending_setup.take() else {
            return;
        };

        let mut roster = match options.kingdom {
            Some(kinds) => kinds,
            None => setup::random_roster(&self.registry, &mut self.rng),
        };
        self.extended_tier = match options.extended_tier {
            Some(on) => on,
            None => setup::decide_extended_tier(&self.registry, &roster, &mut self.rng),
        };
        self.bane = options.bane.or_else(|| {
            if options.random_bane {
                setup::choose_bane(&self.registry, &roster, &mut self.rng)
            } else {
                None
            }
        });
        if let Some(bane) = self.bane {
            roster.push(bane);
        }

        let mut piles = vec![base_set::COPPER, base_set::SILVER, base_set::GOLD];
        if self.extended_tier {
            piles.push(base_set::PLATINUM);
        }
        let needs_potions = roster
            .iter()
            .any(|id| self.registry.kind(*id).potion_cost);
        if needs_potions {
            piles.push(base_set::POTION);
        }
        piles.push(base_set::ESTATE);
        piles.push(base_set::DUCHY);
        piles.push(base_set::PROVINCE);
        if self.extended_tier {
            piles.push(base_set::COLONY);
        }
        piles.push(base_set::CURSE);
        piles.extend_from_slice(&roster);

        let num_players = self.players.player_count();
        for kind_id in &piles {
            let kind = self.registry.kind(*kind_id);
            let count = setup::initial_supply_count(kind, num_players);
            debug!(kind = %kind.name, count, "dealing supply pile");
            for _ in 0..count {
                let id = InstanceId::new(self.next_instance);
                self.next_instance += 1;
                self.instances.insert(id, CardInstance::new(id, *kind_id));
                self.ledger.place(id, Zone::Supply(*kind_id));
            }
            self.initial_counts.insert(*kind_id, count);
        }

        self.supply_kinds = piles;
        self.roster = roster;
        self.phase = Phase::Setup;
    }

    // --- queries ---

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        trace!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }

    /// Whether the match is still being played.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        matches!(self.phase, Phase::Action | Phase::Buy | Phase::Cleanup)
    }

    /// One-based turn counter; zero before the match starts.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub(crate) fn set_turn_number(&mut self, n: u32) {
        self.turn_number = n;
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current = player;
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        self.players.get(player)
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        self.players.get_mut(player)
    }

    /// All seats in play order.
    pub fn seats(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.player_count())
    }

    /// The other seats, in table order starting after `player`.
    #[must_use]
    pub fn other_players(&self, player: PlayerId) -> Vec<PlayerId> {
        let count = self.players.player_count();
        (1..count).map(|offset| player.seat_after(offset, count)).collect()
    }

    /// The kingdom kinds dealt into this match (including the bane).
    #[must_use]
    pub fn roster(&self) -> &[CardTypeId] {
        &self.roster
    }

    /// Every supply pile in the match, in deal order.
    #[must_use]
    pub fn supply_kinds(&self) -> &[CardTypeId] {
        &self.supply_kinds
    }

    #[must_use]
    pub fn extended_tier(&self) -> bool {
        self.extended_tier
    }

    #[must_use]
    pub fn bane(&self) -> Option<CardTypeId> {
        self.bane
    }

    /// Whether a pile for this kind was dealt into the match.
    #[must_use]
    pub fn pile_exists(&self, kind: CardTypeId) -> bool {
        self.initial_counts.contains_key(&kind)
    }

    /// Copies left in a supply pile. Zero for piles not in the match.
    #[must_use]
    pub fn supply_count(&self, kind: CardTypeId) -> usize {
        self.ledger.len_of(Zone::Supply(kind))
    }

    /// Copies a pile started with.
    #[must_use]
    pub fn initial_count(&self, kind: CardTypeId) -> usize {
        self.initial_counts.get(&kind).copied().unwrap_or(0)
    }

    /// Number of dealt piles that are now empty.
    #[must_use]
    pub fn empty_piles(&self) -> usize {
        self.supply_kinds
            .iter()
            .filter(|kind| self.supply_count(**kind) == 0)
            .count()
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[InstanceId] {
        self.ledger.cards_in(Zone::Hand(player))
    }

    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &[InstanceId] {
        self.ledger.cards_in(Zone::Deck(player))
    }

    #[must_use]
    pub fn discard_pile(&self, player: PlayerId) -> &[InstanceId] {
        self.ledger.cards_in(Zone::Discard(player))
    }

    #[must_use]
    pub fn play_area(&self, player: PlayerId) -> &[InstanceId] {
        self.ledger.cards_in(Zone::Play(player))
    }

    #[must_use]
    pub fn set_aside_area(&self, player: PlayerId) -> &[InstanceId] {
        self.ledger.cards_in(Zone::SetAside(player))
    }

    #[must_use]
    pub fn carry_over_area(&self, player: PlayerId) -> &[InstanceId] {
        self.ledger.cards_in(Zone::CarryOver(player))
    }

    #[must_use]
    pub fn trash(&self) -> &[InstanceId] {
        self.ledger.cards_in(Zone::Trash)
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The seed this match was built from.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The instance record for a card, if it exists in this match.
    #[must_use]
    pub fn instance(&self, card: InstanceId) -> Option<&CardInstance> {
        self.instances.get(&card)
    }

    /// The kind of a card instance.
    ///
    /// Panics for an instance that was never created; instance
    /// identifiers only come from this match.
    #[must_use]
    pub fn kind_of(&self, card: InstanceId) -> &CardKind {
        let instance = self
            .instances
            .get(&card)
            .expect("instance does not belong to this match");
        self.registry.kind(instance.kind)
    }

    /// The current cost of a kind, evaluating dynamic rules against the
    /// live match state.
    #[must_use]
    pub fn cost_of(&self, kind: CardTypeId) -> u32 {
        match self.registry.kind(kind).cost {
            CostRule::Fixed(cost) => cost,
            CostRule::Dynamic(f) => f(self),
        }
    }

    /// The duration cards `player` carried over from their previous
    /// turn.
    #[must_use]
    pub fn carried_over(&self, player: PlayerId) -> &[InstanceId] {
        self.players.get(player).carried_over()
    }

    // --- movement primitives ---

    /// Move a card whose ledger membership is already established.
    ///
    /// Panics if the ledger does not know the card; callers only pass
    /// instances they just observed in a zone.
    fn must_move(&mut self, card: InstanceId, to: Zone) {
        self.ledger
            .move_to(card, to)
            .expect("observed instance vanished from the ledger");
    }

    /// Draw the top card of `player`'s deck into their hand.
    ///
    /// An empty deck triggers at most one rebuild: the discard pile is
    /// shuffled under. Returns `None` when both are empty.
    pub fn draw_card(&mut self, player: PlayerId) -> Option<InstanceId> {
        let card = self.next_from_deck(player)?;
        self.must_move(card, Zone::Hand(player));
        trace!(%player, %card, "drew a card");
        Some(card)
    }

    /// Draw up to `n` cards; returns how many were actually drawn.
    pub fn draw_n(&mut self, player: PlayerId, n: usize) -> usize {
        (0..n).take_while(|_| self.draw_card(player).is_some()).count()
    }

    /// Take the top card of the deck without landing it anywhere yet;
    /// the caller moves it next. Rebuilds the deck once if needed.
    fn next_from_deck(&mut self, player: PlayerId) -> Option<InstanceId> {
        let deck = Zone::Deck(player);
        if self.ledger.len_of(deck) == 0 {
            let discards: Vec<InstanceId> =
                self.ledger.cards_in(Zone::Discard(player)).to_vec();
            if discards.is_empty() {
                return None;
            }
            debug!(%player, count = discards.len(), "rebuilding deck from discard pile");
            for card in discards {
                self.must_move(card, deck);
            }
            self.ledger.shuffle(deck, &mut self.rng);
        }
        self.ledger.top_of(deck)
    }

    /// Move the top card of `player`'s deck to their set-aside area,
    /// rebuilding the deck once if needed. Effects that inspect or
    /// relocate deck cards stage them here first.
    pub fn stage_from_deck(&mut self, player: PlayerId) -> Option<InstanceId> {
        let card = self.next_from_deck(player)?;
        self.must_move(card, Zone::SetAside(player));
        Some(card)
    }

    /// Discard a card from any zone `player` owns.
    pub fn discard_card(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_owned(player, card)?;
        self.must_move(card, Zone::Discard(player));
        trace!(%player, %card, "discarded");
        Ok(())
    }

    /// Discard `player`'s entire hand.
    pub fn discard_hand(&mut self, player: PlayerId) {
        let hand: Vec<InstanceId> = self.hand(player).to_vec();
        for card in hand {
            self.must_move(card, Zone::Discard(player));
        }
    }

    /// Move a card from any zone `player` owns to the trash.
    ///
    /// The trash is final; nothing moves a card back out.
    pub fn trash_card(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_owned(player, card)?;
        self.must_move(card, Zone::Trash);
        debug!(%player, card = %self.kind_of(card).name, "trashed");
        Ok(())
    }

    /// Put a card from any zone `player` owns on top of their deck.
    pub fn put_on_deck(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_owned(player, card)?;
        self.must_move(card, Zone::Deck(player));
        Ok(())
    }

    /// Put a card from any zone `player` owns into their hand.
    pub fn put_in_hand(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_owned(player, card)?;
        self.must_move(card, Zone::Hand(player));
        Ok(())
    }

    /// Move a card from any zone `player` owns into their play area.
    pub fn put_in_play(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_owned(player, card)?;
        self.must_move(card, Zone::Play(player));
        Ok(())
    }

    /// Move a card from any zone `player` owns to their set-aside area.
    pub fn set_aside(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_owned(player, card)?;
        self.must_move(card, Zone::SetAside(player));
        Ok(())
    }

    /// Move a card from any zone `player` owns to their carry-over
    /// area, where durations wait out the turn boundary.
    pub fn carry_over(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_owned(player, card)?;
        self.must_move(card, Zone::CarryOver(player));
        Ok(())
    }

    fn check_owned(&self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        match self.ledger.zone_of(card) {
            Some(zone) if zone.owner() == Some(player) => Ok(()),
            Some(zone) => Err(GameError::effect_state(format!(
                "{card} is in the {zone}, not a zone of {player}"
            ))),
            None => Err(GameError::effect_state(format!(
                "{card} is not a card in this match"
            ))),
        }
    }

    /// Take the top card of a supply pile into one of `player`'s zones.
    ///
    /// Validates the pile before any state changes. Records the gain on
    /// the player. On-gain triggers fire a layer up, after residency.
    pub fn gain_from_supply(
        &mut self,
        player: PlayerId,
        kind: CardTypeId,
        dest: GainDest,
    ) -> Result<InstanceId, GameError> {
        let pile = Zone::Supply(kind);
        let Some(card) = self.ledger.top_of(pile) else {
            return Err(GameError::out_of_supply(self.registry.kind(kind).name.clone()));
        };
        let to = match dest {
            GainDest::Discard => Zone::Discard(player),
            GainDest::DeckTop => Zone::Deck(player),
            GainDest::Hand => Zone::Hand(player),
        };
        self.must_move(card, to);
        self.players.get_mut(player).gained_this_turn.push(card);
        debug!(%player, kind = %self.registry.kind(kind).name, ?dest, "gained");
        Ok(card)
    }

    /// Emit a reveal event for observers. Reveals are informational;
    /// the card does not move.
    pub fn reveal(&mut self, player: PlayerId, card: InstanceId) {
        debug!(%player, card = %self.kind_of(card).name, "revealed");
    }

    /// Deal each seat its starting deck (seven coppers, three estates)
    /// from the supply, shuffle, and draw opening hands.
    pub(crate) fn deal_starting_decks(&mut self) -> Result<(), GameError> {
        let seats: Vec<PlayerId> = self.seats().collect();
        for player in &seats {
            let deck = Zone::Deck(*player);
            for _ in 0..STARTING_COPPERS {
                let card = self
                    .ledger
                    .top_of(Zone::Supply(base_set::COPPER))
                    .ok_or_else(|| GameError::out_of_supply("Copper"))?;
                self.must_move(card, deck);
            }
            for _ in 0..STARTING_ESTATES {
                let card = self
                    .ledger
                    .top_of(Zone::Supply(base_set::ESTATE))
                    .ok_or_else(|| GameError::out_of_supply("Estate"))?;
                self.must_move(card, deck);
            }
            self.ledger.shuffle(deck, &mut self.rng);
        }
        for player in &seats {
            self.draw_n(*player, HAND_SIZE);
        }
        Ok(())
    }

    #[must_use]
    pub(crate) fn deal_requested(&self) -> bool {
        self.deal_starting_cards
    }

    // --- end of match and scoring ---

    /// Whether the end condition holds: the top-tier victory pile is
    /// empty, or enough piles have run out.
    #[must_use]
    pub fn end_condition_met(&self) -> bool {
        let top_tier = if self.extended_tier {
            base_set::COLONY
        } else {
            base_set::PROVINCE
        };
        self.supply_count(top_tier) == 0 || self.empty_piles() >= PILE_OUT_LIMIT
    }

    pub(crate) fn set_ended_by(&mut self, player: PlayerId) {
        self.ended_by = Some(player);
    }

    /// The seat whose turn ended the match, once it is over.
    #[must_use]
    pub fn ended_by(&self) -> Option<PlayerId> {
        self.ended_by
    }

    /// Snapshot every card `player` owns, across all six owned zones.
    #[must_use]
    pub fn collection(&self, player: PlayerId) -> Collection<'_> {
        let zones = [
            Zone::Deck(player),
            Zone::Hand(player),
            Zone::Discard(player),
            Zone::Play(player),
            Zone::SetAside(player),
            Zone::CarryOver(player),
        ];
        let mut counts: FxHashMap<CardTypeId, usize> = FxHashMap::default();
        for zone in zones {
            for card in self.ledger.cards_in(zone) {
                let kind = self.instances[card].kind;
                *counts.entry(kind).or_insert(0) += 1;
            }
        }
        Collection::new(&self.registry, counts)
    }

    /// A player's final score: card victory points plus tokens.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i32 {
        self.collection(player).victory_points() + self.players.get(player).vp_tokens()
    }

    /// Scores for every seat.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        PlayerMap::new(self.players.player_count(), |p| self.score(p))
    }

    /// Decide the single winner once the match has ended.
    ///
    /// Highest score wins. Ties go to the seat that has taken the
    /// fewest turns, which is the earliest seat in table order starting
    /// after the player whose turn ended the match.
    #[must_use]
    pub(crate) fn decide_winner(&self, ended_by: PlayerId) -> PlayerId {
        let count = self.players.player_count();
        let mut winner = ended_by.seat_after(1, count);
        let mut best = self.score(winner);
        for offset in 2..=count {
            let seat = ended_by.seat_after(offset, count);
            let score = self.score(seat);
            if score > best {
                winner = seat;
                best = score;
            }
        }
        winner
    }
}
