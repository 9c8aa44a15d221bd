//! Execution context handed to card effect routines.
//!
//! An `EffectContext` borrows the match state and the per-seat
//! strategies together, so an effect can interleave state mutation with
//! synchronous choice requests. It is also where the shared trigger
//! machinery lives: playing a card from hand, the attack/reaction loop,
//! and replaying a card in place.
//!
//! Error discipline inside effects: movement against a card that is no
//! longer where the effect assumed it fails with
//! [`IllegalEffectState`](crate::core::GameError::IllegalEffectState)
//! and unwinds to the caller of the top-level move; sub-steps already
//! completed stand. Effects that tolerate an empty pile use
//! [`try_gain`](EffectContext::try_gain) instead of
//! [`gain`](EffectContext::gain).

use tracing::debug;

use crate::cards::{CardTypeId, InstanceId, Tag, Yields};
use crate::choice::{CardChoice, CardQuery, CardsQuery, ChoiceSource, Strategy};
use crate::core::{GameError, PlayerId, PlayerMap};
use crate::game::{GainDest, Game};
use crate::zones::Zone;

/// Mutable view over a match and its strategies, for the duration of
/// one top-level move.
pub struct EffectContext<'a> {
    game: &'a mut Game,
    strategies: &'a mut PlayerMap<Box<dyn Strategy>>,
}

impl<'a> EffectContext<'a> {
    pub(crate) fn new(
        game: &'a mut Game,
        strategies: &'a mut PlayerMap<Box<dyn Strategy>>,
    ) -> Self {
        Self { game, strategies }
    }

    /// Read-only view of the match.
    #[must_use]
    pub fn game(&self) -> &Game {
        self.game
    }

    /// Mutable view of the match, for effects that need a primitive the
    /// wrappers below do not cover.
    pub fn game_mut(&mut self) -> &mut Game {
        self.game
    }

    // --- choice requests ---

    /// Ask `player` a yes/no question.
    pub fn ask(&mut self, player: PlayerId, prompt: &str) -> bool {
        let game = &*self.game;
        self.strategies.get_mut(player).ask(game, player, prompt)
    }

    /// Ask `player` to pick one of several labeled options.
    pub fn choose_one(
        &mut self,
        player: PlayerId,
        prompt: &str,
        options: &[&str],
    ) -> Result<usize, GameError> {
        let game = &*self.game;
        let index = self
            .strategies
            .get_mut(player)
            .choose_one(game, player, prompt, options);
        if index >= options.len() {
            return Err(GameError::constraint(format!(
                "option {index} is out of range for {prompt:?}"
            )));
        }
        Ok(index)
    }

    /// Ask `player` for zero or one card under the query's constraints.
    ///
    /// Resolves to `None` without consulting the strategy when no legal
    /// candidate exists. An answer outside the candidates, or a decline
    /// where the query requires an answer, is a constraint violation.
    pub fn choose_card(
        &mut self,
        player: PlayerId,
        prompt: &str,
        query: CardQuery,
    ) -> Result<Option<CardChoice>, GameError> {
        let candidates = self.card_candidates(player, &query);
        if candidates.is_empty() {
            return Ok(None);
        }
        let game = &*self.game;
        let answer = self
            .strategies
            .get_mut(player)
            .choose_card(game, player, prompt, &query, &candidates);
        match answer {
            Some(choice) if candidates.contains(&choice) => Ok(Some(choice)),
            Some(choice) => Err(GameError::constraint(format!(
                "{choice:?} is not a legal answer to {prompt:?}"
            ))),
            None if query.required => Err(GameError::constraint(format!(
                "an answer is required for {prompt:?}"
            ))),
            None => Ok(None),
        }
    }

    /// Ask `player` for a set of cards under the query's constraints.
    ///
    /// The minimum is clamped to the candidate count, so "discard down
    /// to three" style effects work with short hands.
    pub fn choose_cards(
        &mut self,
        player: PlayerId,
        prompt: &str,
        query: CardsQuery,
    ) -> Result<Vec<InstanceId>, GameError> {
        let candidates = self.cards_candidates(player, &query);
        let min = query.min.min(candidates.len());
        let max = query.max.unwrap_or(candidates.len());
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        let game = &*self.game;
        let chosen = self
            .strategies
            .get_mut(player)
            .choose_cards(game, player, prompt, &query, &candidates);

        if chosen.len() < min || chosen.len() > max {
            return Err(GameError::constraint(format!(
                "{prompt:?} wants between {min} and {max} cards, got {}",
                chosen.len()
            )));
        }
        for (i, card) in chosen.iter().enumerate() {
            if !candidates.contains(card) {
                return Err(GameError::constraint(format!(
                    "{card} is not a legal answer to {prompt:?}"
                )));
            }
            if chosen[..i].contains(card) {
                return Err(GameError::constraint(format!(
                    "{card} was chosen twice for {prompt:?}"
                )));
            }
        }
        Ok(chosen)
    }

    fn card_candidates(&self, player: PlayerId, query: &CardQuery) -> Vec<CardChoice> {
        match query.source {
            ChoiceSource::Supply => self
                .game
                .supply_kinds()
                .iter()
                .copied()
                .filter(|kind| self.game.supply_count(*kind) > 0)
                .filter(|kind| self.kind_fits(*kind, query))
                .map(CardChoice::Kind)
                .collect(),
            ChoiceSource::Hand | ChoiceSource::Play => {
                let zone = match query.source {
                    ChoiceSource::Hand => Zone::Hand(player),
                    _ => Zone::Play(player),
                };
                self.game
                    .ledger()
                    .cards_in(zone)
                    .iter()
                    .copied()
                    .filter(|card| self.kind_fits(self.game.kind_of(*card).id, query))
                    .map(CardChoice::Instance)
                    .collect()
            }
        }
    }

    fn kind_fits(&self, kind: CardTypeId, query: &CardQuery) -> bool {
        if let Some(tag) = query.tag {
            if !self.game.registry().kind(kind).has_tag(tag) {
                return false;
            }
        }
        if let Some(cap) = query.max_cost {
            if self.game.cost_of(kind) > cap {
                return false;
            }
        }
        true
    }

    fn cards_candidates(&self, player: PlayerId, query: &CardsQuery) -> Vec<InstanceId> {
        let zone = match query.source {
            ChoiceSource::Hand => Zone::Hand(player),
            ChoiceSource::Play => Zone::Play(player),
            ChoiceSource::Supply => return Vec::new(),
        };
        self.game
            .ledger()
            .cards_in(zone)
            .iter()
            .copied()
            .filter(|card| match query.tag {
                Some(tag) => self.game.kind_of(*card).has_tag(tag),
                None => true,
            })
            .collect()
    }

    // --- counters ---

    pub fn add_actions(&mut self, player: PlayerId, n: u32) {
        self.game.player_mut(player).actions += n;
    }

    pub fn add_buys(&mut self, player: PlayerId, n: u32) {
        self.game.player_mut(player).buys += n;
    }

    pub fn add_coins(&mut self, player: PlayerId, n: u32) {
        self.game.player_mut(player).coins += n;
    }

    pub fn add_potions(&mut self, player: PlayerId, n: u32) {
        self.game.player_mut(player).potions += n;
    }

    pub fn add_vp_tokens(&mut self, player: PlayerId, n: i32) {
        self.game.player_mut(player).vp_tokens += n;
    }

    /// Mark the attack currently resolving as prevented for `player`.
    /// Only meaningful inside a reaction routine.
    pub fn prevent_attack(&mut self, player: PlayerId) {
        self.game.player_mut(player).attack_prevented = true;
    }

    // --- movement wrappers ---

    /// Draw up to `n` cards for `player`.
    pub fn draw(&mut self, player: PlayerId, n: usize) -> usize {
        self.game.draw_n(player, n)
    }

    /// Discard one card from a zone `player` owns.
    pub fn discard(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.game.discard_card(player, card)
    }

    /// Discard `player`'s whole hand.
    pub fn discard_hand(&mut self, player: PlayerId) {
        self.game.discard_hand(player);
    }

    /// Trash a card from a zone `player` owns.
    pub fn trash(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.game.trash_card(player, card)
    }

    /// Gain a card of `kind` to `player`'s discard pile, firing its
    /// on-gain trigger. An empty pile is an illegal effect state here;
    /// effects that tolerate one use [`try_gain`](Self::try_gain).
    pub fn gain(&mut self, player: PlayerId, kind: CardTypeId) -> Result<InstanceId, GameError> {
        self.gain_to(player, kind, GainDest::Discard)
    }

    /// Gain a card of `kind` to a specific destination zone.
    pub fn gain_to(
        &mut self,
        player: PlayerId,
        kind: CardTypeId,
        dest: GainDest,
    ) -> Result<InstanceId, GameError> {
        let card = self
            .game
            .gain_from_supply(player, kind, dest)
            .map_err(|err| match err {
                GameError::OutOfSupply { kind } => GameError::effect_state(format!(
                    "effect needed a {kind} but the pile is empty"
                )),
                other => other,
            })?;
        if let Some(on_gain) = self.game.registry().kind(kind).on_gain {
            on_gain(self, player, card)?;
        }
        Ok(card)
    }

    /// Gain a card of `kind` if any copy is left; an empty or missing
    /// pile skips the gain.
    pub fn try_gain(
        &mut self,
        player: PlayerId,
        kind: CardTypeId,
    ) -> Result<Option<InstanceId>, GameError> {
        if self.game.supply_count(kind) == 0 {
            return Ok(None);
        }
        self.gain(player, kind).map(Some)
    }

    /// Put a card from a zone `player` owns on top of their deck.
    pub fn put_on_deck(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.game.put_on_deck(player, card)
    }

    /// Put a card from a zone `player` owns into their hand.
    pub fn put_in_hand(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.game.put_in_hand(player, card)
    }

    /// Stage the top card of `player`'s deck into their set-aside area.
    pub fn stage_from_deck(&mut self, player: PlayerId) -> Option<InstanceId> {
        self.game.stage_from_deck(player)
    }

    /// Announce a card to all observers without moving it.
    pub fn reveal(&mut self, player: PlayerId, card: InstanceId) {
        self.game.reveal(player, card);
    }

    // --- trigger machinery ---

    /// Play a card out of `player`'s hand: move it to the play area,
    /// apply its yields, then run its on-play and attack triggers.
    ///
    /// Phase and counter checks belong to the engine entry points; this
    /// is also the path for effects that play cards (Throne Room).
    pub fn play_from_hand(
        &mut self,
        player: PlayerId,
        card: InstanceId,
    ) -> Result<(), GameError> {
        if !self.game.ledger().is_in(card, Zone::Hand(player)) {
            return Err(GameError::illegal_move(format!(
                "{card} is not in the hand of {player}"
            )));
        }
        let kind = self.game.kind_of(card);
        let (name, yields, on_play, on_attack, is_duration) = (
            kind.name.clone(),
            kind.yields,
            kind.on_play,
            kind.on_attack,
            kind.has_tag(Tag::Duration),
        );
        debug!(%player, card = %name, "played");

        self.game.put_in_play(player, card)?;
        if is_duration {
            self.game.player_mut(player).durations_played.push(card);
        }
        self.apply_yields(player, yields);
        if let Some(on_play) = on_play {
            on_play(self, player, card)?;
        }
        if let Some(on_attack) = on_attack {
            self.resolve_attack(player, |ctx, target| on_attack(ctx, player, target, card))?;
        }
        Ok(())
    }

    /// Re-apply a card's yields and on-play trigger without moving it.
    ///
    /// The card must still be in `player`'s play area; a card that left
    /// play since (for example by trashing itself) silently resolves to
    /// nothing.
    pub fn replay(&mut self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        if !self.game.ledger().is_in(card, Zone::Play(player)) {
            debug!(%player, %card, "replay target left play, no effect");
            return Ok(());
        }
        let kind = self.game.kind_of(card);
        let (yields, on_play, on_attack) = (kind.yields, kind.on_play, kind.on_attack);

        self.apply_yields(player, yields);
        if let Some(on_play) = on_play {
            on_play(self, player, card)?;
        }
        if let Some(on_attack) = on_attack {
            self.resolve_attack(player, |ctx, target| on_attack(ctx, player, target, card))?;
        }
        Ok(())
    }

    /// Apply a kind's fixed yields to `player`.
    pub(crate) fn apply_yields(&mut self, player: PlayerId, yields: Yields) {
        if yields.cards > 0 {
            self.game.draw_n(player, yields.cards as usize);
        }
        let p = self.game.player_mut(player);
        p.actions += yields.actions;
        p.buys += yields.buys;
        p.coins += yields.coins;
        p.potions += yields.potions;
    }

    /// Run an attack against every other player in table order.
    ///
    /// Each target first gets a reaction opportunity: every
    /// reaction-tagged card in their hand runs its reaction routine,
    /// which may prevent the attack for that target. `per_target` then
    /// runs unless prevented. The prevented flag never outlives one
    /// target's resolution.
    pub fn resolve_attack(
        &mut self,
        attacker: PlayerId,
        mut per_target: impl FnMut(&mut Self, PlayerId) -> Result<(), GameError>,
    ) -> Result<(), GameError> {
        for target in self.game.other_players(attacker) {
            self.game.player_mut(target).attack_prevented = false;

            let reactions: Vec<InstanceId> = self
                .game
                .hand(target)
                .iter()
                .copied()
                .filter(|card| {
                    let kind = self.game.kind_of(*card);
                    kind.has_tag(Tag::Reaction) && kind.on_reaction.is_some()
                })
                .collect();
            for card in reactions {
                // The card may have left the hand to an earlier reaction.
                if !self.game.ledger().is_in(card, Zone::Hand(target)) {
                    continue;
                }
                if let Some(on_reaction) = self.game.kind_of(card).on_reaction {
                    on_reaction(self, target, card)?;
                }
            }

            if self.game.player(target).attack_prevented {
                debug!(%attacker, %target, "attack prevented");
            } else {
                per_target(self, target)?;
            }
            self.game.player_mut(target).attack_prevented = false;
        }
        Ok(())
    }
}
