//! The turn engine: top-level moves and phase progression.
//!
//! `Engine` pairs a [`Game`] with one [`Strategy`] per seat and exposes
//! the moves a match is driven by: play an action, play a treasure, buy
//! a card, end a phase, end the turn. Every move validates its whole
//! precondition set before mutating anything, so a rejected move leaves
//! the match exactly as it was.

use tracing::{debug, info};

use crate::cards::{CardTypeId, InstanceId};
use crate::choice::Strategy;
use crate::core::{GameError, PlayerId, PlayerMap};
use crate::game::{GainDest, Game, GameOutcome, Phase, HAND_SIZE};
use crate::zones::Zone;

use super::context::EffectContext;

/// Drives one match from setup to outcome.
pub struct Engine {
    game: Game,
    strategies: PlayerMap<Box<dyn Strategy>>,
}

impl Engine {
    /// Pair a built game with one strategy per seat.
    ///
    /// Panics if the counts disagree; wiring the table is programming,
    /// not play.
    #[must_use]
    pub fn new(game: Game, strategies: Vec<Box<dyn Strategy>>) -> Self {
        assert_eq!(
            game.num_players(),
            strategies.len(),
            "one strategy per seat"
        );
        Self {
            game,
            strategies: PlayerMap::from_vec(strategies),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Take the match state back out of the engine.
    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    fn ctx(&mut self) -> EffectContext<'_> {
        EffectContext::new(&mut self.game, &mut self.strategies)
    }

    /// Begin play: deal starting decks (unless the game was built with
    /// `no_deal`), give the first seat its turn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.game.phase() != Phase::Setup {
            return Err(GameError::illegal_move(format!(
                "cannot start from the {} phase",
                self.game.phase()
            )));
        }
        if self.game.deal_requested() {
            self.game.deal_starting_decks()?;
        }
        self.game.set_current_player(PlayerId::new(0));
        self.game.set_turn_number(1);
        self.game.set_phase(Phase::Action);
        info!(seats = self.game.num_players(), seed = self.game.rng_seed(), "match started");
        Ok(())
    }

    /// Play an action card from the current player's hand.
    pub fn play_action(&mut self, card: InstanceId) -> Result<(), GameError> {
        let player = self.game.current_player();
        self.require_phase(Phase::Action)?;
        self.require_in_hand(player, card)?;
        if !self.game.kind_of(card).is_action() {
            return Err(GameError::illegal_move(format!(
                "{} is not an action card",
                self.game.kind_of(card).name
            )));
        }
        if self.game.player(player).actions() == 0 {
            return Err(GameError::illegal_move("no actions left this turn"));
        }

        self.game.player_mut(player).actions -= 1;
        self.ctx().play_from_hand(player, card)
    }

    /// Play a treasure card from the current player's hand. Legal only
    /// during the buy phase.
    pub fn play_treasure(&mut self, card: InstanceId) -> Result<(), GameError> {
        let player = self.game.current_player();
        self.require_phase(Phase::Buy)?;
        self.require_in_hand(player, card)?;
        if !self.game.kind_of(card).is_treasure() {
            return Err(GameError::illegal_move(format!(
                "{} is not a treasure card",
                self.game.kind_of(card).name
            )));
        }
        self.ctx().play_from_hand(player, card)
    }

    /// Play every treasure in the current player's hand, returning how
    /// many were played.
    pub fn play_all_treasures(&mut self) -> Result<usize, GameError> {
        let player = self.game.current_player();
        self.require_phase(Phase::Buy)?;
        let treasures: Vec<InstanceId> = self
            .game
            .hand(player)
            .iter()
            .copied()
            .filter(|card| self.game.kind_of(*card).is_treasure())
            .collect();
        let count = treasures.len();
        for card in treasures {
            self.ctx().play_from_hand(player, card)?;
        }
        Ok(count)
    }

    /// Buy one card of `kind` for the current player.
    ///
    /// Checks phase, buys, stock, cost, potion requirement and the
    /// kind's purchase restriction before anything changes; then pays,
    /// runs the on-buy trigger, and gains the card to the discard pile.
    pub fn buy(&mut self, kind: CardTypeId) -> Result<InstanceId, GameError> {
        let player = self.game.current_player();
        self.require_phase(Phase::Buy)?;
        if self.game.player(player).buys() == 0 {
            return Err(GameError::illegal_move("no buys left this turn"));
        }
        if self.game.supply_count(kind) == 0 {
            return Err(GameError::out_of_supply(
                self.game.registry().kind(kind).name.clone(),
            ));
        }
        let cost = self.game.cost_of(kind);
        if self.game.player(player).coins() < cost {
            return Err(GameError::illegal_move(format!(
                "{} costs {cost}, only {} coins available",
                self.game.registry().kind(kind).name,
                self.game.player(player).coins()
            )));
        }
        let needs_potion = self.game.registry().kind(kind).potion_cost;
        if needs_potion && self.game.player(player).potions() == 0 {
            return Err(GameError::illegal_move(format!(
                "{} also costs a potion",
                self.game.registry().kind(kind).name
            )));
        }
        if let Some(can_buy) = self.game.registry().kind(kind).can_buy {
            if !can_buy(&self.game, player) {
                return Err(GameError::illegal_move(format!(
                    "{} cannot be bought right now",
                    self.game.registry().kind(kind).name
                )));
            }
        }

        {
            let p = self.game.player_mut(player);
            p.buys -= 1;
            p.coins -= cost;
            if needs_potion {
                p.potions -= 1;
            }
        }
        debug!(%player, kind = %self.game.registry().kind(kind).name, cost, "bought");

        let on_buy = self.game.registry().kind(kind).on_buy;
        let card = {
            let mut ctx = self.ctx();
            if let Some(on_buy) = on_buy {
                // The buy is committed; a representative instance for
                // the trigger is the pile's top card.
                let top = ctx
                    .game()
                    .ledger()
                    .top_of(Zone::Supply(kind))
                    .ok_or_else(|| {
                        GameError::effect_state("bought pile emptied before the gain")
                    })?;
                on_buy(&mut ctx, player, top)?;
            }
            ctx.gain_to(player, kind, GainDest::Discard)?
        };
        self.game.player_mut(player).bought_this_turn.push(kind);
        Ok(card)
    }

    /// Move from the action phase to the buy phase.
    pub fn end_action_phase(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Action)?;
        self.game.set_phase(Phase::Buy);
        Ok(())
    }

    /// Finish the current player's turn: clean up, hand the turn to the
    /// next seat, and apply their carried-over durations.
    ///
    /// Returns the final outcome when this turn ended the match.
    pub fn end_turn(&mut self) -> Result<Option<GameOutcome>, GameError> {
        self.require_phase(Phase::Buy)?;
        let player = self.game.current_player();
        self.game.set_phase(Phase::Cleanup);

        // Durations in play stay on the table; everything else in the
        // play area and hand goes to the discard pile.
        let durations = std::mem::take(&mut self.game.player_mut(player).durations_played);
        let mut carried = Vec::new();
        for card in self.game.play_area(player).to_vec() {
            if durations.contains(&card) {
                self.game.carry_over(player, card)?;
                carried.push(card);
            } else {
                self.game.discard_card(player, card)?;
            }
        }
        self.game.discard_hand(player);
        self.game.player_mut(player).carried_over = carried;
        self.game.player_mut(player).shift_turn_records();
        self.game.draw_n(player, HAND_SIZE);
        self.game.player_mut(player).reset_turn_counters();

        if self.game.end_condition_met() {
            self.game.set_ended_by(player);
            self.game.set_phase(Phase::GameOver);
            let winner = self.game.decide_winner(player);
            let outcome = GameOutcome {
                winner,
                scores: self.game.scores(),
                ended_by: player,
            };
            info!(%winner, "match over");
            return Ok(Some(outcome));
        }

        let next = player.seat_after(1, self.game.num_players());
        self.game.set_current_player(next);
        self.game.set_turn_number(self.game.turn_number() + 1);
        self.game.set_phase(Phase::Action);
        debug!(turn = self.game.turn_number(), player = %next, "new turn");

        // New player's carried-over durations come back into play and
        // pay out their next-turn effects.
        for card in self.game.carry_over_area(next).to_vec() {
            let kind = self.game.kind_of(card);
            let (duration_yields, on_duration) = (kind.duration_yields, kind.on_duration);
            self.game.put_in_play(next, card)?;
            let mut ctx = self.ctx();
            ctx.apply_yields(next, duration_yields);
            if let Some(on_duration) = on_duration {
                on_duration(&mut ctx, next, card)?;
            }
        }
        Ok(None)
    }

    fn require_phase(&self, phase: Phase) -> Result<(), GameError> {
        if self.game.phase() != phase {
            return Err(GameError::illegal_move(format!(
                "move belongs to the {phase} phase, match is in {}",
                self.game.phase()
            )));
        }
        Ok(())
    }

    fn require_in_hand(&self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        if !self.game.ledger().is_in(card, Zone::Hand(player)) {
            return Err(GameError::illegal_move(format!(
                "{card} is not in the hand of {player}"
            )));
        }
        Ok(())
    }
}
