//! Shared helpers for the integration tests.
//!
//! Tests build games with `no_deal` and stage exact zones by gaining
//! from the supply into a chosen destination, so every scenario is
//! fully determined regardless of the seed.

// Not every test binary uses every helper.
#![allow(dead_code)]

use provincial::base_set;
use provincial::{
    CardTypeId, Engine, GainDest, Game, InstanceId, PlayerId, Strategy,
};

pub const P0: PlayerId = PlayerId(0);
pub const P1: PlayerId = PlayerId(1);
pub const P2: PlayerId = PlayerId(2);

/// A ten-pile kingdom that covers the common test cards.
pub fn standard_kingdom() -> Vec<CardTypeId> {
    vec![
        base_set::CELLAR,
        base_set::MOAT,
        base_set::VILLAGE,
        base_set::MILITIA,
        base_set::SMITHY,
        base_set::THRONE_ROOM,
        base_set::FEAST,
        base_set::WITCH,
        base_set::MARKET,
        base_set::GARDENS,
    ]
}

/// An empty-zone two-seat game over the given kingdom.
pub fn staged_game(kingdom: &[CardTypeId], seed: u64) -> Game {
    Game::builder()
        .num_players(2)
        .kingdom(kingdom)
        .extended_tier(false)
        .no_deal()
        .build(seed)
}

/// An empty-zone game over the given kingdom with a chosen seat count.
pub fn staged_game_for(players: usize, kingdom: &[CardTypeId], seed: u64) -> Game {
    Game::builder()
        .num_players(players)
        .kingdom(kingdom)
        .extended_tier(false)
        .no_deal()
        .build(seed)
}

/// Wire strategies to a game and start play.
pub fn started(game: Game, first: impl Strategy + 'static, second: impl Strategy + 'static) -> Engine {
    let mut engine = Engine::new(game, vec![Box::new(first), Box::new(second)]);
    engine.start().expect("engine starts from setup");
    engine
}

/// Three-seat variant of [`started`].
pub fn started_three(
    game: Game,
    first: impl Strategy + 'static,
    second: impl Strategy + 'static,
    third: impl Strategy + 'static,
) -> Engine {
    let mut engine = Engine::new(
        game,
        vec![Box::new(first), Box::new(second), Box::new(third)],
    );
    engine.start().expect("engine starts from setup");
    engine
}

/// Put copies of the given kinds into a player's hand, in order.
pub fn give_hand(game: &mut Game, player: PlayerId, kinds: &[CardTypeId]) -> Vec<InstanceId> {
    kinds
        .iter()
        .map(|kind| {
            game.gain_from_supply(player, *kind, GainDest::Hand)
                .expect("staging pile is stocked")
        })
        .collect()
}

/// Stack a player's deck, bottom first; the last kind ends up on top.
pub fn stack_deck(game: &mut Game, player: PlayerId, kinds: &[CardTypeId]) -> Vec<InstanceId> {
    kinds
        .iter()
        .map(|kind| {
            game.gain_from_supply(player, *kind, GainDest::DeckTop)
                .expect("staging pile is stocked")
        })
        .collect()
}
