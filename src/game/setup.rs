//! Supply construction: pile sizes, random roster selection, the
//! extended-tier decision, and bane selection.

use crate::cards::{CardKind, CardRegistry, CardTypeId, Expansion, Tag};
use crate::core::GameRng;

/// Number of kingdom piles dealt into a match.
pub const KINGDOM_PILES: usize = 10;

/// Copies a pile starts with, by kind and player count.
///
/// Victory piles scale with the table: 8 copies for one or two players,
/// 12 for more. Estate piles additionally carry three per player for the
/// starting deal. Curse piles hold ten per opponent. The base treasures
/// use fixed stock sizes; every other kind gets a ten-card pile.
#[must_use]
pub fn initial_supply_count(kind: &CardKind, num_players: usize) -> usize {
    if kind.has_tag(Tag::Curse) {
        return 10 * num_players.saturating_sub(1);
    }
    let victory_stock = if num_players <= 2 { 8 } else { 12 };
    match kind.name.as_str() {
        "Copper" => 60,
        "Silver" => 40,
        "Gold" => 30,
        "Platinum" => 12,
        "Potion" => 16,
        "Estate" => victory_stock + 3 * num_players,
        _ if kind.has_tag(Tag::Victory) => victory_stock,
        _ => 10,
    }
}

/// Pick a random roster of kingdom kinds from the registry.
///
/// Draws [`KINGDOM_PILES`] distinct kinds, or every kingdom kind the
/// registry holds if it has fewer. Candidates are ordered by identity
/// before shuffling so the draw depends only on the seed.
#[must_use]
pub fn random_roster(registry: &CardRegistry, rng: &mut GameRng) -> Vec<CardTypeId> {
    let mut candidates: Vec<CardTypeId> =
        registry.kingdom_kinds().map(|kind| kind.id).collect();
    candidates.sort_by_key(|id| id.raw());
    rng.shuffle(&mut candidates);
    candidates.truncate(KINGDOM_PILES);
    candidates
}

/// Decide whether the match plays with the extended treasure/victory
/// tier (Platinum and Colony).
///
/// The chance equals the fraction of the roster drawn from the set that
/// introduced the tier, so a roster with no such cards never extends
/// and an all-Prosperity roster always does.
#[must_use]
pub fn decide_extended_tier(
    registry: &CardRegistry,
    roster: &[CardTypeId],
    rng: &mut GameRng,
) -> bool {
    let prosperity = roster
        .iter()
        .filter(|id| registry.kind(**id).expansion == Expansion::Prosperity)
        .count();
    if prosperity == 0 {
        return false;
    }
    let chance = prosperity as f64 / KINGDOM_PILES.max(roster.len()) as f64;
    rng.gen_bool(chance.min(1.0))
}

/// Pick a bane kind: a kingdom kind costing two or three coins that is
/// not already in the roster. Returns `None` when no such kind exists.
#[must_use]
pub fn choose_bane(
    registry: &CardRegistry,
    roster: &[CardTypeId],
    rng: &mut GameRng,
) -> Option<CardTypeId> {
    let mut candidates: Vec<CardTypeId> = registry
        .kingdom_kinds()
        .filter(|kind| {
            let cost = kind.base_cost();
            (2..=3).contains(&cost) && !kind.potion_cost && !roster.contains(&kind.id)
        })
        .map(|kind| kind.id)
        .collect();
    candidates.sort_by_key(|id| id.raw());
    rng.choose(&candidates).copied()
}
