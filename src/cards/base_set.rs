//! The standard card catalog.
//!
//! Kind identifiers are fixed constants in registration order, so games,
//! tests and custom registries can name piles without string lookups.
//! Effect routines live here as free functions wired into their kinds;
//! the simple cards are pure data (tags, cost, yields) with no routine
//! at all.

use crate::cards::{CardKind, CardRegistry, CardTypeId, Expansion, InstanceId, Tag, Yields};
use crate::choice::{CardChoice, CardQuery, CardsQuery};
use crate::core::{GameError, PlayerId};
use crate::effects::EffectContext;
use crate::game::{GainDest, Game, Phase};

// Common pool.
pub const COPPER: CardTypeId = CardTypeId::new(0);
pub const SILVER: CardTypeId = CardTypeId::new(1);
pub const GOLD: CardTypeId = CardTypeId::new(2);
pub const PLATINUM: CardTypeId = CardTypeId::new(3);
pub const POTION: CardTypeId = CardTypeId::new(4);
pub const ESTATE: CardTypeId = CardTypeId::new(5);
pub const DUCHY: CardTypeId = CardTypeId::new(6);
pub const PROVINCE: CardTypeId = CardTypeId::new(7);
pub const COLONY: CardTypeId = CardTypeId::new(8);
pub const CURSE: CardTypeId = CardTypeId::new(9);

// Base set kingdom.
pub const CELLAR: CardTypeId = CardTypeId::new(10);
pub const CHAPEL: CardTypeId = CardTypeId::new(11);
pub const MOAT: CardTypeId = CardTypeId::new(12);
pub const CHANCELLOR: CardTypeId = CardTypeId::new(13);
pub const VILLAGE: CardTypeId = CardTypeId::new(14);
pub const WOODCUTTER: CardTypeId = CardTypeId::new(15);
pub const WORKSHOP: CardTypeId = CardTypeId::new(16);
pub const BUREAUCRAT: CardTypeId = CardTypeId::new(17);
pub const FEAST: CardTypeId = CardTypeId::new(18);
pub const GARDENS: CardTypeId = CardTypeId::new(19);
pub const MILITIA: CardTypeId = CardTypeId::new(20);
pub const MONEYLENDER: CardTypeId = CardTypeId::new(21);
pub const REMODEL: CardTypeId = CardTypeId::new(22);
pub const SMITHY: CardTypeId = CardTypeId::new(23);
pub const SPY: CardTypeId = CardTypeId::new(24);
pub const THIEF: CardTypeId = CardTypeId::new(25);
pub const THRONE_ROOM: CardTypeId = CardTypeId::new(26);
pub const COUNCIL_ROOM: CardTypeId = CardTypeId::new(27);
pub const FESTIVAL: CardTypeId = CardTypeId::new(28);
pub const LABORATORY: CardTypeId = CardTypeId::new(29);
pub const LIBRARY: CardTypeId = CardTypeId::new(30);
pub const MARKET: CardTypeId = CardTypeId::new(31);
pub const WITCH: CardTypeId = CardTypeId::new(32);

// Intrigue.
pub const GREAT_HALL: CardTypeId = CardTypeId::new(33);
pub const MINION: CardTypeId = CardTypeId::new(34);
pub const NOBLES: CardTypeId = CardTypeId::new(35);
pub const HAREM: CardTypeId = CardTypeId::new(36);

// Seaside.
pub const LIGHTHOUSE: CardTypeId = CardTypeId::new(37);
pub const FISHING_VILLAGE: CardTypeId = CardTypeId::new(38);
pub const CARAVAN: CardTypeId = CardTypeId::new(39);
pub const SALVAGER: CardTypeId = CardTypeId::new(40);
pub const BAZAAR: CardTypeId = CardTypeId::new(41);

// Alchemy.
pub const FAMILIAR: CardTypeId = CardTypeId::new(42);

// Prosperity.
pub const BISHOP: CardTypeId = CardTypeId::new(43);
pub const MONUMENT: CardTypeId = CardTypeId::new(44);
pub const WORKERS_VILLAGE: CardTypeId = CardTypeId::new(45);
pub const MOUNTEBANK: CardTypeId = CardTypeId::new(46);
pub const GRAND_MARKET: CardTypeId = CardTypeId::new(47);
pub const PEDDLER: CardTypeId = CardTypeId::new(48);

// Cornucopia.
pub const FAIRGROUNDS: CardTypeId = CardTypeId::new(49);

fn yields(cards: u32, actions: u32, buys: u32, coins: u32) -> Yields {
    Yields {
        cards,
        actions,
        buys,
        coins,
        potions: 0,
    }
}

/// Build the full standard catalog.
#[must_use]
pub fn registry() -> CardRegistry {
    let mut r = CardRegistry::new();

    // Common pool: treasures, victory cards, Curse.
    r.register(
        CardKind::new(COPPER, "Copper", Expansion::Base, 0)
            .with_tags(&[Tag::Base, Tag::Treasure])
            .with_yields(yields(0, 0, 0, 1)),
    );
    r.register(
        CardKind::new(SILVER, "Silver", Expansion::Base, 3)
            .with_tags(&[Tag::Base, Tag::Treasure])
            .with_yields(yields(0, 0, 0, 2)),
    );
    r.register(
        CardKind::new(GOLD, "Gold", Expansion::Base, 6)
            .with_tags(&[Tag::Base, Tag::Treasure])
            .with_yields(yields(0, 0, 0, 3)),
    );
    r.register(
        CardKind::new(PLATINUM, "Platinum", Expansion::Prosperity, 9)
            .with_tags(&[Tag::Base, Tag::Treasure])
            .with_yields(yields(0, 0, 0, 5)),
    );
    r.register(
        CardKind::new(POTION, "Potion", Expansion::Alchemy, 4)
            .with_tags(&[Tag::Base, Tag::Treasure])
            .with_yields(Yields {
                potions: 1,
                ..Yields::default()
            }),
    );
    r.register(
        CardKind::new(ESTATE, "Estate", Expansion::Base, 2)
            .with_tags(&[Tag::Base, Tag::Victory])
            .with_victory(1),
    );
    r.register(
        CardKind::new(DUCHY, "Duchy", Expansion::Base, 5)
            .with_tags(&[Tag::Base, Tag::Victory])
            .with_victory(3),
    );
    r.register(
        CardKind::new(PROVINCE, "Province", Expansion::Base, 8)
            .with_tags(&[Tag::Base, Tag::Victory])
            .with_victory(6),
    );
    r.register(
        CardKind::new(COLONY, "Colony", Expansion::Prosperity, 11)
            .with_tags(&[Tag::Base, Tag::Victory])
            .with_victory(10),
    );
    r.register(
        CardKind::new(CURSE, "Curse", Expansion::Base, 0)
            .with_tags(&[Tag::Curse])
            .with_victory(-1),
    );

    // Base set kingdom.
    r.register(
        CardKind::new(CELLAR, "Cellar", Expansion::Base, 2)
            .with_tags(&[Tag::Action])
            .with_yields(yields(0, 1, 0, 0))
            .with_on_play(cellar_play),
    );
    r.register(
        CardKind::new(CHAPEL, "Chapel", Expansion::Base, 2)
            .with_tags(&[Tag::Action])
            .with_on_play(chapel_play),
    );
    r.register(
        CardKind::new(MOAT, "Moat", Expansion::Base, 2)
            .with_tags(&[Tag::Action, Tag::Reaction])
            .with_on_reaction(moat_reaction),
    );
    r.register(
        CardKind::new(CHANCELLOR, "Chancellor", Expansion::Base, 3)
            .with_tags(&[Tag::Action])
            .with_yields(yields(0, 0, 0, 2))
            .with_on_play(chancellor_play),
    );
    r.register(
        CardKind::new(VILLAGE, "Village", Expansion::Base, 3)
            .with_tags(&[Tag::Action])
            .with_yields(yields(1, 2, 0, 0)),
    );
    r.register(
        CardKind::new(WOODCUTTER, "Woodcutter", Expansion::Base, 3)
            .with_tags(&[Tag::Action])
            .with_yields(yields(0, 0, 1, 2)),
    );
    r.register(
        CardKind::new(WORKSHOP, "Workshop", Expansion::Base, 3)
            .with_tags(&[Tag::Action])
            .with_on_play(workshop_play),
    );
    r.register(
        CardKind::new(BUREAUCRAT, "Bureaucrat", Expansion::Base, 3)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_yields(yields(0, 0, 0, 2))
            .with_on_play(bureaucrat_play)
            .with_on_attack(bureaucrat_attack),
    );
    r.register(
        CardKind::new(FEAST, "Feast", Expansion::Base, 4)
            .with_tags(&[Tag::Action])
            .with_on_play(feast_play),
    );
    r.register(
        CardKind::new(GARDENS, "Gardens", Expansion::Base, 4)
            .with_tags(&[Tag::Victory])
            .with_dynamic_victory(|collection| (collection.total() / 10) as i32),
    );
    r.register(
        CardKind::new(MILITIA, "Militia", Expansion::Base, 4)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_yields(yields(0, 0, 0, 2))
            .with_on_attack(militia_attack),
    );
    r.register(
        CardKind::new(MONEYLENDER, "Moneylender", Expansion::Base, 4)
            .with_tags(&[Tag::Action])
            .with_on_play(moneylender_play),
    );
    r.register(
        CardKind::new(REMODEL, "Remodel", Expansion::Base, 4)
            .with_tags(&[Tag::Action])
            .with_on_play(remodel_play),
    );
    r.register(
        CardKind::new(SMITHY, "Smithy", Expansion::Base, 4)
            .with_tags(&[Tag::Action])
            .with_yields(yields(3, 0, 0, 0)),
    );
    r.register(
        CardKind::new(SPY, "Spy", Expansion::Base, 4)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_yields(yields(1, 1, 0, 0))
            .with_on_play(spy_play)
            .with_on_attack(spy_attack),
    );
    r.register(
        CardKind::new(THIEF, "Thief", Expansion::Base, 4)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_on_attack(thief_attack),
    );
    r.register(
        CardKind::new(THRONE_ROOM, "Throne Room", Expansion::Base, 4)
            .with_tags(&[Tag::Action])
            .with_on_play(throne_room_play),
    );
    r.register(
        CardKind::new(COUNCIL_ROOM, "Council Room", Expansion::Base, 5)
            .with_tags(&[Tag::Action])
            .with_yields(yields(4, 0, 1, 0))
            .with_on_play(council_room_play),
    );
    r.register(
        CardKind::new(FESTIVAL, "Festival", Expansion::Base, 5)
            .with_tags(&[Tag::Action])
            .with_yields(yields(0, 2, 1, 2)),
    );
    r.register(
        CardKind::new(LABORATORY, "Laboratory", Expansion::Base, 5)
            .with_tags(&[Tag::Action])
            .with_yields(yields(2, 1, 0, 0)),
    );
    r.register(
        CardKind::new(LIBRARY, "Library", Expansion::Base, 5)
            .with_tags(&[Tag::Action])
            .with_on_play(library_play),
    );
    r.register(
        CardKind::new(MARKET, "Market", Expansion::Base, 5)
            .with_tags(&[Tag::Action])
            .with_yields(yields(1, 1, 1, 1)),
    );
    r.register(
        CardKind::new(WITCH, "Witch", Expansion::Base, 5)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_yields(yields(2, 0, 0, 0))
            .with_on_attack(witch_attack),
    );

    // Intrigue.
    r.register(
        CardKind::new(GREAT_HALL, "Great Hall", Expansion::Intrigue, 3)
            .with_tags(&[Tag::Action, Tag::Victory])
            .with_yields(yields(1, 1, 0, 0))
            .with_victory(1),
    );
    r.register(
        CardKind::new(MINION, "Minion", Expansion::Intrigue, 5)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_on_play(minion_play),
    );
    r.register(
        CardKind::new(NOBLES, "Nobles", Expansion::Intrigue, 6)
            .with_tags(&[Tag::Action, Tag::Victory])
            .with_victory(2)
            .with_on_play(nobles_play),
    );
    r.register(
        CardKind::new(HAREM, "Harem", Expansion::Intrigue, 6)
            .with_tags(&[Tag::Treasure, Tag::Victory])
            .with_yields(yields(0, 0, 0, 2))
            .with_victory(2),
    );

    // Seaside.
    r.register(
        CardKind::new(LIGHTHOUSE, "Lighthouse", Expansion::Seaside, 2)
            .with_tags(&[Tag::Action, Tag::Duration])
            .with_yields(yields(0, 1, 0, 1))
            .with_duration_yields(yields(0, 0, 0, 1)),
    );
    r.register(
        CardKind::new(FISHING_VILLAGE, "Fishing Village", Expansion::Seaside, 3)
            .with_tags(&[Tag::Action, Tag::Duration])
            .with_yields(yields(0, 2, 0, 1))
            .with_duration_yields(yields(0, 1, 0, 1)),
    );
    r.register(
        CardKind::new(CARAVAN, "Caravan", Expansion::Seaside, 4)
            .with_tags(&[Tag::Action, Tag::Duration])
            .with_yields(yields(1, 1, 0, 0))
            .with_duration_yields(yields(1, 0, 0, 0)),
    );
    r.register(
        CardKind::new(SALVAGER, "Salvager", Expansion::Seaside, 4)
            .with_tags(&[Tag::Action])
            .with_on_play(salvager_play),
    );
    r.register(
        CardKind::new(BAZAAR, "Bazaar", Expansion::Seaside, 5)
            .with_tags(&[Tag::Action])
            .with_yields(yields(1, 2, 0, 1)),
    );

    // Alchemy.
    r.register(
        CardKind::new(FAMILIAR, "Familiar", Expansion::Alchemy, 3)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_potion_cost()
            .with_yields(yields(1, 1, 0, 0))
            .with_on_attack(familiar_attack),
    );

    // Prosperity.
    r.register(
        CardKind::new(BISHOP, "Bishop", Expansion::Prosperity, 4)
            .with_tags(&[Tag::Action])
            .with_yields(yields(0, 0, 0, 1))
            .with_on_play(bishop_play),
    );
    r.register(
        CardKind::new(MONUMENT, "Monument", Expansion::Prosperity, 4)
            .with_tags(&[Tag::Action])
            .with_yields(yields(0, 0, 0, 2))
            .with_on_play(monument_play),
    );
    r.register(
        CardKind::new(WORKERS_VILLAGE, "Workers' Village", Expansion::Prosperity, 4)
            .with_tags(&[Tag::Action])
            .with_yields(yields(1, 2, 1, 0)),
    );
    r.register(
        CardKind::new(MOUNTEBANK, "Mountebank", Expansion::Prosperity, 5)
            .with_tags(&[Tag::Action, Tag::Attack])
            .with_yields(yields(0, 0, 0, 2))
            .with_on_attack(mountebank_attack),
    );
    r.register(
        CardKind::new(GRAND_MARKET, "Grand Market", Expansion::Prosperity, 6)
            .with_tags(&[Tag::Action])
            .with_yields(yields(1, 1, 1, 2))
            .with_buy_check(grand_market_can_buy),
    );
    r.register(
        CardKind::new(PEDDLER, "Peddler", Expansion::Prosperity, 8)
            .with_tags(&[Tag::Action])
            .with_yields(yields(1, 1, 0, 1))
            .with_dynamic_cost(peddler_cost),
    );

    // Cornucopia.
    r.register(
        CardKind::new(FAIRGROUNDS, "Fairgrounds", Expansion::Cornucopia, 6)
            .with_tags(&[Tag::Victory])
            .with_dynamic_victory(|collection| collection.unique_kinds() as i32 * 2),
    );

    r
}

// --- effect routines ---

fn cellar_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let cards = ctx.choose_cards(
        player,
        "Choose any number of cards to discard",
        CardsQuery::from_hand(),
    )?;
    let count = cards.len();
    for card in cards {
        ctx.discard(player, card)?;
    }
    ctx.draw(player, count);
    Ok(())
}

fn chapel_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let cards = ctx.choose_cards(
        player,
        "Choose up to 4 cards to trash",
        CardsQuery::from_hand().at_most(4),
    )?;
    for card in cards {
        ctx.trash(player, card)?;
    }
    Ok(())
}

fn moat_reaction(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    card: InstanceId,
) -> Result<(), GameError> {
    if !ctx.game().player(player).attack_prevented() && ctx.ask(player, "Reveal Moat?") {
        ctx.reveal(player, card);
        ctx.prevent_attack(player);
    }
    Ok(())
}

fn chancellor_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    if ctx.ask(player, "Immediately put deck into discard pile?") {
        for card in ctx.game().deck(player).to_vec() {
            ctx.discard(player, card)?;
        }
    }
    Ok(())
}

fn workshop_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_card(
        player,
        "Choose a card to gain",
        CardQuery::from_supply().max_cost(4).required(),
    )?;
    if let Some(kind) = choice.and_then(CardChoice::as_kind) {
        ctx.gain(player, kind)?;
    }
    Ok(())
}

fn bureaucrat_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    if ctx.game().supply_count(SILVER) > 0 {
        ctx.gain_to(player, SILVER, GainDest::DeckTop)?;
    }
    Ok(())
}

fn bureaucrat_attack(
    ctx: &mut EffectContext<'_>,
    _attacker: PlayerId,
    target: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_card(
        target,
        "Reveal a victory card to put on your deck",
        CardQuery::from_hand().tagged(Tag::Victory).required(),
    )?;
    if let Some(card) = choice.and_then(CardChoice::as_instance) {
        ctx.reveal(target, card);
        ctx.put_on_deck(target, card)?;
    }
    Ok(())
}

fn feast_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_card(
        player,
        "Choose a card to gain",
        CardQuery::from_supply().max_cost(5).required(),
    )?;
    if let Some(kind) = choice.and_then(CardChoice::as_kind) {
        ctx.gain(player, kind)?;
    }
    ctx.trash(player, card)
}

fn militia_attack(
    ctx: &mut EffectContext<'_>,
    _attacker: PlayerId,
    target: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let hand_size = ctx.game().hand(target).len();
    if hand_size > 3 {
        let count = hand_size - 3;
        let cards = ctx.choose_cards(
            target,
            &format!("Discard {count} cards"),
            CardsQuery::from_hand().exactly(count),
        )?;
        for card in cards {
            ctx.discard(target, card)?;
        }
    }
    Ok(())
}

fn moneylender_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let copper = ctx
        .game()
        .hand(player)
        .iter()
        .copied()
        .find(|card| ctx.game().kind_of(*card).id == COPPER);
    if let Some(copper) = copper {
        ctx.trash(player, copper)?;
        ctx.add_coins(player, 3);
    }
    Ok(())
}

fn remodel_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_card(
        player,
        "Choose a card to remodel",
        CardQuery::from_hand().required(),
    )?;
    let Some(old) = choice.and_then(CardChoice::as_instance) else {
        return Ok(());
    };
    let max_cost = ctx.game().cost_of(ctx.game().kind_of(old).id) + 2;
    let replacement = ctx.choose_card(
        player,
        &format!("Choose a card from the supply costing up to {max_cost}"),
        CardQuery::from_supply().max_cost(max_cost).required(),
    )?;
    ctx.trash(player, old)?;
    if let Some(kind) = replacement.and_then(CardChoice::as_kind) {
        ctx.gain(player, kind)?;
    }
    Ok(())
}

/// Shared top-of-deck inspection: stage, reveal, and let `chooser`
/// decide whether the card is discarded or put back.
fn spy_inspect(
    ctx: &mut EffectContext<'_>,
    chooser: PlayerId,
    owner: PlayerId,
) -> Result<(), GameError> {
    let Some(card) = ctx.stage_from_deck(owner) else {
        return Ok(());
    };
    ctx.reveal(owner, card);
    let choice = ctx.choose_one(
        chooser,
        "What happens to the revealed card?",
        &["Discard", "Put it back"],
    )?;
    if choice == 0 {
        ctx.discard(owner, card)
    } else {
        ctx.put_on_deck(owner, card)
    }
}

fn spy_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    spy_inspect(ctx, player, player)
}

fn spy_attack(
    ctx: &mut EffectContext<'_>,
    attacker: PlayerId,
    target: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    spy_inspect(ctx, attacker, target)
}

fn thief_attack(
    ctx: &mut EffectContext<'_>,
    attacker: PlayerId,
    target: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let mut staged = Vec::new();
    for _ in 0..2 {
        if let Some(card) = ctx.stage_from_deck(target) {
            ctx.reveal(target, card);
            staged.push(card);
        }
    }

    // Distinct treasure kinds among the revealed cards; one instance
    // stands for each kind.
    let mut kinds: Vec<CardTypeId> = Vec::new();
    let mut instances: Vec<InstanceId> = Vec::new();
    for &card in &staged {
        let kind = ctx.game().kind_of(card);
        if kind.is_treasure() && !kinds.contains(&kind.id) {
            kinds.push(kind.id);
            instances.push(card);
        }
    }

    let mut trashed = None;
    if !kinds.is_empty() {
        let names: Vec<String> = kinds
            .iter()
            .map(|kind| ctx.game().registry().kind(*kind).name.clone())
            .collect();
        let labels: Vec<&str> = names.iter().map(String::as_str).collect();
        let index = ctx.choose_one(attacker, "Choose a treasure to trash", &labels)?;
        let victim = instances[index];
        ctx.trash(target, victim)?;
        trashed = Some(victim);
        if ctx.ask(attacker, &format!("Gain a {}?", names[index])) {
            // The trashed copy stays in the trash; the attacker gains a
            // fresh copy from the supply, if one is left.
            ctx.try_gain(attacker, kinds[index])?;
        }
    }

    for card in staged {
        if trashed != Some(card) {
            ctx.discard(target, card)?;
        }
    }
    Ok(())
}

fn throne_room_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_card(
        player,
        "Choose an action card to play twice",
        CardQuery::from_hand().tagged(Tag::Action).required(),
    )?;
    let Some(target) = choice.and_then(CardChoice::as_instance) else {
        return Ok(());
    };
    ctx.play_from_hand(player, target)?;
    ctx.replay(player, target)
}

fn council_room_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    for other in ctx.game().other_players(player) {
        ctx.draw(other, 1);
    }
    Ok(())
}

fn library_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let mut set_aside = Vec::new();
    while ctx.game().hand(player).len() < 7 {
        let Some(card) = ctx.stage_from_deck(player) else {
            break;
        };
        let kind = ctx.game().kind_of(card);
        let (is_action, name) = (kind.is_action(), kind.name.clone());
        if is_action && ctx.ask(player, &format!("Set aside {name}?")) {
            set_aside.push(card);
        } else {
            ctx.put_in_hand(player, card)?;
        }
    }
    for card in set_aside {
        ctx.discard(player, card)?;
    }
    Ok(())
}

fn witch_attack(
    ctx: &mut EffectContext<'_>,
    _attacker: PlayerId,
    target: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    ctx.try_gain(target, CURSE)?;
    Ok(())
}

fn minion_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_one(
        player,
        "Minion",
        &["+2 coins", "Discard hand and draw 4"],
    )?;
    if choice == 0 {
        ctx.add_coins(player, 2);
    } else {
        ctx.discard_hand(player);
        ctx.draw(player, 4);
        ctx.resolve_attack(player, |ctx, target| {
            if ctx.game().hand(target).len() > 4 {
                ctx.discard_hand(target);
                ctx.draw(target, 4);
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn nobles_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_one(player, "Nobles", &["+2 actions", "+3 cards"])?;
    if choice == 0 {
        ctx.add_actions(player, 2);
    } else {
        ctx.draw(player, 3);
    }
    Ok(())
}

fn salvager_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let choice = ctx.choose_card(player, "Choose a card to trash", CardQuery::from_hand())?;
    if let Some(card) = choice.and_then(CardChoice::as_instance) {
        let worth = ctx.game().cost_of(ctx.game().kind_of(card).id);
        ctx.add_coins(player, worth);
        ctx.trash(player, card)?;
    }
    Ok(())
}

fn familiar_attack(
    ctx: &mut EffectContext<'_>,
    _attacker: PlayerId,
    target: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    ctx.try_gain(target, CURSE)?;
    Ok(())
}

fn bishop_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    ctx.add_vp_tokens(player, 1);
    let choice = ctx.choose_card(player, "Choose a card to trash", CardQuery::from_hand())?;
    if let Some(card) = choice.and_then(CardChoice::as_instance) {
        let cost = ctx.game().cost_of(ctx.game().kind_of(card).id);
        ctx.add_vp_tokens(player, (cost / 2) as i32);
        ctx.trash(player, card)?;
    }
    Ok(())
}

fn monument_play(
    ctx: &mut EffectContext<'_>,
    player: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    ctx.add_vp_tokens(player, 1);
    Ok(())
}

fn mountebank_attack(
    ctx: &mut EffectContext<'_>,
    _attacker: PlayerId,
    target: PlayerId,
    _card: InstanceId,
) -> Result<(), GameError> {
    let curse = ctx
        .game()
        .hand(target)
        .iter()
        .copied()
        .find(|card| ctx.game().kind_of(*card).id == CURSE);
    if let Some(curse) = curse {
        ctx.reveal(target, curse);
        ctx.discard(target, curse)?;
    } else {
        ctx.try_gain(target, CURSE)?;
        ctx.try_gain(target, COPPER)?;
    }
    Ok(())
}

fn grand_market_can_buy(game: &Game, player: PlayerId) -> bool {
    !game
        .play_area(player)
        .iter()
        .any(|card| game.kind_of(*card).id == COPPER)
}

fn peddler_cost(game: &Game) -> u32 {
    if game.phase() == Phase::Buy {
        let player = game.current_player();
        let actions_in_play = game
            .play_area(player)
            .iter()
            .filter(|card| game.kind_of(**card).is_action())
            .count() as u32;
        8u32.saturating_sub(2 * actions_in_play)
    } else {
        8
    }
}
