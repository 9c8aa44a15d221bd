//! Behavior of the catalog's scripted cards: effects, attacks,
//! reactions, duplication, dynamic costs and dynamic victory.

mod common;

use common::*;
use provincial::base_set;
use provincial::{
    Answer, CardChoice, Decliner, GainDest, GameError, Scripted,
};

#[test]
fn test_cellar_discards_then_redraws() {
    let mut game = staged_game(&[base_set::CELLAR], 21);
    let hand = give_hand(
        &mut game,
        P0,
        &[base_set::CELLAR, base_set::ESTATE, base_set::ESTATE],
    );
    stack_deck(&mut game, P0, &[base_set::SILVER, base_set::SILVER]);
    let script = Scripted::new([Answer::Cards(vec![hand[1], hand[2]])]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.player(P0).actions(), 1);
    assert_eq!(game.hand(P0).len(), 2);
    assert!(game
        .hand(P0)
        .iter()
        .all(|c| game.kind_of(*c).id == base_set::SILVER));
    assert!(game.discard_pile(P0).contains(&hand[1]));
    assert!(game.discard_pile(P0).contains(&hand[2]));
}

#[test]
fn test_chapel_trashes_up_to_four() {
    let mut game = staged_game(&[base_set::CHAPEL], 22);
    let hand = give_hand(
        &mut game,
        P0,
        &[
            base_set::CHAPEL,
            base_set::COPPER,
            base_set::COPPER,
            base_set::COPPER,
            base_set::ESTATE,
        ],
    );
    let script = Scripted::new([Answer::Cards(vec![hand[1], hand[2], hand[3], hand[4]])]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().trash().len(), 4);
    assert!(engine.game().hand(P0).is_empty());
}

#[test]
fn test_moat_prevents_militia() {
    let mut game = staged_game(&[base_set::MILITIA, base_set::MOAT], 23);
    let attacker = give_hand(&mut game, P0, &[base_set::MILITIA]);
    give_hand(
        &mut game,
        P1,
        &[
            base_set::MOAT,
            base_set::COPPER,
            base_set::COPPER,
            base_set::COPPER,
            base_set::COPPER,
        ],
    );
    let defender = Scripted::new([Answer::Bool(true)]);
    let mut engine = started(game, Decliner, defender);

    engine.play_action(attacker[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.player(P0).coins(), 2);
    assert_eq!(game.hand(P1).len(), 5);
    // The prevented flag is scoped to the attack that set it.
    assert!(!game.player(P1).attack_prevented());
}

#[test]
fn test_militia_forces_discard_to_three() {
    let mut game = staged_game(&[base_set::MILITIA], 24);
    let attacker = give_hand(&mut game, P0, &[base_set::MILITIA]);
    give_hand(&mut game, P1, &[base_set::COPPER; 5]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(attacker[0]).unwrap();
    assert_eq!(engine.game().hand(P1).len(), 3);
    assert_eq!(engine.game().discard_pile(P1).len(), 2);
}

#[test]
fn test_witch_hands_out_curses() {
    let mut game = staged_game(&[base_set::WITCH], 25);
    let hand = give_hand(&mut game, P0, &[base_set::WITCH]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.discard_pile(P1).len(), 1);
    assert_eq!(game.kind_of(game.discard_pile(P1)[0]).id, base_set::CURSE);
    assert_eq!(game.supply_count(base_set::CURSE), 9);
}

#[test]
fn test_witch_skips_empty_curse_pile() {
    let mut game = staged_game(&[base_set::WITCH], 26);
    for _ in 0..10 {
        game.gain_from_supply(P0, base_set::CURSE, GainDest::Discard)
            .unwrap();
    }
    let hand = give_hand(&mut game, P0, &[base_set::WITCH]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert!(engine.game().discard_pile(P1).is_empty());
}

#[test]
fn test_reaction_shields_only_its_holder() {
    let mut game = staged_game_for(3, &[base_set::WITCH, base_set::MOAT], 28);
    let hand = give_hand(&mut game, P0, &[base_set::WITCH]);
    give_hand(&mut game, P1, &[base_set::MOAT]);
    let defender = Scripted::new([Answer::Bool(true)]);
    let mut engine = started_three(game, Decliner, defender, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert!(game.discard_pile(P1).is_empty());
    assert_eq!(game.discard_pile(P2).len(), 1);
    assert_eq!(game.kind_of(game.discard_pile(P2)[0]).id, base_set::CURSE);
    assert_eq!(game.supply_count(base_set::CURSE), 19);
    assert!(!game.player(P1).attack_prevented());
    assert!(!game.player(P2).attack_prevented());
}

#[test]
fn test_reaction_covers_one_attack_at_a_time() {
    let mut game = staged_game(&[base_set::WITCH, base_set::MOAT, base_set::VILLAGE], 29);
    let hand = give_hand(
        &mut game,
        P0,
        &[base_set::VILLAGE, base_set::WITCH, base_set::WITCH],
    );
    give_hand(&mut game, P1, &[base_set::MOAT]);
    // Reveal against the first attack, decline against the second.
    let defender = Scripted::new([Answer::Bool(true), Answer::Bool(false)]);
    let mut engine = started(game, Decliner, defender);

    engine.play_action(hand[0]).unwrap();
    engine.play_action(hand[1]).unwrap();
    engine.play_action(hand[2]).unwrap();

    let game = engine.game();
    assert_eq!(game.discard_pile(P1).len(), 1);
    assert_eq!(game.kind_of(game.discard_pile(P1)[0]).id, base_set::CURSE);
    assert_eq!(game.supply_count(base_set::CURSE), 9);
    assert!(!game.player(P1).attack_prevented());
}

#[test]
fn test_feast_gains_then_trashes_itself() {
    let mut game = staged_game(&[base_set::FEAST], 27);
    let hand = give_hand(&mut game, P0, &[base_set::FEAST]);
    let script = Scripted::new([Answer::Card(Some(CardChoice::Kind(base_set::DUCHY)))]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.discard_pile(P0).len(), 1);
    assert_eq!(game.kind_of(game.discard_pile(P0)[0]).id, base_set::DUCHY);
    assert!(game.trash().contains(&hand[0]));
    assert!(game.play_area(P0).is_empty());
}

#[test]
fn test_throne_room_doubles_smithy() {
    let mut game = staged_game(&[base_set::THRONE_ROOM, base_set::SMITHY], 28);
    let hand = give_hand(&mut game, P0, &[base_set::THRONE_ROOM, base_set::SMITHY]);
    stack_deck(&mut game, P0, &[base_set::COPPER; 6]);
    let script = Scripted::new([Answer::Card(Some(CardChoice::Instance(hand[1])))]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.hand(P0).len(), 6);
    assert!(game.play_area(P0).contains(&hand[0]));
    assert!(game.play_area(P0).contains(&hand[1]));
}

#[test]
fn test_throne_room_feast_replays_as_noop() {
    let mut game = staged_game(&[base_set::THRONE_ROOM, base_set::FEAST], 29);
    let hand = give_hand(&mut game, P0, &[base_set::THRONE_ROOM, base_set::FEAST]);
    let script = Scripted::new([
        Answer::Card(Some(CardChoice::Instance(hand[1]))),
        Answer::Card(Some(CardChoice::Kind(base_set::DUCHY))),
    ]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    // The Feast trashed itself during the first resolution; the replay
    // finds it gone and does nothing, so exactly one Duchy was gained.
    let game = engine.game();
    assert_eq!(game.supply_count(base_set::DUCHY), 7);
    assert!(game.trash().contains(&hand[1]));
}

#[test]
fn test_workshop_gain_is_cost_capped() {
    let mut game = staged_game(&[base_set::WORKSHOP], 30);
    let hand = give_hand(&mut game, P0, &[base_set::WORKSHOP]);
    let script = Scripted::new([Answer::Card(Some(CardChoice::Kind(base_set::GOLD)))]);
    let mut engine = started(game, script, Decliner);

    // Gold costs 6, over Workshop's cap of 4.
    let err = engine.play_action(hand[0]).unwrap_err();
    assert!(matches!(err, GameError::ConstraintViolation { .. }));
}

#[test]
fn test_bureaucrat() {
    let mut game = staged_game(&[base_set::BUREAUCRAT], 31);
    let attacker = give_hand(&mut game, P0, &[base_set::BUREAUCRAT]);
    let victim_hand = give_hand(&mut game, P1, &[base_set::ESTATE, base_set::COPPER]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(attacker[0]).unwrap();

    let game = engine.game();
    // A Silver lands on the attacker's deck.
    let top = *game.deck(P0).last().unwrap();
    assert_eq!(game.kind_of(top).id, base_set::SILVER);
    // The victim's Estate went from hand to deck top.
    assert_eq!(game.deck(P1).last(), Some(&victim_hand[0]));
    assert_eq!(game.hand(P1), &[victim_hand[1]]);
}

#[test]
fn test_chancellor_dumps_deck() {
    let mut game = staged_game(&[base_set::CHANCELLOR], 32);
    let hand = give_hand(&mut game, P0, &[base_set::CHANCELLOR]);
    stack_deck(&mut game, P0, &[base_set::COPPER; 3]);
    let script = Scripted::new([Answer::Bool(true)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.player(P0).coins(), 2);
    assert!(game.deck(P0).is_empty());
    assert_eq!(game.discard_pile(P0).len(), 3);
}

#[test]
fn test_moneylender() {
    let mut game = staged_game(&[base_set::MONEYLENDER], 33);
    let hand = give_hand(&mut game, P0, &[base_set::MONEYLENDER, base_set::COPPER]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().player(P0).coins(), 3);
    assert!(engine.game().trash().contains(&hand[1]));
}

#[test]
fn test_moneylender_without_copper() {
    let mut game = staged_game(&[base_set::MONEYLENDER], 34);
    let hand = give_hand(&mut game, P0, &[base_set::MONEYLENDER, base_set::ESTATE]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().player(P0).coins(), 0);
    assert!(engine.game().trash().is_empty());
}

#[test]
fn test_remodel() {
    let mut game = staged_game(&[base_set::REMODEL], 35);
    let hand = give_hand(&mut game, P0, &[base_set::REMODEL, base_set::ESTATE]);
    let script = Scripted::new([
        Answer::Card(Some(CardChoice::Instance(hand[1]))),
        Answer::Card(Some(CardChoice::Kind(base_set::SILVER))),
    ]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert!(game.trash().contains(&hand[1]));
    assert_eq!(game.discard_pile(P0).len(), 1);
    assert_eq!(game.kind_of(game.discard_pile(P0)[0]).id, base_set::SILVER);
}

#[test]
fn test_spy_inspects_every_deck() {
    let mut game = staged_game(&[base_set::SPY], 36);
    let hand = give_hand(&mut game, P0, &[base_set::SPY]);
    let own_deck = stack_deck(&mut game, P0, &[base_set::SILVER, base_set::COPPER]);
    let their_deck = stack_deck(&mut game, P1, &[base_set::ESTATE]);
    // The attacker decides for every inspected deck: discard their own
    // revealed Silver, put the victim's Estate back.
    let script = Scripted::new([Answer::Index(0), Answer::Index(1)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    // +1 card drew the Copper off the top first.
    assert_eq!(game.hand(P0), &[own_deck[1]]);
    assert!(game.discard_pile(P0).contains(&own_deck[0]));
    assert_eq!(game.deck(P1), &[their_deck[0]]);
}

#[test]
fn test_thief_trashes_and_copies_a_treasure() {
    let mut game = staged_game(&[base_set::THIEF], 37);
    let hand = give_hand(&mut game, P0, &[base_set::THIEF]);
    let their_deck = stack_deck(&mut game, P1, &[base_set::COPPER, base_set::SILVER]);
    let script = Scripted::new([Answer::Index(0), Answer::Bool(true)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    // The victim's Silver is trashed for good; the attacker gains a
    // fresh copy from the supply.
    assert!(game.trash().contains(&their_deck[1]));
    assert_eq!(game.discard_pile(P0).len(), 1);
    assert_eq!(game.kind_of(game.discard_pile(P0)[0]).id, base_set::SILVER);
    assert_eq!(game.discard_pile(P1), &[their_deck[0]]);
    assert!(game.deck(P1).is_empty());
}

#[test]
fn test_library_draws_to_seven_setting_actions_aside() {
    let mut game = staged_game(&[base_set::LIBRARY, base_set::VILLAGE], 38);
    let hand = give_hand(
        &mut game,
        P0,
        &[base_set::LIBRARY, base_set::COPPER, base_set::COPPER],
    );
    let deck = stack_deck(
        &mut game,
        P0,
        &[
            base_set::COPPER,
            base_set::COPPER,
            base_set::COPPER,
            base_set::COPPER,
            base_set::VILLAGE,
            base_set::COPPER,
        ],
    );
    let script = Scripted::new([Answer::Bool(true)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.hand(P0).len(), 7);
    assert!(game.discard_pile(P0).contains(&deck[4]));
    assert!(game.deck(P0).is_empty());
}

#[test]
fn test_minion_coins_branch() {
    let mut game = staged_game(&[base_set::MINION], 39);
    let hand = give_hand(&mut game, P0, &[base_set::MINION]);
    let script = Scripted::new([Answer::Index(0)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().player(P0).coins(), 2);
}

#[test]
fn test_minion_discard_branch_attacks_big_hands() {
    let mut game = staged_game(&[base_set::MINION], 40);
    let hand = give_hand(&mut game, P0, &[base_set::MINION, base_set::COPPER]);
    stack_deck(&mut game, P0, &[base_set::COPPER; 4]);
    give_hand(&mut game, P1, &[base_set::COPPER; 5]);
    stack_deck(&mut game, P1, &[base_set::COPPER; 4]);
    let script = Scripted::new([Answer::Index(1)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.hand(P0).len(), 4);
    assert_eq!(game.hand(P1).len(), 4);
    assert_eq!(game.discard_pile(P1).len(), 5);
}

#[test]
fn test_minion_discard_branch_spares_small_hands() {
    let mut game = staged_game(&[base_set::MINION], 41);
    let hand = give_hand(&mut game, P0, &[base_set::MINION]);
    give_hand(&mut game, P1, &[base_set::COPPER; 3]);
    let script = Scripted::new([Answer::Index(1)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().hand(P1).len(), 3);
    assert!(engine.game().discard_pile(P1).is_empty());
}

#[test]
fn test_nobles_choice() {
    let mut game = staged_game(&[base_set::NOBLES], 42);
    let hand = give_hand(&mut game, P0, &[base_set::NOBLES, base_set::NOBLES]);
    stack_deck(&mut game, P0, &[base_set::COPPER; 3]);
    let script = Scripted::new([Answer::Index(0), Answer::Index(1)]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().player(P0).actions(), 2);

    engine.play_action(hand[1]).unwrap();
    assert_eq!(engine.game().hand(P0).len(), 3);
}

#[test]
fn test_council_room_draws_for_everyone() {
    let mut game = staged_game(&[base_set::COUNCIL_ROOM], 43);
    let hand = give_hand(&mut game, P0, &[base_set::COUNCIL_ROOM]);
    stack_deck(&mut game, P0, &[base_set::COPPER; 5]);
    stack_deck(&mut game, P1, &[base_set::COPPER; 2]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.hand(P0).len(), 4);
    assert_eq!(game.player(P0).buys(), 2);
    assert_eq!(game.hand(P1).len(), 1);
}

#[test]
fn test_bishop_converts_a_trash_into_tokens() {
    let mut game = staged_game(&[base_set::BISHOP], 44);
    let hand = give_hand(&mut game, P0, &[base_set::BISHOP, base_set::SILVER]);
    let script = Scripted::new([Answer::Card(Some(CardChoice::Instance(hand[1])))]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    // One base token plus half the Silver's cost, rounded down.
    assert_eq!(game.player(P0).vp_tokens(), 2);
    assert_eq!(game.player(P0).coins(), 1);
    assert!(game.trash().contains(&hand[1]));
}

#[test]
fn test_monument_tokens_count_toward_score() {
    let mut game = staged_game(&[base_set::MONUMENT], 45);
    let hand = give_hand(&mut game, P0, &[base_set::MONUMENT]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().player(P0).vp_tokens(), 1);
    assert_eq!(engine.game().score(P0), 1);
}

#[test]
fn test_salvager_pays_out_the_trashed_cost() {
    let mut game = staged_game(&[base_set::SALVAGER], 46);
    let hand = give_hand(&mut game, P0, &[base_set::SALVAGER, base_set::GOLD]);
    let script = Scripted::new([Answer::Card(Some(CardChoice::Instance(hand[1])))]);
    let mut engine = started(game, script, Decliner);

    engine.play_action(hand[0]).unwrap();
    assert_eq!(engine.game().player(P0).coins(), 6);
    assert!(engine.game().trash().contains(&hand[1]));
}

#[test]
fn test_mountebank_discards_a_revealed_curse() {
    let mut game = staged_game(&[base_set::MOUNTEBANK], 47);
    let hand = give_hand(&mut game, P0, &[base_set::MOUNTEBANK]);
    let curse = give_hand(&mut game, P1, &[base_set::CURSE]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    assert_eq!(game.discard_pile(P1), &[curse[0]]);
    // Nothing was gained.
    assert_eq!(game.collection(P1).total(), 1);
}

#[test]
fn test_mountebank_curses_and_coppers_otherwise() {
    let mut game = staged_game(&[base_set::MOUNTEBANK], 48);
    let hand = give_hand(&mut game, P0, &[base_set::MOUNTEBANK]);
    let mut engine = started(game, Decliner, Decliner);

    engine.play_action(hand[0]).unwrap();

    let game = engine.game();
    let gained: Vec<_> = game
        .discard_pile(P1)
        .iter()
        .map(|c| game.kind_of(*c).id)
        .collect();
    assert_eq!(gained, vec![base_set::CURSE, base_set::COPPER]);
}

#[test]
fn test_peddler_cost_shrinks_with_actions_in_play() {
    let mut kingdom = vec![base_set::PEDDLER, base_set::VILLAGE];
    kingdom.extend_from_slice(&standard_kingdom()[..2]);
    let game = staged_game(&kingdom, 49);
    let mut engine = started(game, Decliner, Decliner);

    // Outside the buy phase the cost is the full eight.
    assert_eq!(engine.game().cost_of(base_set::PEDDLER), 8);

    engine.end_action_phase().unwrap();
    assert_eq!(engine.game().cost_of(base_set::PEDDLER), 8);

    let villages = give_hand(engine.game_mut(), P0, &[base_set::VILLAGE; 5]);
    for (i, village) in villages.iter().enumerate() {
        engine.game_mut().put_in_play(P0, *village).unwrap();
        let expected = 8u32.saturating_sub(2 * (i as u32 + 1));
        assert_eq!(engine.game().cost_of(base_set::PEDDLER), expected);
    }
    // Five actions in play: clamped at zero, never negative.
    assert_eq!(engine.game().cost_of(base_set::PEDDLER), 0);
}

#[test]
fn test_gardens_counts_the_whole_collection() {
    let mut game = staged_game(&[base_set::GARDENS], 50);
    give_hand(&mut game, P0, &[base_set::GARDENS; 7]);
    for _ in 0..31 {
        game.gain_from_supply(P0, base_set::COPPER, GainDest::Discard)
            .unwrap();
    }

    // 38 cards total: each Gardens is worth 3.
    assert_eq!(game.collection(P0).total(), 38);
    assert_eq!(game.score(P0), 21);
}

#[test]
fn test_fairgrounds_rewards_variety() {
    let mut game = staged_game(&[base_set::FAIRGROUNDS], 51);
    give_hand(
        &mut game,
        P0,
        &[
            base_set::FAIRGROUNDS,
            base_set::COPPER,
            base_set::SILVER,
            base_set::GOLD,
            base_set::ESTATE,
        ],
    );

    // Five distinct kinds: the Fairgrounds scores ten, the Estate one.
    assert_eq!(game.score(P0), 11);
}

#[test]
fn test_grand_market_refuses_copper_money() {
    let mut game = staged_game(&[base_set::GRAND_MARKET], 52);
    give_hand(
        &mut game,
        P0,
        &[base_set::COPPER, base_set::GOLD, base_set::GOLD],
    );
    let mut engine = started(game, Decliner, Decliner);
    engine.end_action_phase().unwrap();
    engine.play_all_treasures().unwrap();

    assert_eq!(engine.game().player(P0).coins(), 7);
    let err = engine.buy(base_set::GRAND_MARKET).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
    // The refused buy left everything untouched.
    assert_eq!(engine.game().player(P0).coins(), 7);
    assert_eq!(engine.game().player(P0).buys(), 1);
}

#[test]
fn test_grand_market_buys_without_copper() {
    let mut game = staged_game(&[base_set::GRAND_MARKET], 53);
    give_hand(&mut game, P0, &[base_set::GOLD, base_set::GOLD]);
    let mut engine = started(game, Decliner, Decliner);
    engine.end_action_phase().unwrap();
    engine.play_all_treasures().unwrap();

    let card = engine.buy(base_set::GRAND_MARKET).unwrap();
    assert!(engine.game().discard_pile(P0).contains(&card));
}
