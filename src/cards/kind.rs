//! Card kinds - the immutable per-type catalog entries.
//!
//! A `CardKind` holds everything that is true of every copy of a card:
//! its tags, its cost rule, its fixed yields, its victory rule, and its
//! trigger routines. Instance-specific data (where a copy currently is)
//! lives in [`CardInstance`](super::CardInstance) and the zone ledger.
//!
//! Kinds are built once into a [`CardRegistry`](super::CardRegistry) at
//! match setup and never mutated afterwards. Effect routines are plain
//! function pointers dispatched by kind identity; a missing slot is a
//! no-op.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::InstanceId;
use crate::core::{GameError, PlayerId};
use crate::effects::EffectContext;
use crate::game::{Collection, Game};

/// Unique identifier for a card kind.
///
/// Identifies the type of a card (e.g. "Village"), not a specific copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTypeId(pub u32);

impl CardTypeId {
    /// Create a new card type ID.
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

impl std::fmt::Display for CardTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// Role tags a kind can carry. A kind may carry several.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Always-available basic card (treasures and victory cards of the
    /// common pool, plus Curse).
    Base,
    /// Playable during the buy phase for coins.
    Treasure,
    /// Scores victory points at game end.
    Victory,
    /// Negative victory card.
    Curse,
    /// Playable during the action phase.
    Action,
    /// Affects the other players when played.
    Attack,
    /// May be revealed from hand to respond to an attack.
    Reaction,
    /// Stays in play across the owner's next turn.
    Duration,
}

/// Which published set a kind belongs to.
///
/// Used by random roster selection and the extended-tier decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expansion {
    Base,
    Intrigue,
    Seaside,
    Alchemy,
    Prosperity,
    Cornucopia,
}

/// Fixed yields applied when a copy of the kind is played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yields {
    /// Cards drawn.
    pub cards: u32,
    /// Actions granted.
    pub actions: u32,
    /// Buys granted.
    pub buys: u32,
    /// Coins granted.
    pub coins: u32,
    /// Potions (the premium currency) granted.
    pub potions: u32,
}

/// How a kind's acquisition cost is determined.
///
/// Dynamic costs are recomputed at the moment of use (browsing the
/// supply, buying), never cached. The function receives read-only access
/// to the match state.
#[derive(Clone, Copy)]
pub enum CostRule {
    /// A fixed coin cost.
    Fixed(u32),
    /// A cost computed from the current match state.
    Dynamic(fn(&Game) -> u32),
}

impl std::fmt::Debug for CostRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostRule::Fixed(c) => write!(f, "Fixed({c})"),
            CostRule::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

/// How a kind scores victory points.
///
/// Dynamic values are computed over the owning player's full collection
/// across all zones at scoring time.
#[derive(Clone, Copy)]
pub enum VictoryRule {
    /// A fixed per-copy value. Zero for non-victory kinds.
    Fixed(i32),
    /// A per-copy value computed from the owner's collection.
    Dynamic(fn(&Collection<'_>) -> i32),
}

impl std::fmt::Debug for VictoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VictoryRule::Fixed(v) => write!(f, "Fixed({v})"),
            VictoryRule::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

/// Effect routine invoked for a card's own side: on-play, on-buy,
/// on-gain, and the limited next-turn duration effect.
pub type EffectFn =
    fn(&mut EffectContext<'_>, PlayerId, InstanceId) -> Result<(), GameError>;

/// Attack routine, invoked once per targeted player after that player's
/// reaction opportunity. Arguments: context, attacker, target, the
/// attacking card.
pub type AttackFn =
    fn(&mut EffectContext<'_>, PlayerId, PlayerId, InstanceId) -> Result<(), GameError>;

/// Reaction routine, invoked on a card in a targeted player's hand when
/// an attack reaches that player. Arguments: context, the targeted
/// player, the reaction card.
pub type ReactionFn =
    fn(&mut EffectContext<'_>, PlayerId, InstanceId) -> Result<(), GameError>;

/// Purchase restriction checked before any part of a buy mutates state.
pub type BuyCheckFn = fn(&Game, PlayerId) -> bool;

/// Immutable catalog entry for one kind of card.
#[derive(Clone, Debug)]
pub struct CardKind {
    /// Unique identifier.
    pub id: CardTypeId,

    /// Display name.
    pub name: String,

    /// Set this kind belongs to.
    pub expansion: Expansion,

    /// Role tags. Rarely more than two or three per kind.
    pub tags: SmallVec<[Tag; 4]>,

    /// Acquisition cost rule.
    pub cost: CostRule,

    /// Whether buying this kind additionally requires a potion.
    pub potion_cost: bool,

    /// Yields applied on play.
    pub yields: Yields,

    /// Yields applied at the start of the owner's next turn, for
    /// duration kinds.
    pub duration_yields: Yields,

    /// Victory rule.
    pub victory: VictoryRule,

    /// Purchase restriction; `None` means always buyable.
    pub can_buy: Option<BuyCheckFn>,

    /// Scripted on-play routine.
    pub on_play: Option<EffectFn>,

    /// On-buy routine, invoked as part of a buy.
    pub on_buy: Option<EffectFn>,

    /// On-gain routine, invoked after a gained copy is resident in its
    /// destination zone.
    pub on_gain: Option<EffectFn>,

    /// Per-target attack routine.
    pub on_attack: Option<AttackFn>,

    /// Reaction routine for cards held in an attacked player's hand.
    pub on_reaction: Option<ReactionFn>,

    /// Limited next-turn routine for duration kinds.
    pub on_duration: Option<EffectFn>,
}

impl CardKind {
    /// Create a kind with the given identity, name, set and fixed cost.
    ///
    /// Everything else defaults to empty/no-op; chain the `with_*`
    /// builders to fill it in.
    #[must_use]
    pub fn new(
        id: CardTypeId,
        name: impl Into<String>,
        expansion: Expansion,
        cost: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            expansion,
            tags: SmallVec::new(),
            cost: CostRule::Fixed(cost),
            potion_cost: false,
            yields: Yields::default(),
            duration_yields: Yields::default(),
            victory: VictoryRule::Fixed(0),
            can_buy: None,
            on_play: None,
            on_buy: None,
            on_gain: None,
            on_attack: None,
            on_reaction: None,
            on_duration: None,
        }
    }

    /// Add role tags.
    #[must_use]
    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.tags.extend_from_slice(tags);
        self
    }

    /// Replace the fixed cost with a dynamic cost function.
    #[must_use]
    pub fn with_dynamic_cost(mut self, cost: fn(&Game) -> u32) -> Self {
        self.cost = CostRule::Dynamic(cost);
        self
    }

    /// Require a potion in addition to coins when buying.
    #[must_use]
    pub fn with_potion_cost(mut self) -> Self {
        self.potion_cost = true;
        self
    }

    /// Set the on-play yields.
    #[must_use]
    pub fn with_yields(mut self, yields: Yields) -> Self {
        self.yields = yields;
        self
    }

    /// Set the next-turn yields for a duration kind.
    #[must_use]
    pub fn with_duration_yields(mut self, yields: Yields) -> Self {
        self.duration_yields = yields;
        self
    }

    /// Set a fixed victory value.
    #[must_use]
    pub fn with_victory(mut self, points: i32) -> Self {
        self.victory = VictoryRule::Fixed(points);
        self
    }

    /// Set a collection-dependent victory function.
    #[must_use]
    pub fn with_dynamic_victory(mut self, points: fn(&Collection<'_>) -> i32) -> Self {
        self.victory = VictoryRule::Dynamic(points);
        self
    }

    /// Set a purchase restriction.
    #[must_use]
    pub fn with_buy_check(mut self, check: BuyCheckFn) -> Self {
        self.can_buy = Some(check);
        self
    }

    /// Set the scripted on-play routine.
    #[must_use]
    pub fn with_on_play(mut self, f: EffectFn) -> Self {
        self.on_play = Some(f);
        self
    }

    /// Set the on-buy routine.
    #[must_use]
    pub fn with_on_buy(mut self, f: EffectFn) -> Self {
        self.on_buy = Some(f);
        self
    }

    /// Set the on-gain routine.
    #[must_use]
    pub fn with_on_gain(mut self, f: EffectFn) -> Self {
        self.on_gain = Some(f);
        self
    }

    /// Set the per-target attack routine.
    #[must_use]
    pub fn with_on_attack(mut self, f: AttackFn) -> Self {
        self.on_attack = Some(f);
        self
    }

    /// Set the reaction routine.
    #[must_use]
    pub fn with_on_reaction(mut self, f: ReactionFn) -> Self {
        self.on_reaction = Some(f);
        self
    }

    /// Set the limited next-turn routine.
    #[must_use]
    pub fn with_on_duration(mut self, f: EffectFn) -> Self {
        self.on_duration = Some(f);
        self
    }

    /// Check whether this kind carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Is this an action card?
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.has_tag(Tag::Action)
    }

    /// Is this a treasure card?
    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.has_tag(Tag::Treasure)
    }

    /// Is this a victory card?
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.has_tag(Tag::Victory)
    }

    /// Is this a kingdom kind (anything outside the common pool)?
    #[must_use]
    pub fn is_kingdom(&self) -> bool {
        !self.has_tag(Tag::Base) && !self.has_tag(Tag::Curse)
    }

    /// The fixed cost if the rule is fixed.
    ///
    /// Dynamic costs need a game to evaluate against; use
    /// [`Game::cost_of`](crate::game::Game::cost_of) at the moment of use.
    #[must_use]
    pub fn base_cost(&self) -> u32 {
        match self.cost {
            CostRule::Fixed(c) => c,
            CostRule::Dynamic(_) => 0,
        }
    }
}
