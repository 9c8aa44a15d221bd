//! Card kinds, instances, and the catalog registry.

pub mod base_set;
pub mod instance;
pub mod kind;
pub mod registry;

pub use instance::{CardInstance, InstanceId};
pub use kind::{
    AttackFn, BuyCheckFn, CardKind, CardTypeId, CostRule, EffectFn, Expansion, ReactionFn, Tag,
    VictoryRule, Yields,
};
pub use registry::CardRegistry;
