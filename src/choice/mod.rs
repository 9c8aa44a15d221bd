//! The choice protocol: queries, answers, and the Strategy trait.

pub mod query;
pub mod strategy;

pub use query::{CardChoice, CardQuery, CardsQuery, ChoiceSource};
pub use strategy::{Answer, Decliner, FirstPick, Scripted, Strategy};
