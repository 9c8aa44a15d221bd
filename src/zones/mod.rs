//! Zones and the single-owner card ledger.

pub mod ledger;

pub use ledger::{Ledger, Zone};
