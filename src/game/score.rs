//! End-of-match scoring over a player's full collection.
//!
//! A `Collection` is a snapshot of every card a player owns, counted by
//! kind across all six owned zones. Dynamic victory rules (Gardens,
//! Fairgrounds) evaluate against it.

use rustc_hash::FxHashMap;

use crate::cards::{CardRegistry, CardTypeId, Tag, VictoryRule};

/// Snapshot of one player's owned cards, counted by kind.
pub struct Collection<'a> {
    registry: &'a CardRegistry,
    counts: FxHashMap<CardTypeId, usize>,
    total: usize,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(registry: &'a CardRegistry, counts: FxHashMap<CardTypeId, usize>) -> Self {
        let total = counts.values().sum();
        Self {
            registry,
            counts,
            total,
        }
    }

    /// Total number of cards owned, across every zone.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Copies of one kind owned.
    #[must_use]
    pub fn count_of(&self, kind: CardTypeId) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Number of distinct kinds owned.
    #[must_use]
    pub fn unique_kinds(&self) -> usize {
        self.counts.len()
    }

    /// Number of owned cards carrying a tag.
    #[must_use]
    pub fn count_tagged(&self, tag: Tag) -> usize {
        self.counts
            .iter()
            .filter(|(id, _)| self.registry.kind(**id).has_tag(tag))
            .map(|(_, count)| count)
            .sum()
    }

    /// Iterate over `(kind, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardTypeId, usize)> + '_ {
        self.counts.iter().map(|(id, count)| (*id, *count))
    }

    /// Victory points from the cards in this collection, excluding
    /// token counters.
    #[must_use]
    pub fn victory_points(&self) -> i32 {
        self.counts
            .iter()
            .map(|(id, count)| {
                let per_copy = match self.registry.kind(*id).victory {
                    VictoryRule::Fixed(points) => points,
                    VictoryRule::Dynamic(f) => f(self),
                };
                per_copy * *count as i32
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Expansion};

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.register(
            CardKind::new(CardTypeId::new(0), "Copper", Expansion::Base, 0)
                .with_tags(&[Tag::Base, Tag::Treasure]),
        );
        registry.register(
            CardKind::new(CardTypeId::new(1), "Estate", Expansion::Base, 2)
                .with_tags(&[Tag::Base, Tag::Victory])
                .with_victory(1),
        );
        registry.register(
            CardKind::new(CardTypeId::new(2), "Orchard", Expansion::Base, 4)
                .with_tags(&[Tag::Victory])
                .with_dynamic_victory(|collection| (collection.total() / 10) as i32),
        );
        registry
    }

    fn collection<'a>(registry: &'a CardRegistry, piles: &[(u32, usize)]) -> Collection<'a> {
        let counts = piles
            .iter()
            .map(|(id, count)| (CardTypeId::new(*id), *count))
            .collect();
        Collection::new(registry, counts)
    }

    #[test]
    fn test_counts() {
        let registry = registry();
        let collection = collection(&registry, &[(0, 7), (1, 3)]);

        assert_eq!(collection.total(), 10);
        assert_eq!(collection.count_of(CardTypeId::new(0)), 7);
        assert_eq!(collection.count_of(CardTypeId::new(2)), 0);
        assert_eq!(collection.unique_kinds(), 2);
        assert_eq!(collection.count_tagged(Tag::Victory), 3);
    }

    #[test]
    fn test_fixed_victory_points() {
        let registry = registry();
        let collection = collection(&registry, &[(0, 7), (1, 3)]);
        assert_eq!(collection.victory_points(), 3);
    }

    #[test]
    fn test_dynamic_victory_sees_whole_collection() {
        let registry = registry();
        // 38 cards total, so each Orchard is worth 3.
        let collection = collection(&registry, &[(0, 28), (1, 3), (2, 7)]);
        assert_eq!(collection.victory_points(), 3 + 7 * 3);
    }
}
