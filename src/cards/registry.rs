//! Card registry for kind lookup.
//!
//! The `CardRegistry` stores every kind available to a match. It is
//! built once at startup and never mutated during play.

use rustc_hash::FxHashMap;

use super::kind::{CardKind, CardTypeId, Tag};

/// Registry of card kinds.
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    kinds: FxHashMap<CardTypeId, CardKind>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind.
    ///
    /// Panics if a kind with the same ID already exists; registering
    /// twice is a programming error in catalog construction.
    pub fn register(&mut self, kind: CardKind) {
        if self.kinds.contains_key(&kind.id) {
            panic!("Card kind {:?} already registered", kind.id);
        }
        self.kinds.insert(kind.id, kind);
    }

    /// Get a kind by ID.
    #[must_use]
    pub fn get(&self, id: CardTypeId) -> Option<&CardKind> {
        self.kinds.get(&id)
    }

    /// Get a kind by ID, panicking if not found.
    ///
    /// Use for IDs that are known to come from this registry.
    #[must_use]
    pub fn kind(&self, id: CardTypeId) -> &CardKind {
        self.kinds.get(&id).expect("Card kind not in registry")
    }

    /// Look up a kind by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardKind> {
        self.kinds.values().find(|k| k.name == name)
    }

    /// Check if a kind ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardTypeId) -> bool {
        self.kinds.contains_key(&id)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over all kinds.
    pub fn iter(&self) -> impl Iterator<Item = &CardKind> {
        self.kinds.values()
    }

    /// Iterate over kinds carrying a tag.
    pub fn find_by_tag(&self, tag: Tag) -> impl Iterator<Item = &CardKind> {
        self.kinds.values().filter(move |k| k.has_tag(tag))
    }

    /// Iterate over kingdom kinds (everything outside the common pool).
    pub fn kingdom_kinds(&self) -> impl Iterator<Item = &CardKind> {
        self.kinds.values().filter(|k| k.is_kingdom())
    }
}
