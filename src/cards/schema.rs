//! Card schema: the card type registry.
//!
//! The `CardSchema` stores every card type for a game and provides
//! lookup by id or name plus the aggregate queries the engine needs
//! (total deck quantity for conservation checks, distance types for
//! scoring).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardId, CardType};

/// Registry of card types.
///
/// ## Example
///
/// ```
/// use bornes::cards::{CardId, CardSchema, CardType, Category};
///
/// let mut schema = CardSchema::new();
/// schema.register(CardType::new(CardId::new(0), "go", Category::Status).with_quantity(15));
///
/// assert_eq!(schema.lookup("go"), Some(CardId::new(0)));
/// assert_eq!(schema.total_quantity(), 15);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardSchema {
    cards: FxHashMap<CardId, CardType>,
    by_name: FxHashMap<String, CardId>,
}

impl CardSchema {
    /// Create a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card type.
    ///
    /// Panics if a card type with the same id or name already exists.
    pub fn register(&mut self, card: CardType) {
        if self.cards.contains_key(&card.id) {
            panic!("Card type with ID {:?} already registered", card.id);
        }
        if self.by_name.contains_key(&card.name) {
            panic!("Card type named {:?} already registered", card.name);
        }
        self.by_name.insert(card.name.clone(), card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card type by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardType> {
        self.cards.get(&id)
    }

    /// Get a card type by id, panicking if not found.
    ///
    /// Use when the id came from a pile or a generated candidate, where
    /// absence means a corrupted table.
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardType {
        self.cards.get(&id).expect("Card type not found in schema")
    }

    /// Look up a card type id by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CardId> {
        self.by_name.get(name).copied()
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered card types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the schema is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card types (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardType> {
        self.cards.values()
    }

    /// Total number of physical cards declared by the schema.
    ///
    /// This is the conservation denominator: a well-formed table holds
    /// exactly this many cards across all piles at all times.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.cards.values().map(|c| c.quantity).sum()
    }

    /// Declared quantity per card id.
    #[must_use]
    pub fn quantities(&self) -> FxHashMap<CardId, u32> {
        self.cards.values().map(|c| (c.id, c.quantity)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    #[test]
    fn test_register_and_get() {
        let mut schema = CardSchema::new();
        schema.register(CardType::new(CardId::new(0), "go", Category::Status));

        assert!(schema.get(CardId::new(0)).is_some());
        assert_eq!(schema.get(CardId::new(0)).unwrap().name, "go");
        assert!(schema.get(CardId::new(99)).is_none());
        assert!(schema.contains(CardId::new(0)));
        assert!(!schema.contains(CardId::new(1)));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut schema = CardSchema::new();
        schema.register(CardType::new(CardId::new(3), "collision", Category::Status));

        assert_eq!(schema.lookup("collision"), Some(CardId::new(3)));
        assert_eq!(schema.lookup("gasoline"), None);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut schema = CardSchema::new();
        schema.register(CardType::new(CardId::new(1), "a", Category::Status));
        schema.register(CardType::new(CardId::new(1), "b", Category::Status));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut schema = CardSchema::new();
        schema.register(CardType::new(CardId::new(1), "go", Category::Status));
        schema.register(CardType::new(CardId::new(2), "go", Category::Status));
    }

    #[test]
    fn test_total_quantity() {
        let mut schema = CardSchema::new();
        schema.register(CardType::new(CardId::new(0), "go", Category::Status).with_quantity(15));
        schema.register(CardType::new(CardId::new(8), "min", Category::Min).with_quantity(20));

        assert_eq!(schema.total_quantity(), 35);
    }

    #[test]
    fn test_quantities() {
        let mut schema = CardSchema::new();
        schema.register(CardType::new(CardId::new(0), "go", Category::Status).with_quantity(15));
        schema.register(CardType::new(CardId::new(7), "puncture", Category::Status).with_quantity(2));

        let quantities = schema.quantities();
        assert_eq!(quantities[&CardId::new(0)], 15);
        assert_eq!(quantities[&CardId::new(7)], 2);
    }
}
