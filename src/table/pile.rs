//! An ordered pile of cards.
//!
//! The top of a pile is the most recently placed card, stored as the
//! last element. All placement goes through `push_top`; the engine
//! inserts moved cards on top of their destination pile.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// An ordered sequence of card identifiers, top = most recent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<CardId>,
}

impl Pile {
    /// Create a new empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card (most recently placed), if any.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Place a card on top.
    pub fn push_top(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Get the card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Remove and return the card at `index`.
    ///
    /// Panics if `index` is out of range; callers pass indices produced
    /// by candidate generation against the same pile.
    pub fn remove_at(&mut self, index: usize) -> CardId {
        assert!(
            index < self.cards.len(),
            "pile index {} out of range (len {})",
            index,
            self.cards.len()
        );
        self.cards.remove(index)
    }

    /// Iterate over the cards, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// View the cards as a slice, bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.cards
    }
}

impl From<Vec<CardId>> for Pile {
    fn from(cards: Vec<CardId>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_top() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);

        pile.push_top(CardId::new(1));
        pile.push_top(CardId::new(2));

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(CardId::new(2)));
    }

    #[test]
    fn test_pop_top_is_lifo() {
        let mut pile = Pile::from(vec![CardId::new(1), CardId::new(2), CardId::new(3)]);

        assert_eq!(pile.pop_top(), Some(CardId::new(3)));
        assert_eq!(pile.pop_top(), Some(CardId::new(2)));
        assert_eq!(pile.pop_top(), Some(CardId::new(1)));
        assert_eq!(pile.pop_top(), None);
    }

    #[test]
    fn test_remove_at() {
        let mut pile = Pile::from(vec![CardId::new(1), CardId::new(2), CardId::new(3)]);

        let removed = pile.remove_at(1);
        assert_eq!(removed, CardId::new(2));
        assert_eq!(pile.as_slice(), &[CardId::new(1), CardId::new(3)]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_at_out_of_range_panics() {
        let mut pile = Pile::new();
        pile.remove_at(0);
    }

    #[test]
    fn test_serialization() {
        let pile = Pile::from(vec![CardId::new(5), CardId::new(6)]);
        let json = serde_json::to_string(&pile).unwrap();
        let deserialized: Pile = serde_json::from_str(&json).unwrap();
        assert_eq!(pile, deserialized);
    }
}
