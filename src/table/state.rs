//! The game table: shared piles plus per-player pile sets.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Category};
use crate::core::{PlayerId, PlayerMap};

use super::pile::Pile;

/// One player's piles: a hand plus one pile per category.
///
/// Every category has a pile by construction, so a card's destination
/// pile always exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPiles {
    /// Cards held, playable this turn.
    pub hand: Pile,
    /// Go / stop conditions.
    pub status: Pile,
    /// Speed restrictions.
    pub speed: Pile,
    /// Shortest distance tier.
    pub min: Pile,
    /// Low distance tier.
    pub low: Pile,
    /// High distance tier.
    pub high: Pile,
    /// Longest distance tier.
    pub max: Pile,
}

impl PlayerPiles {
    /// Create an empty pile set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pile for a category.
    #[must_use]
    pub fn pile(&self, category: Category) -> &Pile {
        match category {
            Category::Status => &self.status,
            Category::Speed => &self.speed,
            Category::Min => &self.min,
            Category::Low => &self.low,
            Category::High => &self.high,
            Category::Max => &self.max,
        }
    }

    /// The mutable pile for a category.
    pub fn pile_mut(&mut self, category: Category) -> &mut Pile {
        match category {
            Category::Status => &mut self.status,
            Category::Speed => &mut self.speed,
            Category::Min => &mut self.min,
            Category::Low => &mut self.low,
            Category::High => &mut self.high,
            Category::Max => &mut self.max,
        }
    }

    /// Total cards across the hand and all category piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + Category::ALL.iter().map(|&c| self.pile(c).len()).sum::<usize>()
    }

    fn count_into(&self, counts: &mut FxHashMap<CardId, u32>) {
        for card in self.hand.iter() {
            *counts.entry(card).or_insert(0) += 1;
        }
        for &category in &Category::ALL {
            for card in self.pile(category).iter() {
                *counts.entry(card).or_insert(0) += 1;
            }
        }
    }
}

/// The full game table: shared deck and discard plus per-player piles.
///
/// Invariant: every card in the system lives in exactly one pile. The
/// engine relocates cards, never creates or destroys them, so
/// `total_cards` stays equal to the schema's declared quantity for the
/// lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Shared face-down draw pile.
    pub deck: Pile,
    /// Shared discard pile.
    pub discard: Pile,
    players: PlayerMap<PlayerPiles>,
}

impl Table {
    /// Create an empty table for the given number of players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            deck: Pile::new(),
            discard: Pile::new(),
            players: PlayerMap::with_default(player_count),
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all player IDs in ascending order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// A player's pile set.
    #[must_use]
    pub fn piles(&self, player: PlayerId) -> &PlayerPiles {
        &self.players[player]
    }

    /// A player's mutable pile set.
    pub fn piles_mut(&mut self, player: PlayerId) -> &mut PlayerPiles {
        &mut self.players[player]
    }

    /// Draw the top deck card into a player's hand.
    ///
    /// Returns the drawn card, or `None` when the deck is exhausted; an
    /// exhausted deck is a recoverable condition, not an error.
    pub fn draw_to_hand(&mut self, player: PlayerId) -> Option<CardId> {
        let card = self.deck.pop_top()?;
        self.players[player].hand.push_top(card);
        Some(card)
    }

    /// Total cards across every pile on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self
                .players
                .iter()
                .map(|(_, piles)| piles.card_count())
                .sum::<usize>()
    }

    /// Count of each card id across every pile on the table.
    ///
    /// Used to verify conservation against `CardSchema::quantities`.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<CardId, u32> {
        let mut counts = FxHashMap::default();
        for card in self.deck.iter().chain(self.discard.iter()) {
            *counts.entry(card).or_insert(0) += 1;
        }
        for (_, piles) in self.players.iter() {
            piles.count_into(&mut counts);
        }
        counts
    }
}
