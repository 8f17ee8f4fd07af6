//! Move candidates and their roles.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardSchema, Category};
use crate::core::PlayerId;

/// The intent of a move, with its destination baked in.
///
/// Offense targets an opponent's pile, defense the acting player's own
/// pile, discard the shared discard pile. The category names the
/// destination pile for the first two; discard has no category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRole {
    /// Play against an opponent's pile of the given category.
    Offense {
        target: PlayerId,
        category: Category,
    },
    /// Play onto the acting player's own pile of the given category.
    Defense { category: Category },
    /// Move to the shared discard pile. Always legal.
    Discard,
}

impl MoveRole {
    /// Check if this is an offense move.
    #[must_use]
    pub const fn is_offense(self) -> bool {
        matches!(self, MoveRole::Offense { .. })
    }

    /// Check if this is a defense move.
    #[must_use]
    pub const fn is_defense(self) -> bool {
        matches!(self, MoveRole::Defense { .. })
    }

    /// Check if this is a discard.
    #[must_use]
    pub const fn is_discard(self) -> bool {
        matches!(self, MoveRole::Discard)
    }
}

/// A proposed relocation of one hand card.
///
/// Carries everything needed to apply the move (source pile and index,
/// destination via the role) and to describe it, without recomputation.
/// Ephemeral: produced by the generator, consumed by a selector or an
/// interactive chooser, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCandidate {
    /// The acting player.
    pub player: PlayerId,

    /// Index of the card in the acting player's hand.
    pub hand_index: usize,

    /// The card at that index, recorded for application-time checking.
    pub card: CardId,

    /// What the move does and where it lands.
    pub role: MoveRole,
}

impl MoveCandidate {
    /// Human-readable label for display.
    ///
    /// ```
    /// use bornes::games::standard::deck;
    /// use bornes::moves::{MoveCandidate, MoveRole};
    /// use bornes::core::PlayerId;
    /// use bornes::cards::Category;
    ///
    /// let schema = deck::standard_schema();
    /// let candidate = MoveCandidate {
    ///     player: PlayerId::new(0),
    ///     hand_index: 2,
    ///     card: deck::ids::CITY_LIMITS,
    ///     role: MoveRole::Offense {
    ///         target: PlayerId::new(1),
    ///         category: Category::Speed,
    ///     },
    /// };
    /// assert_eq!(candidate.describe(&schema), "cityLimits moves to speed of player 1");
    /// ```
    #[must_use]
    pub fn describe(&self, schema: &CardSchema) -> String {
        let name = &schema.get_unchecked(self.card).name;
        match self.role {
            MoveRole::Offense { target, category } => {
                format!("{} moves to {} of {}", name, category, target)
            }
            MoveRole::Defense { category } => {
                format!("{} moves to {} of yourself", name, category)
            }
            MoveRole::Discard => format!("{} moves to discard", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardSchema, CardType};

    fn test_schema() -> CardSchema {
        let mut schema = CardSchema::new();
        schema.register(CardType::new(CardId::new(0), "go", Category::Status));
        schema.register(CardType::new(CardId::new(3), "collision", Category::Status).offense());
        schema
    }

    #[test]
    fn test_role_queries() {
        let offense = MoveRole::Offense {
            target: PlayerId::new(1),
            category: Category::Status,
        };
        assert!(offense.is_offense());
        assert!(!offense.is_defense());
        assert!(!offense.is_discard());

        assert!(MoveRole::Defense { category: Category::Status }.is_defense());
        assert!(MoveRole::Discard.is_discard());
    }

    #[test]
    fn test_describe() {
        let schema = test_schema();

        let offense = MoveCandidate {
            player: PlayerId::new(0),
            hand_index: 0,
            card: CardId::new(3),
            role: MoveRole::Offense {
                target: PlayerId::new(2),
                category: Category::Status,
            },
        };
        assert_eq!(
            offense.describe(&schema),
            "collision moves to status of player 2"
        );

        let defense = MoveCandidate {
            player: PlayerId::new(0),
            hand_index: 1,
            card: CardId::new(0),
            role: MoveRole::Defense {
                category: Category::Status,
            },
        };
        assert_eq!(defense.describe(&schema), "go moves to status of yourself");

        let discard = MoveCandidate {
            player: PlayerId::new(0),
            hand_index: 1,
            card: CardId::new(0),
            role: MoveRole::Discard,
        };
        assert_eq!(discard.describe(&schema), "go moves to discard");
    }

    #[test]
    fn test_serialization() {
        let candidate = MoveCandidate {
            player: PlayerId::new(1),
            hand_index: 3,
            card: CardId::new(0),
            role: MoveRole::Discard,
        };

        let json = serde_json::to_string(&candidate).unwrap();
        let deserialized: MoveCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(candidate, deserialized);
    }
}
