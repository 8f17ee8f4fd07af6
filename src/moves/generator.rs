//! Move generation: enumerate every legal destination for hand cards.

use crate::cards::CardSchema;
use crate::core::PlayerId;
use crate::rules::MoveValidator;
use crate::table::Table;

use super::candidate::{MoveCandidate, MoveRole};

/// Enumerates legal move candidates for a player's hand.
///
/// Offense cards are checked against every other player's matching
/// category pile; other cards against the acting player's own pile. A
/// discard candidate is always emitted, so a hand card never yields an
/// empty candidate list.
#[derive(Debug)]
pub struct MoveGenerator<'a> {
    validator: &'a MoveValidator<'a>,
}

impl<'a> MoveGenerator<'a> {
    /// Create a generator over a validated schema.
    #[must_use]
    pub fn new(validator: &'a MoveValidator<'a>) -> Self {
        Self { validator }
    }

    /// The schema candidates are generated against.
    #[must_use]
    pub fn schema(&self) -> &'a CardSchema {
        self.validator.schema()
    }

    /// Candidates for one hand card, in stable order: offense targets in
    /// ascending player order (or the single defense placement), then
    /// the unconditional discard.
    ///
    /// Panics if `hand_index` is out of range for the player's hand.
    #[must_use]
    pub fn candidates_for_card(
        &self,
        player: PlayerId,
        hand_index: usize,
        table: &Table,
    ) -> Vec<MoveCandidate> {
        let card = table
            .piles(player)
            .hand
            .get(hand_index)
            .expect("hand index out of range");
        let card_type = self.schema().get_unchecked(card);

        let mut candidates = Vec::new();

        if card_type.offense {
            for target in table.player_ids() {
                if target == player {
                    continue;
                }
                if self.validator.is_playable(card, target, table) {
                    candidates.push(MoveCandidate {
                        player,
                        hand_index,
                        card,
                        role: MoveRole::Offense {
                            target,
                            category: card_type.category,
                        },
                    });
                }
            }
        } else if self.validator.is_playable(card, player, table) {
            candidates.push(MoveCandidate {
                player,
                hand_index,
                card,
                role: MoveRole::Defense {
                    category: card_type.category,
                },
            });
        }

        candidates.push(MoveCandidate {
            player,
            hand_index,
            card,
            role: MoveRole::Discard,
        });

        candidates
    }

    /// Candidates for the whole hand: the concatenation of per-card
    /// lists in hand order.
    #[must_use]
    pub fn candidates_for_hand(&self, player: PlayerId, table: &Table) -> Vec<MoveCandidate> {
        let hand_len = table.piles(player).hand.len();
        (0..hand_len)
            .flat_map(|index| self.candidates_for_card(player, index, table))
            .collect()
    }
}
