//! Candidate application.

use crate::table::Table;

use super::candidate::{MoveCandidate, MoveRole};

/// Apply a generated candidate, relocating exactly one card.
///
/// The candidate was validated at generation time, so application is
/// unconditional. Panics if the hand slot no longer holds the
/// candidate's card: that means the table changed between generation and
/// application, which is a bug in the caller, never a consequence of
/// valid input.
pub fn apply_move(table: &mut Table, candidate: &MoveCandidate) {
    let hand = &mut table.piles_mut(candidate.player).hand;
    let at_slot = hand.get(candidate.hand_index);
    assert_eq!(
        at_slot,
        Some(candidate.card),
        "stale candidate: hand slot {} of {} holds {:?}, expected {}",
        candidate.hand_index,
        candidate.player,
        at_slot,
        candidate.card,
    );

    let card = hand.remove_at(candidate.hand_index);

    match candidate.role {
        MoveRole::Offense { target, category } => {
            table.piles_mut(target).pile_mut(category).push_top(card);
        }
        MoveRole::Defense { category } => {
            table
                .piles_mut(candidate.player)
                .pile_mut(category)
                .push_top(card);
        }
        MoveRole::Discard => {
            table.discard.push_top(card);
        }
    }
}
