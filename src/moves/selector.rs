//! Move sources: where a chosen move comes from.
//!
//! The turn engine asks a `MoveSource` to pick one candidate. The
//! built-in `AiSelector` resolves synchronously; an interactive frontend
//! implements the trait (or passes a closure) and may block inside
//! `choose` for as long as the player deliberates. The engine holds no
//! state across the call, so the suspension is purely cooperative.

use crate::core::PlayerId;
use crate::table::Table;

use super::candidate::MoveCandidate;

/// Supplies the chosen move for a turn.
///
/// `choose` receives the generated candidates and returns the index of
/// the selected one. Returning an out-of-range index is a programmer
/// error and panics in the engine.
pub trait MoveSource {
    /// Pick one candidate from a non-empty slice.
    fn choose(&mut self, player: PlayerId, table: &Table, candidates: &[MoveCandidate]) -> usize;
}

impl<F> MoveSource for F
where
    F: FnMut(PlayerId, &Table, &[MoveCandidate]) -> usize,
{
    fn choose(&mut self, player: PlayerId, table: &Table, candidates: &[MoveCandidate]) -> usize {
        self(player, table, candidates)
    }
}

/// Deterministic role-priority policy for machine players.
///
/// Prefers offense, then defense, then discard; within a role, the
/// first candidate in generation order. Ignores per-player temperament
/// configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct AiSelector;

impl MoveSource for AiSelector {
    fn choose(&mut self, _player: PlayerId, _table: &Table, candidates: &[MoveCandidate]) -> usize {
        candidates
            .iter()
            .position(|c| c.role.is_offense())
            .or_else(|| candidates.iter().position(|c| c.role.is_defense()))
            .or_else(|| candidates.iter().position(|c| c.role.is_discard()))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Category};
    use crate::moves::candidate::MoveRole;

    fn candidate(hand_index: usize, role: MoveRole) -> MoveCandidate {
        MoveCandidate {
            player: PlayerId::new(0),
            hand_index,
            card: CardId::new(0),
            role,
        }
    }

    #[test]
    fn test_ai_prefers_offense() {
        let table = Table::new(2);
        let candidates = vec![
            candidate(0, MoveRole::Discard),
            candidate(1, MoveRole::Defense { category: Category::Status }),
            candidate(
                2,
                MoveRole::Offense {
                    target: PlayerId::new(1),
                    category: Category::Speed,
                },
            ),
            candidate(
                3,
                MoveRole::Offense {
                    target: PlayerId::new(1),
                    category: Category::Status,
                },
            ),
        ];

        let mut ai = AiSelector;
        // First offense in generation order, not the last
        assert_eq!(ai.choose(PlayerId::new(0), &table, &candidates), 2);
    }

    #[test]
    fn test_ai_falls_back_to_defense_then_discard() {
        let table = Table::new(2);
        let mut ai = AiSelector;

        let defense_available = vec![
            candidate(0, MoveRole::Discard),
            candidate(1, MoveRole::Defense { category: Category::Min }),
        ];
        assert_eq!(ai.choose(PlayerId::new(0), &table, &defense_available), 1);

        let discard_only = vec![
            candidate(0, MoveRole::Discard),
            candidate(1, MoveRole::Discard),
        ];
        assert_eq!(ai.choose(PlayerId::new(0), &table, &discard_only), 0);
    }

    #[test]
    fn test_ai_is_deterministic() {
        let table = Table::new(2);
        let candidates = vec![
            candidate(0, MoveRole::Discard),
            candidate(1, MoveRole::Defense { category: Category::Low }),
        ];

        let mut ai = AiSelector;
        let first = ai.choose(PlayerId::new(0), &table, &candidates);
        for _ in 0..10 {
            assert_eq!(ai.choose(PlayerId::new(0), &table, &candidates), first);
        }
    }

    #[test]
    fn test_closure_source() {
        let table = Table::new(2);
        let candidates = vec![
            candidate(0, MoveRole::Discard),
            candidate(1, MoveRole::Discard),
        ];

        let mut pick_last =
            |_: PlayerId, _: &Table, cs: &[MoveCandidate]| cs.len() - 1;
        assert_eq!(pick_last.choose(PlayerId::new(0), &table, &candidates), 1);
    }
}
