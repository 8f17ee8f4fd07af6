//! Scoring and win detection.
//!
//! A player's score is the mileage across their four distance piles.
//! Scores are recomputed from pile contents on demand; there is no
//! cached score to drift out of sync.

use crate::cards::{CardSchema, Category};
use crate::core::{PlayerId, PlayerMap};
use crate::table::Table;

/// Compute one player's score: the summed value of every card in their
/// distance piles.
#[must_use]
pub fn player_score(table: &Table, schema: &CardSchema, player: PlayerId) -> i64 {
    Category::DISTANCE
        .iter()
        .map(|&category| {
            table
                .piles(player)
                .pile(category)
                .iter()
                .map(|card| schema.get_unchecked(card).value.unwrap_or(0))
                .sum::<i64>()
        })
        .sum()
}

/// Compute every player's score.
#[must_use]
pub fn compute_scores(table: &Table, schema: &CardSchema) -> PlayerMap<i64> {
    PlayerMap::new(table.player_count(), |player| {
        player_score(table, schema, player)
    })
}

/// Find the winner, if any.
///
/// A player wins when their score equals `threshold` exactly; overshoot
/// does not win. Checked in ascending player order.
#[must_use]
pub fn find_winner(table: &Table, schema: &CardSchema, threshold: i64) -> Option<PlayerId> {
    table
        .player_ids()
        .find(|&player| player_score(table, schema, player) == threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardType};

    const MIN: CardId = CardId::new(8);
    const LOW: CardId = CardId::new(9);
    const HIGH: CardId = CardId::new(10);
    const MAX: CardId = CardId::new(11);

    fn test_schema() -> CardSchema {
        let mut schema = CardSchema::new();
        schema.register(
            CardType::new(MIN, "min", Category::Min)
                .with_quantity(20)
                .with_value(1)
                .with_goal(8),
        );
        schema.register(
            CardType::new(LOW, "low", Category::Low)
                .with_quantity(10)
                .with_value(3)
                .with_goal(4),
        );
        schema.register(
            CardType::new(HIGH, "high", Category::High)
                .with_quantity(10)
                .with_value(5)
                .with_goal(2),
        );
        schema.register(
            CardType::new(MAX, "max", Category::Max)
                .with_quantity(12)
                .with_value(10)
                .with_goal(2),
        );
        schema
    }

    fn fill(table: &mut Table, player: PlayerId, card: CardId, category: Category, count: usize) {
        for _ in 0..count {
            table.piles_mut(player).pile_mut(category).push_top(card);
        }
    }

    #[test]
    fn test_partial_score() {
        let schema = test_schema();
        let mut table = Table::new(2);
        let p0 = PlayerId::new(0);

        fill(&mut table, p0, MIN, Category::Min, 3);
        fill(&mut table, p0, LOW, Category::Low, 2);

        // 3*1 + 2*3 = 9
        assert_eq!(player_score(&table, &schema, p0), 9);
        assert_eq!(player_score(&table, &schema, PlayerId::new(1)), 0);
    }

    #[test]
    fn test_full_tiers_score_fifty_and_win() {
        let schema = test_schema();
        let mut table = Table::new(2);
        let p1 = PlayerId::new(1);

        fill(&mut table, p1, MIN, Category::Min, 8);
        fill(&mut table, p1, LOW, Category::Low, 4);
        fill(&mut table, p1, HIGH, Category::High, 2);
        fill(&mut table, p1, MAX, Category::Max, 2);

        // 8 + 12 + 10 + 20 = 50
        assert_eq!(player_score(&table, &schema, p1), 50);
        assert_eq!(find_winner(&table, &schema, 50), Some(p1));
    }

    #[test]
    fn test_overshoot_is_not_a_win() {
        let schema = test_schema();
        let mut table = Table::new(2);
        let p0 = PlayerId::new(0);

        fill(&mut table, p0, MAX, Category::Max, 6); // 60

        assert_eq!(player_score(&table, &schema, p0), 60);
        assert_eq!(find_winner(&table, &schema, 50), None);
    }

    #[test]
    fn test_compute_scores_all_players() {
        let schema = test_schema();
        let mut table = Table::new(3);

        fill(&mut table, PlayerId::new(0), HIGH, Category::High, 1);
        fill(&mut table, PlayerId::new(2), MAX, Category::Max, 2);

        let scores = compute_scores(&table, &schema);
        assert_eq!(scores[PlayerId::new(0)], 5);
        assert_eq!(scores[PlayerId::new(1)], 0);
        assert_eq!(scores[PlayerId::new(2)], 20);
    }

    #[test]
    fn test_no_winner_on_empty_table() {
        let schema = test_schema();
        let table = Table::new(2);
        assert_eq!(find_winner(&table, &schema, 50), None);
    }
}
