//! The standard deck schema and predicate registry.
//!
//! Card identities and quantities:
//!
//! | card          | qty | category | role    | value | goal |
//! |---------------|-----|----------|---------|-------|------|
//! | go            | 15  | status   | defense |       |      |
//! | cityLimits    | 4   | speed    | offense |       |      |
//! | country       | 5   | speed    | defense |       |      |
//! | collision     | 3   | status   | offense |       |      |
//! | hauledIn      | 8   | status   | defense |       |      |
//! | outOfGasoline | 3   | status   | offense |       |      |
//! | gasoline      | 8   | status   | defense |       |      |
//! | puncture      | 2   | status   | offense |       |      |
//! | min           | 20  | min      | defense | 1     | 8    |
//! | low           | 10  | low      | defense | 3     | 4    |
//! | high          | 10  | high     | defense | 5     | 2    |
//! | max           | 12  | max      | defense | 10    | 2    |
//!
//! Filling every tier to its goal scores 8 + 12 + 10 + 20 = 50, the
//! exact win threshold.

use crate::cards::{CardId, CardSchema, CardType, Category, RuleArgs, RuleSpec};
use crate::rules::{
    MaxInPile, PredicateRegistry, SpeedLimit, StatusGo, TopCard, MAX_IN_PILE, SPEED_LIMIT,
    STATUS_GO, TOP_CARD,
};

/// Card ids of the standard deck.
pub mod ids {
    use crate::cards::CardId;

    pub const GO: CardId = CardId::new(0);
    pub const CITY_LIMITS: CardId = CardId::new(1);
    pub const COUNTRY: CardId = CardId::new(2);
    pub const COLLISION: CardId = CardId::new(3);
    pub const HAULED_IN: CardId = CardId::new(4);
    pub const OUT_OF_GASOLINE: CardId = CardId::new(5);
    pub const GASOLINE: CardId = CardId::new(6);
    pub const PUNCTURE: CardId = CardId::new(7);
    pub const MIN: CardId = CardId::new(8);
    pub const LOW: CardId = CardId::new(9);
    pub const HIGH: CardId = CardId::new(10);
    pub const MAX: CardId = CardId::new(11);

    /// Every card id, in deck-construction order.
    pub const ALL: [CardId; 12] = [
        GO,
        CITY_LIMITS,
        COUNTRY,
        COLLISION,
        HAULED_IN,
        OUT_OF_GASOLINE,
        GASOLINE,
        PUNCTURE,
        MIN,
        LOW,
        HIGH,
        MAX,
    ];
}

fn top_card(allowed: Vec<CardId>, allow_empty: bool) -> RuleSpec {
    RuleSpec::new(
        TOP_CARD,
        RuleArgs::TopCard {
            allowed,
            allow_empty,
        },
    )
}

/// Build the standard card schema.
#[must_use]
pub fn standard_schema() -> CardSchema {
    use ids::*;

    let mut schema = CardSchema::new();

    // Go sits on an empty status pile or on top of any remedy
    schema.register(
        CardType::new(GO, "go", Category::Status)
            .with_quantity(15)
            .with_rule(top_card(vec![HAULED_IN, GASOLINE, PUNCTURE], true)),
    );
    schema.register(
        CardType::new(CITY_LIMITS, "cityLimits", Category::Speed)
            .with_quantity(4)
            .offense()
            .with_rule(top_card(vec![COUNTRY], false)),
    );
    schema.register(
        CardType::new(COUNTRY, "country", Category::Speed)
            .with_quantity(5)
            .with_rule(top_card(vec![CITY_LIMITS], true)),
    );
    schema.register(
        CardType::new(COLLISION, "collision", Category::Status)
            .with_quantity(3)
            .offense()
            .with_rule(top_card(vec![GO], false)),
    );
    schema.register(
        CardType::new(HAULED_IN, "hauledIn", Category::Status)
            .with_quantity(8)
            .with_rule(top_card(vec![COLLISION], false)),
    );
    schema.register(
        CardType::new(OUT_OF_GASOLINE, "outOfGasoline", Category::Status)
            .with_quantity(3)
            .offense()
            .with_rule(top_card(vec![GO], false)),
    );
    schema.register(
        CardType::new(GASOLINE, "gasoline", Category::Status)
            .with_quantity(8)
            .with_rule(top_card(vec![OUT_OF_GASOLINE], false)),
    );
    schema.register(
        CardType::new(PUNCTURE, "puncture", Category::Status)
            .with_quantity(2)
            .offense()
            .with_rule(top_card(vec![GO], false)),
    );
    schema.register(
        CardType::new(MIN, "min", Category::Min)
            .with_quantity(20)
            .with_value(1)
            .with_goal(8)
            .with_rule(RuleSpec::new(MAX_IN_PILE, RuleArgs::Limit(8)))
            .with_rule(RuleSpec::no_args(STATUS_GO)),
    );
    schema.register(
        CardType::new(LOW, "low", Category::Low)
            .with_quantity(10)
            .with_value(3)
            .with_goal(4)
            .with_rule(RuleSpec::new(MAX_IN_PILE, RuleArgs::Limit(4)))
            .with_rule(RuleSpec::no_args(STATUS_GO)),
    );
    schema.register(
        CardType::new(HIGH, "high", Category::High)
            .with_quantity(10)
            .with_value(5)
            .with_goal(2)
            .with_rule(RuleSpec::new(MAX_IN_PILE, RuleArgs::Limit(2)))
            .with_rule(RuleSpec::no_args(STATUS_GO)),
    );
    // The longest tier additionally needs an open road
    schema.register(
        CardType::new(MAX, "max", Category::Max)
            .with_quantity(12)
            .with_value(10)
            .with_goal(2)
            .with_rule(RuleSpec::new(MAX_IN_PILE, RuleArgs::Limit(2)))
            .with_rule(RuleSpec::no_args(STATUS_GO))
            .with_rule(RuleSpec::no_args(SPEED_LIMIT)),
    );

    schema
}

/// Build the standard predicate registry, wired with the distinguished
/// card identifiers of the standard deck.
#[must_use]
pub fn standard_registry() -> PredicateRegistry {
    let mut registry = PredicateRegistry::new();
    registry.register(MAX_IN_PILE, Box::new(MaxInPile));
    registry.register(TOP_CARD, Box::new(TopCard));
    registry.register(STATUS_GO, Box::new(StatusGo::new(ids::GO)));
    registry.register(
        SPEED_LIMIT,
        Box::new(SpeedLimit::new(ids::COUNTRY, ids::CITY_LIMITS)),
    );
    registry
}

/// Build the full unshuffled deck: one entry per physical card, in
/// deck-construction order.
#[must_use]
pub fn standard_deck(schema: &CardSchema) -> Vec<CardId> {
    let mut cards = Vec::with_capacity(schema.total_quantity() as usize);
    for id in ids::ALL {
        let quantity = schema.get_unchecked(id).quantity;
        cards.extend(std::iter::repeat(id).take(quantity as usize));
    }
    cards
}
