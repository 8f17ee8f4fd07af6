//! Move validator: composes a card's rules into one legality check.
//!
//! Construction validates the whole schema against the predicate
//! registry and refuses to run on any configuration problem. After
//! that, `is_playable` is a pure short-circuit AND over the card's rule
//! instances in schema-declared order.

use crate::cards::{CardId, CardSchema, RuleArgs};
use crate::core::PlayerId;
use crate::table::Table;

use super::error::SchemaError;
use super::predicate::RuleContext;
use super::registry::PredicateRegistry;

/// Validates prospective placements against a card's configured rules.
///
/// Borrows the schema and registry; cheap to construct once the schema
/// has been validated.
#[derive(Debug)]
pub struct MoveValidator<'a> {
    schema: &'a CardSchema,
    registry: &'a PredicateRegistry,
}

impl<'a> MoveValidator<'a> {
    /// Create a validator, checking the schema against the registry.
    ///
    /// Every rule kind must have a registered predicate, every argument
    /// payload must match its predicate's expected shape, card ids
    /// referenced from rule arguments must exist, and distance-tier
    /// cards must declare a value and a goal.
    pub fn new(
        schema: &'a CardSchema,
        registry: &'a PredicateRegistry,
    ) -> Result<Self, SchemaError> {
        for card in schema.iter() {
            if card.category.is_distance() {
                if card.value.is_none() {
                    return Err(SchemaError::MissingValue {
                        card: card.name.clone(),
                    });
                }
                if card.goal.is_none() {
                    return Err(SchemaError::MissingGoal {
                        card: card.name.clone(),
                    });
                }
            }

            for rule in &card.rules {
                let predicate =
                    registry
                        .get(&rule.kind)
                        .ok_or_else(|| SchemaError::UnknownRuleKind {
                            card: card.name.clone(),
                            kind: rule.kind.clone(),
                        })?;

                if !predicate.validate_args(&rule.args) {
                    return Err(SchemaError::BadRuleArgs {
                        card: card.name.clone(),
                        kind: rule.kind.clone(),
                    });
                }

                if let RuleArgs::TopCard { allowed, .. } = &rule.args {
                    for &referenced in allowed {
                        if !schema.contains(referenced) {
                            return Err(SchemaError::UnknownCardRef {
                                card: card.name.clone(),
                                referenced,
                            });
                        }
                    }
                }
            }
        }

        Ok(Self { schema, registry })
    }

    /// The schema this validator was built against.
    #[must_use]
    pub fn schema(&self) -> &'a CardSchema {
        self.schema
    }

    /// Check whether `card` may be placed on `player`'s pile of the
    /// card's category.
    ///
    /// Iterates the card's rules in declaration order, short-circuiting
    /// on the first failure; a card with no rules is always playable.
    /// Pure: safe to call repeatedly for exploratory checks.
    #[must_use]
    pub fn is_playable(&self, card: CardId, player: PlayerId, table: &Table) -> bool {
        let card_type = self.schema.get_unchecked(card);
        let ctx = RuleContext {
            card: card_type,
            player,
            table,
            schema: self.schema,
        };

        card_type.rules.iter().all(|rule| {
            let predicate = self
                .registry
                .get(&rule.kind)
                .expect("rule kind validated at construction");
            predicate.check(&ctx, &rule.args)
        })
    }
}
