//! Schema configuration errors.
//!
//! These are fatal at startup: a schema that references a rule with no
//! registered predicate, or that is internally inconsistent, must refuse
//! to run rather than silently skip a rule.

use crate::cards::CardId;

/// A configuration error detected while validating a schema against a
/// predicate registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// A card references a rule kind with no registered predicate.
    UnknownRuleKind { card: String, kind: String },

    /// A rule's argument payload has the wrong shape for its predicate.
    BadRuleArgs { card: String, kind: String },

    /// A rule argument references a card id absent from the schema.
    UnknownCardRef { card: String, referenced: CardId },

    /// A distance-tier card without a declared mileage value.
    MissingValue { card: String },

    /// A distance-tier card without a declared goal.
    MissingGoal { card: String },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::UnknownRuleKind { card, kind } => {
                write!(f, "card {:?} references unregistered rule kind {:?}", card, kind)
            }
            SchemaError::BadRuleArgs { card, kind } => {
                write!(f, "card {:?} has malformed arguments for rule {:?}", card, kind)
            }
            SchemaError::UnknownCardRef { card, referenced } => {
                write!(f, "card {:?} references unknown card {}", card, referenced)
            }
            SchemaError::MissingValue { card } => {
                write!(f, "distance card {:?} declares no value", card)
            }
            SchemaError::MissingGoal { card } => {
                write!(f, "distance card {:?} declares no goal", card)
            }
        }
    }
}

impl std::error::Error for SchemaError {}
