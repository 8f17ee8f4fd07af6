//! Rule predicates, the predicate registry, and the move validator.
//!
//! Legality is declarative: each card type carries named rule instances,
//! each rule kind maps to one pure predicate, and the validator composes
//! a card's rules with short-circuit AND. Predicates return plain
//! booleans; an illegal placement is an expected outcome, not an error.
//!
//! Configuration problems (unknown rule kind, malformed arguments,
//! dangling card references) are caught once, at validator construction,
//! and refuse to run the game.

pub mod error;
pub mod predicate;
pub mod registry;
pub mod validator;

pub use error::SchemaError;
pub use predicate::{
    MaxInPile, RuleContext, RulePredicate, SpeedLimit, StatusGo, TopCard, MAX_IN_PILE,
    SPEED_LIMIT, STATUS_GO, TOP_CARD,
};
pub use registry::PredicateRegistry;
pub use validator::MoveValidator;
