//! # bornes
//!
//! A data-driven rules engine for Mille Bornes-style racing card games.
//!
//! Players race to accumulate distance cards while playing offense cards
//! (hazards) against opponents and defense/status cards to protect or
//! recover their own state. The engine is a small declarative rule
//! interpreter over card schemas: each card type declares its category,
//! quantity, offense/defense role, and an ordered list of legality rules.
//!
//! ## Design Principles
//!
//! 1. **Schema Over Code**: Card behavior lives in data. The engine
//!    interprets rule instances; it never hardcodes a card.
//!
//! 2. **Explicit Registries**: Rule predicates are registered by kind and
//!    injected into the validator. An unknown rule kind is a startup
//!    error, never a silently skipped rule.
//!
//! 3. **Pre-Validated Moves**: Illegal moves are never offered. The move
//!    generator only emits candidates that already passed the validator,
//!    so application is unconditional.
//!
//! ## Modules
//!
//! - `core`: Player identity, configuration, deterministic RNG
//! - `cards`: Card categories, schema types, the card registry
//! - `table`: Piles and the mutable game table
//! - `rules`: Rule predicates, the predicate registry, the move validator
//! - `moves`: Move candidates, generation, application, move sources
//! - `engine`: Turn state machine, scoring, win detection
//! - `games`: The standard deck schema and game builder

pub mod cards;
pub mod core;
pub mod engine;
pub mod games;
pub mod moves;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, PlayerConfig, PlayerId, PlayerMap};

pub use crate::cards::{CardId, CardSchema, CardType, Category, RuleArgs, RuleSpec};

pub use crate::table::{Pile, PlayerPiles, Table};

pub use crate::rules::{
    MoveValidator, PredicateRegistry, RuleContext, RulePredicate, SchemaError,
};

pub use crate::moves::{
    apply_move, AiSelector, MoveCandidate, MoveGenerator, MoveRole, MoveSource,
};

pub use crate::engine::{
    compute_scores, find_winner, player_score, TurnEngine, TurnOutcome, TurnPhase, TurnRecord,
};

pub use crate::games::standard::{Game, GameBuilder};
