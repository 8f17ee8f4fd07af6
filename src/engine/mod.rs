//! Turn engine and scoring.
//!
//! The turn engine is a small state machine: draw, request a move,
//! apply it, recompute scores, detect a winner, rotate. Scores are
//! derived from pile contents on every check and never stored.

pub mod scoring;
pub mod turn;

pub use scoring::{compute_scores, find_winner, player_score};
pub use turn::{TurnEngine, TurnOutcome, TurnPhase, TurnRecord};
