//! Move candidates: generation, application, and selection.
//!
//! A candidate is a pre-validated, not-yet-applied relocation of one
//! hand card. The generator only emits candidates that already passed
//! the validator, so application is unconditional; end users only ever
//! choose among legal options.

pub mod apply;
pub mod candidate;
pub mod generator;
pub mod selector;

pub use apply::apply_move;
pub use candidate::{MoveCandidate, MoveRole};
pub use generator::MoveGenerator;
pub use selector::{AiSelector, MoveSource};
