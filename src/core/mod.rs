//! Core types: player identity, configuration, and randomness.
//!
//! These are the building blocks the rest of the engine assumes:
//! stable player keys, per-player storage, game-level knobs, and a
//! deterministic RNG behind which all shuffling is isolated.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, PlayerConfig};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
