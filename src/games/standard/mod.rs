//! The standard racing game.
//!
//! A 100-card deck across 12 card types: hazards stop opponents, remedy
//! cards clear the hazards, "go" opens the road, speed cards restrict
//! the longest distance tier, and four distance tiers race to exactly
//! 50 miles.

pub mod deck;
pub mod game;

pub use deck::{standard_registry, standard_schema};
pub use game::{Game, GameBuilder};
