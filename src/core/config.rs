//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `PlayerConfig`: One entry per seat (human or machine, temperament)
//! - `GameConfig`: Hand size, win threshold, cosmetic AI pacing delay
//!
//! The engine never hardcodes a player count or a win threshold; the
//! standard game builder fills these in.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::PlayerId;

/// Configuration for a single seat at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name (for labels and diagnostics).
    pub name: String,

    /// True for AI-driven seats, false for interactive ones.
    pub machine: bool,

    /// Per-player temperament in `[0, 1]`.
    ///
    /// Carried through configuration but not consulted by the built-in
    /// selector; reserved for alternative selection policies.
    pub temperament: f32,
}

impl PlayerConfig {
    /// Create an interactive (human) seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            machine: false,
            temperament: 0.5,
        }
    }

    /// Create an AI-driven seat.
    pub fn machine(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            machine: true,
            temperament: 0.5,
        }
    }

    /// Set the temperament value.
    #[must_use]
    pub fn with_temperament(mut self, temperament: f32) -> Self {
        self.temperament = temperament;
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player at setup.
    pub hand_size: usize,

    /// A player wins when their score equals this exactly.
    pub win_threshold: i64,

    /// Optional pacing delay after a machine turn.
    ///
    /// Purely cosmetic, so a human opponent can follow the game; has no
    /// effect on correctness and defaults to `None`.
    pub ai_delay: Option<Duration>,

    /// Seat configuration, one entry per player in `PlayerId` order.
    pub players: Vec<PlayerConfig>,
}

impl GameConfig {
    /// Create a configuration for the given seats with default settings.
    pub fn new(players: Vec<PlayerConfig>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");

        Self {
            hand_size: 5,
            win_threshold: 50,
            ai_delay: None,
            players,
        }
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, win_threshold: i64) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Set the cosmetic AI pacing delay.
    #[must_use]
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = Some(delay);
        self
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get the configuration for a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerConfig {
        &self.players[id.index()]
    }
}
