//! The turn state machine.
//!
//! Each turn walks three phases: draw the top deck card into the active
//! hand, apply one chosen move, then recompute scores and either finish
//! the game or rotate to the next player. The rotation order is a total
//! order over player identifiers captured once at construction; later
//! table mutation cannot reorder it.
//!
//! Phase methods panic when called out of order. That is a bug in the
//! driving code, not a game state: external callers normally use
//! `play_turn`, which walks the phases itself.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardSchema};
use crate::core::PlayerId;
use crate::moves::{apply_move, MoveCandidate, MoveGenerator, MoveSource};
use crate::table::Table;

use super::scoring::find_winner;

/// Phase of the active turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting to draw from the deck.
    AwaitingDraw,
    /// Waiting for a move to be chosen and applied.
    AwaitingMove,
    /// Move applied; waiting for scoring and rotation.
    MoveApplied,
    /// A winner exists; no further turns.
    Terminal,
}

/// Result of finishing a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Play continues with the next player.
    Continue { next: PlayerId },
    /// The game is over.
    Finished { winner: PlayerId },
}

/// One applied move, kept in the engine's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who moved.
    pub player: PlayerId,
    /// Turn number when the move was applied (starts at 1).
    pub turn: u32,
    /// The applied candidate.
    pub candidate: MoveCandidate,
}

/// Drives turns in a fixed rotation until a winner appears.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnEngine {
    order: Vec<PlayerId>,
    position: usize,
    phase: TurnPhase,
    turn_number: u32,
    winner: Option<PlayerId>,
    history: Vector<TurnRecord>,
}

impl TurnEngine {
    /// Create an engine with an explicit rotation order.
    ///
    /// The order must be non-empty and free of duplicates; it is frozen
    /// for the lifetime of the engine.
    #[must_use]
    pub fn new(order: Vec<PlayerId>) -> Self {
        assert!(!order.is_empty(), "Rotation order must be non-empty");
        let mut seen = order.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(
            seen.len(),
            order.len(),
            "Rotation order must not repeat a player"
        );

        Self {
            order,
            position: 0,
            phase: TurnPhase::AwaitingDraw,
            turn_number: 1,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Create an engine rotating over a table's players in ascending
    /// identifier order.
    #[must_use]
    pub fn for_table(table: &Table) -> Self {
        Self::new(table.player_ids().collect())
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.order[self.position]
    }

    /// The rotation order.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Current turn number (starts at 1, increments per player turn).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The winner, once the game has finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Check if the game has finished.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == TurnPhase::Terminal
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Draw the top deck card into the active player's hand.
    ///
    /// Returns the drawn card, or `None` when the deck is exhausted;
    /// the turn proceeds either way.
    pub fn draw(&mut self, table: &mut Table) -> Option<CardId> {
        assert_eq!(
            self.phase,
            TurnPhase::AwaitingDraw,
            "draw called outside the awaiting-draw phase"
        );
        let drawn = table.draw_to_hand(self.active_player());
        self.phase = TurnPhase::AwaitingMove;
        drawn
    }

    /// Generate candidates, ask the source to choose, and apply.
    ///
    /// Returns the applied candidate, or `None` when the active hand is
    /// empty (possible only after deck exhaustion) and the turn passes
    /// without a move.
    pub fn select_move(
        &mut self,
        table: &mut Table,
        generator: &MoveGenerator<'_>,
        source: &mut dyn MoveSource,
    ) -> Option<MoveCandidate> {
        assert_eq!(
            self.phase,
            TurnPhase::AwaitingMove,
            "select_move called outside the awaiting-move phase"
        );

        let player = self.active_player();
        let candidates = generator.candidates_for_hand(player, table);
        self.phase = TurnPhase::MoveApplied;

        if candidates.is_empty() {
            return None;
        }

        let choice = source.choose(player, table, &candidates);
        assert!(
            choice < candidates.len(),
            "move source chose index {} of {} candidates",
            choice,
            candidates.len()
        );

        let candidate = candidates[choice];
        apply_move(table, &candidate);
        self.history.push_back(TurnRecord {
            player,
            turn: self.turn_number,
            candidate,
        });
        Some(candidate)
    }

    /// Recompute scores, detect a winner, and rotate.
    pub fn finish_turn(
        &mut self,
        table: &Table,
        schema: &CardSchema,
        win_threshold: i64,
    ) -> TurnOutcome {
        assert_eq!(
            self.phase,
            TurnPhase::MoveApplied,
            "finish_turn called outside the move-applied phase"
        );

        if let Some(winner) = find_winner(table, schema, win_threshold) {
            self.winner = Some(winner);
            self.phase = TurnPhase::Terminal;
            return TurnOutcome::Finished { winner };
        }

        self.position = (self.position + 1) % self.order.len();
        self.turn_number += 1;
        self.phase = TurnPhase::AwaitingDraw;
        TurnOutcome::Continue {
            next: self.active_player(),
        }
    }

    /// Run one complete turn: draw, move, score, rotate.
    pub fn play_turn(
        &mut self,
        table: &mut Table,
        generator: &MoveGenerator<'_>,
        source: &mut dyn MoveSource,
        win_threshold: i64,
    ) -> TurnOutcome {
        self.draw(table);
        self.select_move(table, generator, source);
        self.finish_turn(table, generator.schema(), win_threshold)
    }
}
