//! Game builder and facade for the standard racing game.

use std::time::Duration;

use crate::cards::CardSchema;
use crate::core::{GameConfig, GameRng, PlayerConfig, PlayerId, PlayerMap};
use crate::engine::{compute_scores, find_winner, TurnEngine, TurnOutcome};
use crate::moves::{apply_move, AiSelector, MoveCandidate, MoveGenerator, MoveSource};
use crate::rules::{MoveValidator, PredicateRegistry, SchemaError};
use crate::table::{Pile, Table};

use super::deck::{standard_deck, standard_registry, standard_schema};

/// Builder for a standard game.
///
/// ## Example
///
/// ```
/// use bornes::games::standard::GameBuilder;
///
/// let (_game, table) = GameBuilder::new()
///     .machine("mandie")
///     .machine("max")
///     .build(42)
///     .unwrap();
///
/// assert_eq!(table.player_count(), 2);
/// assert_eq!(table.deck.len(), 89); // 100 - 1 discard seed - 2 hands of 5
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    players: Vec<PlayerConfig>,
    hand_size: usize,
    win_threshold: i64,
    ai_delay: Option<Duration>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            hand_size: 5,
            win_threshold: 50,
            ai_delay: None,
        }
    }
}

impl GameBuilder {
    /// Create a builder with no seats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seat.
    #[must_use]
    pub fn player(mut self, player: PlayerConfig) -> Self {
        self.players.push(player);
        self
    }

    /// Add an interactive seat.
    #[must_use]
    pub fn human(self, name: impl Into<String>) -> Self {
        self.player(PlayerConfig::human(name))
    }

    /// Add an AI-driven seat.
    #[must_use]
    pub fn machine(self, name: impl Into<String>) -> Self {
        self.player(PlayerConfig::machine(name))
    }

    /// Set the hand size.
    #[must_use]
    pub fn hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn win_threshold(mut self, win_threshold: i64) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Set the cosmetic delay after machine turns.
    #[must_use]
    pub fn ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = Some(delay);
        self
    }

    /// Build the game and the dealt table.
    ///
    /// Validates the schema against the predicate registry, builds and
    /// shuffles the deck with the seeded RNG, flips one card onto the
    /// discard, and deals hands round-robin.
    pub fn build(self, seed: u64) -> Result<(Game, Table), SchemaError> {
        assert!(
            self.players.len() >= 2,
            "A game needs at least 2 players"
        );

        let schema = standard_schema();
        let registry = standard_registry();

        // Refuse to run on any configuration problem
        MoveValidator::new(&schema, &registry)?;

        let config = GameConfig::new(self.players)
            .with_hand_size(self.hand_size)
            .with_win_threshold(self.win_threshold);
        let config = match self.ai_delay {
            Some(delay) => config.with_ai_delay(delay),
            None => config,
        };

        let mut table = Table::new(config.player_count());
        let mut rng = GameRng::new(seed);

        let mut cards = standard_deck(&schema);
        rng.shuffle(&mut cards);
        table.deck = Pile::from(cards);

        // Flip one card to start the discard pile
        if let Some(card) = table.deck.pop_top() {
            table.discard.push_top(card);
        }

        // Deal round-robin
        for _ in 0..config.hand_size {
            for player in PlayerId::all(config.player_count()) {
                table.draw_to_hand(player);
            }
        }

        let game = Game {
            config,
            schema,
            registry,
        };

        Ok((game, table))
    }
}

/// The standard game: validated schema, predicate registry, and
/// configuration.
///
/// Immutable during play; the mutable state lives in the `Table` and
/// the `TurnEngine`.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    schema: CardSchema,
    registry: PredicateRegistry,
}

impl Game {
    /// The game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The card schema.
    #[must_use]
    pub fn schema(&self) -> &CardSchema {
        &self.schema
    }

    /// The predicate registry.
    #[must_use]
    pub fn registry(&self) -> &PredicateRegistry {
        &self.registry
    }

    /// A validator over this game's schema and registry.
    #[must_use]
    pub fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(&self.schema, &self.registry).expect("schema validated at build")
    }

    /// A turn engine rotating over the table's players in ascending
    /// identifier order.
    #[must_use]
    pub fn turn_engine(&self, table: &Table) -> TurnEngine {
        TurnEngine::for_table(table)
    }

    /// Enumerate legal candidates for a player's hand. Pure.
    #[must_use]
    pub fn generate_candidates(&self, player: PlayerId, table: &Table) -> Vec<MoveCandidate> {
        let validator = self.validator();
        MoveGenerator::new(&validator).candidates_for_hand(player, table)
    }

    /// Apply a generated candidate, relocating exactly one card.
    pub fn apply_move(&self, table: &mut Table, candidate: &MoveCandidate) {
        apply_move(table, candidate);
    }

    /// Human-readable label for a candidate.
    #[must_use]
    pub fn describe_candidate(&self, candidate: &MoveCandidate) -> String {
        candidate.describe(&self.schema)
    }

    /// Every player's current score.
    #[must_use]
    pub fn compute_scores(&self, table: &Table) -> PlayerMap<i64> {
        compute_scores(table, &self.schema)
    }

    /// The winner, if any player sits exactly at the win threshold.
    #[must_use]
    pub fn find_winner(&self, table: &Table) -> Option<PlayerId> {
        find_winner(table, &self.schema, self.config.win_threshold)
    }

    /// Run one complete turn with the given move source.
    pub fn play_turn(
        &self,
        engine: &mut TurnEngine,
        table: &mut Table,
        source: &mut dyn MoveSource,
    ) -> TurnOutcome {
        let validator = self.validator();
        let generator = MoveGenerator::new(&validator);
        engine.play_turn(table, &generator, source, self.config.win_threshold)
    }

    /// Drive turns until a winner appears or `max_turns` elapse.
    ///
    /// Machine seats use the built-in selector; interactive seats go
    /// through `interactive`. The configured AI delay, if any, is slept
    /// after each machine turn so a watching human can follow along.
    pub fn run(
        &self,
        engine: &mut TurnEngine,
        table: &mut Table,
        interactive: &mut dyn MoveSource,
        max_turns: u32,
    ) -> Option<PlayerId> {
        let mut ai = AiSelector;

        for _ in 0..max_turns {
            if engine.is_terminal() {
                break;
            }

            let machine = self.config.player(engine.active_player()).machine;
            let outcome = if machine {
                self.play_turn(engine, table, &mut ai)
            } else {
                self.play_turn(engine, table, interactive)
            };

            if machine {
                if let Some(delay) = self.config.ai_delay {
                    std::thread::sleep(delay);
                }
            }

            if let TurnOutcome::Finished { .. } = outcome {
                break;
            }
        }

        engine.winner()
    }
}
