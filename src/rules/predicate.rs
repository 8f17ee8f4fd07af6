//! Rule predicates.
//!
//! One pure function per rule kind, each evaluating a single legality
//! condition against a snapshot of the table. Predicates never mutate
//! anything and carry no hidden state, so repeated evaluation of the
//! same snapshot always returns the same result.
//!
//! Predicates that depend on distinguished card identities (the "go"
//! card, the speed cards) are constructed with those ids when the
//! registry is assembled; per-card configuration arrives through the
//! rule instance's `RuleArgs` at check time.

use crate::cards::{CardId, CardSchema, CardType, RuleArgs};
use crate::core::PlayerId;
use crate::table::{Pile, PlayerPiles, Table};

/// Rule kind identifier for `MaxInPile`.
pub const MAX_IN_PILE: &str = "maxInPile";
/// Rule kind identifier for `TopCard`.
pub const TOP_CARD: &str = "topCard";
/// Rule kind identifier for `StatusGo`.
pub const STATUS_GO: &str = "statusGo";
/// Rule kind identifier for `SpeedLimit`.
pub const SPEED_LIMIT: &str = "speedLimit";

/// Evaluation context for a single rule check.
///
/// `player` is the destination player: the opponent under attack for an
/// offense card, the acting player otherwise.
pub struct RuleContext<'a> {
    /// The card type being placed.
    pub card: &'a CardType,
    /// The destination player.
    pub player: PlayerId,
    /// The full table snapshot.
    pub table: &'a Table,
    /// The card schema.
    pub schema: &'a CardSchema,
}

impl<'a> RuleContext<'a> {
    /// The destination player's pile set.
    #[must_use]
    pub fn piles(&self) -> &'a PlayerPiles {
        self.table.piles(self.player)
    }

    /// The destination pile, selected by the card's category.
    #[must_use]
    pub fn destination(&self) -> &'a Pile {
        self.piles().pile(self.card.category)
    }
}

/// A single legality condition.
///
/// Implementations are registered by kind in a `PredicateRegistry` and
/// resolved by the validator; they must be pure.
pub trait RulePredicate: Send + Sync {
    /// Evaluate the condition. `true` means the placement is permitted
    /// as far as this rule is concerned.
    fn check(&self, ctx: &RuleContext<'_>, args: &RuleArgs) -> bool;

    /// Check an argument payload's shape.
    ///
    /// Called during startup validation; a mismatch is a configuration
    /// error, never a silent failure at check time.
    fn validate_args(&self, args: &RuleArgs) -> bool;
}

/// Caps the destination pile at a fixed number of cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxInPile;

impl RulePredicate for MaxInPile {
    fn check(&self, ctx: &RuleContext<'_>, args: &RuleArgs) -> bool {
        match args {
            RuleArgs::Limit(limit) => ctx.destination().len() < *limit,
            _ => false,
        }
    }

    fn validate_args(&self, args: &RuleArgs) -> bool {
        matches!(args, RuleArgs::Limit(_))
    }
}

/// Requires the destination pile's top card to be one of an allowed set.
///
/// An empty destination pile passes only when the rule instance sets
/// `allow_empty`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopCard;

impl RulePredicate for TopCard {
    fn check(&self, ctx: &RuleContext<'_>, args: &RuleArgs) -> bool {
        match args {
            RuleArgs::TopCard {
                allowed,
                allow_empty,
            } => match ctx.destination().top() {
                Some(top) => allowed.contains(&top),
                None => *allow_empty,
            },
            _ => false,
        }
    }

    fn validate_args(&self, args: &RuleArgs) -> bool {
        matches!(args, RuleArgs::TopCard { .. })
    }
}

/// Requires the destination player's status pile to show "go" on top.
#[derive(Clone, Copy, Debug)]
pub struct StatusGo {
    go: CardId,
}

impl StatusGo {
    /// Create the predicate with the distinguished "go" card id.
    #[must_use]
    pub fn new(go: CardId) -> Self {
        Self { go }
    }
}

impl RulePredicate for StatusGo {
    fn check(&self, ctx: &RuleContext<'_>, _args: &RuleArgs) -> bool {
        ctx.piles().status.top() == Some(self.go)
    }

    fn validate_args(&self, args: &RuleArgs) -> bool {
        matches!(args, RuleArgs::None)
    }
}

/// Open-road check for the longest distance tier.
///
/// Passes when at least one other player's speed pile shows "country"
/// on top and no other player's speed pile shows "cityLimits" on top.
#[derive(Clone, Copy, Debug)]
pub struct SpeedLimit {
    country: CardId,
    city_limits: CardId,
}

impl SpeedLimit {
    /// Create the predicate with the distinguished speed card ids.
    #[must_use]
    pub fn new(country: CardId, city_limits: CardId) -> Self {
        Self {
            country,
            city_limits,
        }
    }
}

impl RulePredicate for SpeedLimit {
    fn check(&self, ctx: &RuleContext<'_>, _args: &RuleArgs) -> bool {
        let mut open_road = false;
        for other in ctx.table.player_ids() {
            if other == ctx.player {
                continue;
            }
            match ctx.table.piles(other).speed.top() {
                Some(top) if top == self.city_limits => return false,
                Some(top) if top == self.country => open_road = true,
                _ => {}
            }
        }
        open_road
    }

    fn validate_args(&self, args: &RuleArgs) -> bool {
        matches!(args, RuleArgs::None)
    }
}
