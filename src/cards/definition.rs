//! Card type definitions - static schema data.
//!
//! `CardType` holds the immutable properties of a card type: its
//! category, how many copies exist in the deck, whether it is played
//! against opponents, its mileage value for distance tiers, and the
//! ordered list of legality rules that gate its placement.
//!
//! Rules are data, not code. A `RuleSpec` names a rule kind and carries
//! its argument payload; the matching predicate implementation lives in
//! the `rules` module and is resolved through the predicate registry.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Category;

/// Unique identifier for a card type.
///
/// This identifies the type ("go", "cityLimits"), not a physical copy;
/// piles hold repeated `CardId`s for repeated copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Argument payload for a rule instance.
///
/// Each rule kind accepts exactly one payload shape; the predicate
/// registry verifies the shape at startup via
/// `RulePredicate::validate_args`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleArgs {
    /// No arguments.
    None,

    /// A numeric limit (pile capacity).
    Limit(usize),

    /// Top-of-pile constraint: the destination pile's top card must be
    /// one of `allowed`. An empty pile passes only when `allow_empty`.
    TopCard {
        allowed: Vec<CardId>,
        allow_empty: bool,
    },
}

/// A named rule instance attached to a card type.
///
/// The kind is an identifier resolved against the predicate registry;
/// an unknown kind is a startup configuration error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule kind identifier (e.g. "maxInPile").
    pub kind: String,

    /// Argument payload for this instance.
    pub args: RuleArgs,
}

impl RuleSpec {
    /// Create a rule instance.
    pub fn new(kind: impl Into<String>, args: RuleArgs) -> Self {
        Self {
            kind: kind.into(),
            args,
        }
    }

    /// Create a rule instance with no arguments.
    pub fn no_args(kind: impl Into<String>) -> Self {
        Self::new(kind, RuleArgs::None)
    }
}

/// Static card type definition.
///
/// Immutable at runtime; loaded once into the `CardSchema`.
///
/// ## Example
///
/// ```
/// use bornes::cards::{CardId, CardType, Category, RuleArgs, RuleSpec};
///
/// let low = CardType::new(CardId::new(9), "low", Category::Low)
///     .with_quantity(10)
///     .with_value(3)
///     .with_goal(4)
///     .with_rule(RuleSpec::new("maxInPile", RuleArgs::Limit(4)))
///     .with_rule(RuleSpec::no_args("statusGo"));
///
/// assert_eq!(low.value, Some(3));
/// assert_eq!(low.rules.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardType {
    /// Unique identifier for this card type.
    pub id: CardId,

    /// Unique name (the literal schema identifier, e.g. "cityLimits").
    pub name: String,

    /// Functional class; also selects the destination pile.
    pub category: Category,

    /// Number of copies in a full deck.
    pub quantity: u32,

    /// True if played against an opponent's pile.
    pub offense: bool,

    /// Mileage value per copy (distance tiers only).
    pub value: Option<i64>,

    /// Target pile length for a full tier (distance tiers only).
    pub goal: Option<usize>,

    /// Legality rules, evaluated in declaration order.
    pub rules: SmallVec<[RuleSpec; 3]>,
}

impl CardType {
    /// Create a new card type with a single copy and no rules.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            quantity: 1,
            offense: false,
            value: None,
            goal: None,
            rules: SmallVec::new(),
        }
    }

    /// Set the deck quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Mark this type as an offense card.
    #[must_use]
    pub fn offense(mut self) -> Self {
        self.offense = true;
        self
    }

    /// Set the mileage value.
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the tier goal.
    #[must_use]
    pub fn with_goal(mut self, goal: usize) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Append a legality rule.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleSpec) -> Self {
        self.rules.push(rule);
        self
    }
}
