//! Card system: categories, schema types, and the card registry.
//!
//! ## Key Types
//!
//! - `Category`: A card type's functional class, which determines the
//!   pile it targets
//! - `CardId`: Identifier for a card type
//! - `CardType`: Static schema entry (quantity, role, value, rules)
//! - `RuleSpec`: A named rule instance attached to a card type
//! - `CardSchema`: Card type lookup and aggregate queries

pub mod category;
pub mod definition;
pub mod schema;

pub use category::Category;
pub use definition::{CardId, CardType, RuleArgs, RuleSpec};
pub use schema::CardSchema;
