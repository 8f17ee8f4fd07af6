//! Table state: piles and the mutable game table.
//!
//! Pure data, no rule knowledge. Legality lives in the `rules` module
//! and is enforced at insertion time by only ever applying pre-validated
//! candidates.

pub mod pile;
pub mod state;

pub use pile::Pile;
pub use state::{PlayerPiles, Table};
