//! Card system: prototypes and the clones that circulate through piles.
//!
//! ## Key Types
//!
//! - [`Card`]: a named unit owning an ordered trigger list
//! - [`TriggerList`]: inline small-vector storage for triggers
//!
//! Cards are value types. Seeding a pile clones the prototype; see
//! [`crate::player::CardPiles`].

pub mod card;

pub use card::{Card, TriggerList};
