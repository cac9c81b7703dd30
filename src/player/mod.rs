//! Player state and turn operations.
//!
//! ## Key Types
//!
//! - [`CardPiles`]: the deck/hand/discard lifecycle (draw, reshuffle,
//!   discard-hand)
//! - [`Player`]: an entity that owns piles and exposes the turn cycle
//!   (`start_turn` → `play_card` → `end_turn`)
//!
//! The lifecycle lives in its own type so it can be tested and reused
//! without a player attached.

pub mod piles;
pub mod player;

pub use piles::CardPiles;
pub use player::{Player, DEFAULT_HAND_SIZE};
