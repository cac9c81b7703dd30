//! # card-battle
//!
//! A minimal turn-based card battle engine.
//!
//! Entities have hit points, a player holds a deck/hand/discard pile,
//! cards carry triggers fired under a named condition, and turns cycle
//! through draw → play → discard. The engine defines mechanics, not
//! content or presentation: card effects and the interactive loop live
//! in the caller.
//!
//! ## Design Principles
//!
//! 1. **Explicit context**: a firing trigger sees exactly `{ actor,
//!    card, targets }` via [`TriggerContext`] - nothing ambient.
//!
//! 2. **Conservation**: draw, reshuffle, and discard move cards between
//!    piles but never create or destroy one.
//!
//! 3. **Graceful exhaustion**: drawing from an empty deck and discard
//!    is absorbed silently - the hand comes up short, nothing raises.
//!
//! ## Modules
//!
//! - `core`: entities (bounded health) and the deterministic RNG
//! - `triggers`: trigger kinds, effect closures, invocation context
//! - `cards`: card prototypes and their clone semantics
//! - `player`: the pile lifecycle and the turn operations/dispatcher
//! - `games`: a ready-made skirmish for callers to drive
//!
//! ## Turn cycle
//!
//! ```
//! use card_battle::games::SkirmishBuilder;
//!
//! let mut battle = SkirmishBuilder::new().build(42);
//!
//! battle.player.start_turn();          // draw a full hand
//! battle.play_at(0, 0);                // fire the card's triggers
//! battle.player.end_turn();            // discard the whole hand
//! # assert!(battle.player.piles.hand.is_empty());
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod player;
pub mod triggers;

// Re-export commonly used types
pub use crate::cards::{Card, TriggerList};
pub use crate::core::{Entity, GameRng, GameRngState};
pub use crate::player::{CardPiles, Player, DEFAULT_HAND_SIZE};
pub use crate::triggers::{EffectFn, Trigger, TriggerContext, TriggerKind};
