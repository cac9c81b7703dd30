//! Trigger system: named hooks fired by the dispatcher.
//!
//! Cards carry zero or more triggers. Each trigger listens on one
//! [`TriggerKind`] and wraps an effect closure. When a card is played,
//! the dispatcher in [`Player::play_card`](crate::player::Player::play_card)
//! walks the card's triggers in stored order and invokes every one whose
//! kind is [`TriggerKind::Force`], handing it a fresh [`TriggerContext`].
//!
//! ## Key Types
//!
//! - [`TriggerKind`]: closed enum of hook names
//! - [`Trigger`]: a kind plus an effect closure
//! - [`TriggerContext`]: what a firing effect sees (actor, card, targets)
//!
//! ## Example
//!
//! ```
//! use card_battle::triggers::{Trigger, TriggerKind};
//!
//! // "When played, deal 6 damage to the first target."
//! let strike = Trigger::new(TriggerKind::Force, |ctx| {
//!     if let Some(target) = ctx.targets.first_mut() {
//!         target.apply_damage(6);
//!     }
//! });
//! assert!(strike.matches(TriggerKind::Force));
//! ```

pub mod context;
pub mod kind;
pub mod trigger;

pub use context::TriggerContext;
pub use kind::TriggerKind;
pub use trigger::{EffectFn, Trigger};
