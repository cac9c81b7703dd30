//! Core engine types: combatants and deterministic RNG.
//!
//! These are the content-agnostic building blocks. Cards, triggers,
//! and the pile lifecycle build on top of them.

pub mod entity;
pub mod rng;

pub use entity::Entity;
pub use rng::{GameRng, GameRngState};
