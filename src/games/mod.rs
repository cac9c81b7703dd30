//! Ready-made battles built on the engine.
//!
//! Reference content showing how a game wires cards, triggers, and a
//! player together. Engine code never depends on this module.

pub mod skirmish;

pub use skirmish::{Skirmish, SkirmishBuilder};
