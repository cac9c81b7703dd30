//! Execution context passed to firing triggers.
//!
//! A `TriggerContext` is built fresh by the dispatcher for every
//! invocation and dropped when the effect returns. It replaces any
//! ambient capture of the caller's locals with an explicit value: an
//! effect sees exactly who is acting, which card fired, and whom the
//! play targets - nothing else.

use crate::cards::Card;
use crate::core::Entity;

/// What a firing trigger's effect gets to see and mutate.
///
/// Ephemeral: borrows live only for the duration of one effect call.
#[derive(Debug)]
pub struct TriggerContext<'a> {
    /// The entity playing the card. Effects may heal or damage it.
    pub actor: &'a mut Entity,

    /// The card whose trigger is firing.
    pub card: &'a Card,

    /// The targets chosen for this play, in selection order.
    /// Empty for untargeted plays.
    pub targets: &'a mut [Entity],
}

impl<'a> TriggerContext<'a> {
    /// Build a context for one trigger invocation.
    #[must_use]
    pub fn new(actor: &'a mut Entity, card: &'a Card, targets: &'a mut [Entity]) -> Self {
        Self {
            actor,
            card,
            targets,
        }
    }
}
