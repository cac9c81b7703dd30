//! Trigger definitions.
//!
//! A trigger pairs a [`TriggerKind`] with an effect closure. The engine
//! decides *whether* a trigger fires (kind matching, in stored order);
//! what the effect does is entirely opaque to it.

use std::sync::Arc;

use super::context::TriggerContext;
use super::kind::TriggerKind;

/// An effect closure invoked when its trigger fires.
///
/// `Arc`-shared so that card clones can share the same immutable
/// closure; effects that need per-instance state should capture it
/// behind their own synchronization.
pub type EffectFn = Arc<dyn Fn(&mut TriggerContext<'_>) + Send + Sync>;

/// A named hook plus the effect it fires.
///
/// Immutable once constructed. Owned by the card that holds it; clones
/// of the card share the effect closure by reference.
#[derive(Clone)]
pub struct Trigger {
    /// Which hook this trigger listens on.
    pub kind: TriggerKind,

    effect: EffectFn,
}

impl Trigger {
    /// Create a trigger with an effect.
    #[must_use]
    pub fn new(kind: TriggerKind, effect: impl Fn(&mut TriggerContext<'_>) + Send + Sync + 'static) -> Self {
        Self {
            kind,
            effect: Arc::new(effect),
        }
    }

    /// Create a trigger whose effect does nothing.
    ///
    /// Stands in for an omitted effect so invocation never has to deal
    /// with a missing closure.
    #[must_use]
    pub fn inert(kind: TriggerKind) -> Self {
        Self::new(kind, |_| {})
    }

    /// Check whether this trigger listens on `kind`.
    #[must_use]
    pub fn matches(&self, kind: TriggerKind) -> bool {
        self.kind == kind
    }

    /// Run the effect with the given context.
    ///
    /// Side effects are whatever the closure does; a panic inside the
    /// effect propagates unmodified to the caller.
    pub fn invoke(&self, ctx: &mut TriggerContext<'_>) {
        (self.effect)(ctx);
    }
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
