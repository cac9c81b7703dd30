//! Card values.
//!
//! A `Card` is a named, copyable unit owning an ordered list of
//! triggers. Content code builds prototypes once at setup time; the
//! instances circulating through deck, hand, and discard are clones of
//! those prototypes, so per-instance mutation (if ever added) cannot
//! alias across piles.

use smallvec::SmallVec;

use crate::triggers::{Trigger, TriggerKind};

/// Inline storage for trigger lists. Most cards carry 0-2 triggers.
pub type TriggerList = SmallVec<[Trigger; 2]>;

/// A named card with an ordered trigger list.
///
/// Trigger order is semantically meaningful: the dispatcher fires
/// matching triggers in exactly the order they were attached.
///
/// `Clone` yields an independent trigger list; the effect closures
/// themselves are shared by `Arc`, which is safe because triggers are
/// immutable once constructed.
///
/// ```
/// use card_battle::cards::Card;
/// use card_battle::triggers::{Trigger, TriggerKind};
///
/// let strike = Card::new("Strike")
///     .with_trigger(Trigger::new(TriggerKind::Force, |ctx| {
///         if let Some(t) = ctx.targets.first_mut() {
///             t.apply_damage(6);
///         }
///     }));
///
/// assert_eq!(strike.triggers.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Card {
    /// Display name.
    pub name: String,

    /// Triggers in attachment order.
    pub triggers: TriggerList,
}

impl Card {
    /// Create a card with no triggers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triggers: TriggerList::new(),
        }
    }

    /// Create a card with the given triggers, order preserved.
    #[must_use]
    pub fn with_triggers(name: impl Into<String>, triggers: impl IntoIterator<Item = Trigger>) -> Self {
        Self {
            name: name.into(),
            triggers: triggers.into_iter().collect(),
        }
    }

    /// Attach a trigger (builder pattern). Appends after existing ones.
    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Iterate the triggers listening on `kind`, in attachment order.
    pub fn triggers_of(&self, kind: TriggerKind) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter().filter(move |t| t.matches(kind))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
