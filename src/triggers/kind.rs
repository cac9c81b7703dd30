//! Trigger kinds.
//!
//! The set of hooks is a closed enum rather than string constants
//! compared at dispatch time. Adding a new hook means adding a variant
//! and a call site that dispatches it - the `Trigger` and `Card` data
//! model never changes.

use serde::{Deserialize, Serialize};

/// The named hook a trigger listens on.
///
/// Only `Force` is dispatched by any engine code path today: it is the
/// direct-play hook fired by [`Player::play_card`](crate::player::Player::play_card).
/// `Draw` and `TurnEnd` are reserved for future call sites; no engine
/// code dispatches them, so triggers with those kinds never fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    /// Fired when the card is played from hand.
    Force,
    /// Reserved: fired when the card is drawn.
    Draw,
    /// Reserved: fired when the turn ends with the card in hand.
    TurnEnd,
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Force => write!(f, "force"),
            Self::Draw => write!(f, "draw"),
            Self::TurnEnd => write!(f, "turn-end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TriggerKind::Force), "force");
        assert_eq!(format!("{}", TriggerKind::Draw), "draw");
        assert_eq!(format!("{}", TriggerKind::TurnEnd), "turn-end");
    }

    #[test]
    fn test_serialization() {
        let kind = TriggerKind::Force;
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: TriggerKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }
}
