//! Combatants with bounded health.
//!
//! An `Entity` is anything that can stand in a battle: the player, an
//! enemy, a summon. It carries an identity (`name`) and a health range.
//! The engine itself never reads `hp` - damage and healing are applied
//! by card effects, and defeat handling belongs to the caller.
//!
//! ## Health policy
//!
//! `hp` is always kept in `0..=max_hp`. `apply_damage` and `heal`
//! saturate at the bounds rather than over/underflowing. No engine code
//! path checks `is_defeated` - the battle loop decides what death means.
//!
//! ```
//! use card_battle::core::Entity;
//!
//! let mut goblin = Entity::new("Goblin", 12);
//! goblin.apply_damage(5);
//! assert_eq!(goblin.hp, 7);
//!
//! goblin.apply_damage(100);
//! assert_eq!(goblin.hp, 0);
//! assert!(goblin.is_defeated());
//! ```

use serde::{Deserialize, Serialize};

/// A combatant with capped health.
///
/// Identity (`name`, `max_hp`, `is_player`) is fixed at construction;
/// only `hp` changes during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Display name, shown by the battle loop when listing targets.
    pub name: String,

    /// Upper health bound. Always positive.
    pub max_hp: i32,

    /// Current health, kept in `0..=max_hp`.
    pub hp: i32,

    /// Whether this entity is a player rather than an enemy or neutral.
    pub is_player: bool,
}

impl Entity {
    /// Create an entity at full health.
    ///
    /// Panics if `max_hp` is not positive.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i32) -> Self {
        assert!(max_hp > 0, "max_hp must be positive");
        Self {
            name: name.into(),
            max_hp,
            hp: max_hp,
            is_player: false,
        }
    }

    /// Reduce `hp` by `amount`, saturating at 0.
    ///
    /// Negative amounts are treated as 0 damage.
    pub fn apply_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount.max(0)).max(0);
    }

    /// Raise `hp` by `amount`, saturating at `max_hp`.
    ///
    /// Negative amounts are treated as 0 healing.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    /// Check whether health has reached 0.
    ///
    /// The engine never calls this; it exists for battle loops and
    /// effects that care about defeat.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.hp, self.max_hp)
    }
}
