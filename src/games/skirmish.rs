//! A small single-player skirmish.
//!
//! The engine ships one ready-made battle so a command-line loop has
//! something to drive immediately: one player, one enemy, and three
//! card prototypes seeded into the discard pile (so the very first
//! `start_turn` exercises the reshuffle path). The interactive loop
//! itself - prompting for indices, printing menus - is not part of the
//! engine.

use crate::cards::Card;
use crate::core::Entity;
use crate::player::Player;
use crate::triggers::{Trigger, TriggerKind};

/// Builder for a [`Skirmish`].
#[derive(Clone, Copy, Debug)]
pub struct SkirmishBuilder {
    player_hp: i32,
    enemy_hp: i32,
    enemy_count: usize,
    copies_of_damage: usize,
    copies_of_shield: usize,
    copies_of_special: usize,
}

impl Default for SkirmishBuilder {
    fn default() -> Self {
        Self {
            player_hp: 80,
            enemy_hp: 40,
            enemy_count: 1,
            copies_of_damage: 4,
            copies_of_shield: 3,
            copies_of_special: 1,
        }
    }
}

impl SkirmishBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_hp(mut self, hp: i32) -> Self {
        self.player_hp = hp;
        self
    }

    #[must_use]
    pub fn enemy_hp(mut self, hp: i32) -> Self {
        self.enemy_hp = hp;
        self
    }

    #[must_use]
    pub fn enemy_count(mut self, count: usize) -> Self {
        assert!(count >= 1, "Skirmish needs at least one enemy");
        self.enemy_count = count;
        self
    }

    /// Build the battle with a shuffle seed.
    #[must_use]
    pub fn build(self, seed: u64) -> Skirmish {
        let mut player = Player::new("Alia", self.player_hp, seed);

        let damage = Card::new("Damage").with_trigger(Trigger::new(
            TriggerKind::Force,
            |ctx| {
                if let Some(target) = ctx.targets.first_mut() {
                    target.apply_damage(6);
                }
            },
        ));

        let shield = Card::new("Shield").with_trigger(Trigger::new(
            TriggerKind::Force,
            |ctx| ctx.actor.heal(5),
        ));

        // Hits every chosen target, lightly.
        let special = Card::new("Special").with_trigger(Trigger::new(
            TriggerKind::Force,
            |ctx| {
                for target in ctx.targets.iter_mut() {
                    target.apply_damage(3);
                }
            },
        ));

        let mut pile = Vec::new();
        pile.extend((0..self.copies_of_damage).map(|_| damage.clone()));
        pile.extend((0..self.copies_of_shield).map(|_| shield.clone()));
        pile.extend((0..self.copies_of_special).map(|_| special.clone()));
        player.piles.seed_discard(pile);

        let enemies = (0..self.enemy_count)
            .map(|i| Entity::new(format!("Enemy {}", i + 1), self.enemy_hp))
            .collect();

        Skirmish { player, enemies }
    }
}

/// A running battle: the player versus a row of enemies.
///
/// ```
/// use card_battle::games::SkirmishBuilder;
///
/// let mut battle = SkirmishBuilder::new().build(42);
/// battle.player.start_turn();
///
/// // The whole collection started in the discard pile, so the first
/// // draw reshuffled everything into the deck.
/// assert_eq!(battle.player.piles.hand.len(), 4);
/// assert!(battle.player.piles.discard.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Skirmish {
    /// The human-controlled side.
    pub player: Player,

    /// Targets, in menu order.
    pub enemies: Vec<Entity>,
}

impl Skirmish {
    /// Play the hand card at `index` against the enemy at
    /// `target_index`, then report whether that enemy fell.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range; the loop driving the
    /// battle validates user input before calling.
    pub fn play_at(&mut self, index: usize, target_index: usize) -> bool {
        let targets = &mut self.enemies[target_index..=target_index];
        self.player.play_card(index, targets);
        self.enemies[target_index].is_defeated()
    }
}
