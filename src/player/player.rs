//! The player: an entity that owns the card lifecycle.
//!
//! `Player` composes an [`Entity`] (identity and health) with
//! [`CardPiles`] (deck/hand/discard) and exposes the turn operations
//! the battle loop drives: `start_turn` → `play_card` → `end_turn`.
//!
//! ## Dispatcher
//!
//! `play_card` is where trigger dispatch lives: the chosen card's
//! triggers are walked in stored order and every [`TriggerKind::Force`]
//! trigger fires with a fresh [`TriggerContext`] naming the actor, the
//! card, and the chosen targets. Playing does **not** remove the card
//! from hand - the whole hand is discarded at `end_turn`.

use crate::cards::Card;
use crate::core::{Entity, GameRng};
use crate::triggers::{TriggerContext, TriggerKind};

use super::piles::CardPiles;

/// Cards drawn at the start of each turn unless configured otherwise.
pub const DEFAULT_HAND_SIZE: usize = 4;

/// A combatant that holds and plays cards.
///
/// ```
/// use card_battle::cards::Card;
/// use card_battle::player::Player;
/// use card_battle::triggers::{Trigger, TriggerKind};
///
/// let strike = Card::new("Strike")
///     .with_trigger(Trigger::new(TriggerKind::Force, |ctx| {
///         ctx.targets[0].apply_damage(6);
///     }));
///
/// let mut player = Player::new("Alia", 80, 42);
/// player.piles.seed_deck([strike.clone(), strike.clone()]);
///
/// player.start_turn();
/// assert_eq!(player.piles.hand.len(), 2);
///
/// let mut enemies = [card_battle::core::Entity::new("Enemy 1", 40)];
/// player.play_card(0, &mut enemies);
/// assert_eq!(enemies[0].hp, 34);
///
/// player.end_turn();
/// assert!(player.piles.hand.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Player {
    /// Identity and health. `is_player` is always `true` here.
    pub entity: Entity,

    /// The deck/hand/discard lifecycle.
    pub piles: CardPiles,

    /// Cards drawn per `start_turn`.
    pub hand_size: usize,

    rng: GameRng,
}

impl Player {
    /// Create a player at full health with empty piles.
    ///
    /// The seed drives deck shuffling; use [`Player::with_rng`] and
    /// [`GameRng::from_entropy`] for unseeded interactive play.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i32, seed: u64) -> Self {
        Self::with_rng(name, max_hp, GameRng::new(seed))
    }

    /// Create a player with an explicit RNG.
    #[must_use]
    pub fn with_rng(name: impl Into<String>, max_hp: i32, rng: GameRng) -> Self {
        let mut entity = Entity::new(name, max_hp);
        entity.is_player = true;
        Self {
            entity,
            piles: CardPiles::new(),
            hand_size: DEFAULT_HAND_SIZE,
            rng,
        }
    }

    /// Set the per-turn draw count (builder pattern).
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Draw up to `n` cards, reshuffling the discard pile into the deck
    /// when the deck runs out. See [`CardPiles::draw`].
    pub fn draw(&mut self, n: usize) -> usize {
        self.piles.draw(n, &mut self.rng)
    }

    /// Begin a turn: draw a full hand. No other side effects.
    pub fn start_turn(&mut self) {
        self.draw(self.hand_size);
    }

    /// End a turn: discard the entire hand, in hand order. Unplayed
    /// cards are not carried over.
    pub fn end_turn(&mut self) {
        self.piles.discard_hand();
    }

    /// Play the card at `index` in hand against `targets`.
    ///
    /// Fires every [`TriggerKind::Force`] trigger on the card, in
    /// stored order, each with a fresh [`TriggerContext`]. Triggers of
    /// other kinds are skipped. The card stays in hand; it is discarded
    /// with the rest of the hand at [`Player::end_turn`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Range-checking the index
    /// collected from the user is the caller's job, as is any panic
    /// raised inside an effect - the dispatcher catches nothing.
    pub fn play_card(&mut self, index: usize, targets: &mut [Entity]) {
        // Clone the card out of hand so effects can borrow the player's
        // entity mutably. Cheap: effect closures are Arc-shared.
        let card: Card = self.piles.hand[index].clone();

        for trigger in card.triggers_of(TriggerKind::Force) {
            let mut ctx = TriggerContext::new(&mut self.entity, &card, targets);
            trigger.invoke(&mut ctx);
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entity)
    }
}
