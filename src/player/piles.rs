//! Deck/hand/discard lifecycle.
//!
//! `CardPiles` owns the three ordered piles a player cycles cards
//! through and implements the draw/reshuffle/discard rules:
//!
//! - **Draw** takes from the front of the deck and appends to the hand.
//! - **Reshuffle**: when the deck runs out mid-draw, the whole discard
//!   pile moves into the deck and is shuffled; drawing then continues.
//! - **Exhaustion**: if deck and discard are both empty, drawing stops
//!   early. This is a designed degrade path, never an error - the hand
//!   simply ends up short.
//! - **Discard hand** moves every hand card to the end of the discard
//!   pile, in hand order.
//!
//! Every card seeded into the piles stays in exactly one of the three
//! at all times: no operation fabricates or loses a card, so
//! `deck + hand + discard` counts are conserved across any call
//! sequence.

use crate::cards::Card;
use crate::core::GameRng;

/// The three ordered piles of a player's card lifecycle.
///
/// Index 0 of `deck` is the top (next card drawn); new discards append
/// to the back of `discard`.
///
/// ```
/// use card_battle::cards::Card;
/// use card_battle::core::GameRng;
/// use card_battle::player::CardPiles;
///
/// let mut rng = GameRng::new(42);
/// let mut piles = CardPiles::new();
/// piles.seed_discard([Card::new("A"), Card::new("B")]);
///
/// // Deck is empty, so the first draw reshuffles the discard pile.
/// piles.draw(1, &mut rng);
/// assert_eq!(piles.hand.len(), 1);
/// assert_eq!(piles.deck.len(), 1);
/// assert!(piles.discard.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPiles {
    /// Draw pile. Front (index 0) is drawn first.
    pub deck: Vec<Card>,

    /// Cards currently playable, in draw order.
    pub hand: Vec<Card>,

    /// Spent cards, oldest first.
    pub discard: Vec<Card>,
}

impl CardPiles {
    /// Create three empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add cards to the bottom of the deck, preserving order.
    ///
    /// Callers seed piles with clones of their prototypes so no card
    /// value is aliased across piles.
    pub fn seed_deck(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.deck.extend(cards);
    }

    /// Add cards to the end of the discard pile, preserving order.
    ///
    /// Seeding the discard pile forces the first draw through the
    /// reshuffle path, which randomizes the starting deck order.
    pub fn seed_discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Total cards across all three piles.
    ///
    /// Constant across any sequence of `draw`/`discard_hand` calls.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Draw up to `n` cards from the deck into the hand.
    ///
    /// Each iteration: if the deck is empty, the entire discard pile is
    /// moved into the deck and shuffled. If the deck is *still* empty,
    /// drawing stops entirely - the remaining count is abandoned, not
    /// retried. Otherwise the front deck card moves to the back of the
    /// hand.
    ///
    /// Returns the number of cards actually drawn (may be less than `n`
    /// on exhaustion).
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> usize {
        for drawn in 0..n {
            if self.deck.is_empty() {
                self.deck.append(&mut self.discard);
                rng.shuffle(&mut self.deck);
            }

            if self.deck.is_empty() {
                return drawn;
            }

            let card = self.deck.remove(0);
            self.hand.push(card);
        }
        n
    }

    /// Move every hand card to the end of the discard pile, in hand
    /// order. The hand is empty afterwards.
    pub fn discard_hand(&mut self) {
        self.discard.append(&mut self.hand);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(names: &[&str]) -> Vec<Card> {
        names.iter().copied().map(Card::new).collect()
    }

    fn names(pile: &[Card]) -> Vec<&str> {
        pile.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_draw_takes_from_front() {
        let mut rng = GameRng::new(42);
        let mut piles = CardPiles::new();
        piles.seed_deck(cards(&["A", "B", "C"]));

        assert_eq!(piles.draw(2, &mut rng), 2);

        assert_eq!(names(&piles.hand), vec!["A", "B"]);
        assert_eq!(names(&piles.deck), vec!["C"]);
    }

    #[test]
    fn test_draw_from_empty_piles_is_silent() {
        let mut rng = GameRng::new(42);
        let mut piles = CardPiles::new();

        assert_eq!(piles.draw(5, &mut rng), 0);
        assert!(piles.hand.is_empty());
    }

    #[test]
    fn test_draw_stops_early_on_exhaustion() {
        let mut rng = GameRng::new(42);
        let mut piles = CardPiles::new();
        piles.seed_deck(cards(&["A"]));
        piles.seed_discard(cards(&["B"]));

        // Only 2 cards exist; asking for 5 yields 2 and stops.
        assert_eq!(piles.draw(5, &mut rng), 2);
        assert_eq!(piles.hand.len(), 2);
        assert!(piles.deck.is_empty());
        assert!(piles.discard.is_empty());
    }

    #[test]
    fn test_reshuffle_moves_all_of_discard() {
        let mut rng = GameRng::new(42);
        let mut piles = CardPiles::new();
        piles.seed_discard(cards(&["A", "B", "C"]));

        assert_eq!(piles.draw(1, &mut rng), 1);

        assert_eq!(piles.hand.len(), 1);
        assert_eq!(piles.deck.len(), 2);
        assert!(piles.discard.is_empty());
    }

    #[test]
    fn test_discard_hand_appends_in_hand_order() {
        let mut piles = CardPiles::new();
        piles.discard = cards(&["Old"]);
        piles.hand = cards(&["A", "B", "C"]);

        piles.discard_hand();

        assert!(piles.hand.is_empty());
        assert_eq!(names(&piles.discard), vec!["Old", "A", "B", "C"]);
    }

    #[test]
    fn test_conservation_across_cycles() {
        let mut rng = GameRng::new(7);
        let mut piles = CardPiles::new();
        piles.seed_deck(cards(&["A", "B", "C", "D", "E"]));

        let total = piles.total();
        for _ in 0..10 {
            piles.draw(4, &mut rng);
            assert_eq!(piles.total(), total);
            piles.discard_hand();
            assert_eq!(piles.total(), total);
        }
    }

    #[test]
    fn test_draw_through_reshuffle_exact_counts() {
        // deck = [A, B], discard = [C, D], draw 4:
        // A and B are drawn in order, then the reshuffle pulls C and D
        // into the deck and both end up in hand.
        let mut rng = GameRng::new(42);
        let mut piles = CardPiles::new();
        piles.seed_deck(cards(&["A", "B"]));
        piles.seed_discard(cards(&["C", "D"]));

        assert_eq!(piles.draw(4, &mut rng), 4);

        assert_eq!(piles.hand.len(), 4);
        assert!(piles.deck.is_empty());
        assert!(piles.discard.is_empty());

        assert_eq!(&piles.hand[0].name, "A");
        assert_eq!(&piles.hand[1].name, "B");

        let mut tail: Vec<_> = names(&piles.hand[2..]);
        tail.sort_unstable();
        assert_eq!(tail, vec!["C", "D"]);
    }
}
