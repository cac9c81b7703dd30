//! Deck/hand/discard lifecycle integration tests.
//!
//! These exercise the lifecycle through the `Player` surface the battle
//! loop uses, plus property tests over arbitrary draw/end-turn
//! sequences.

use card_battle::cards::Card;
use card_battle::core::GameRng;
use card_battle::player::{CardPiles, Player};

use proptest::prelude::*;

fn named_cards(n: usize) -> Vec<Card> {
    (0..n).map(|i| Card::new(format!("C{i}"))).collect()
}

#[test]
fn test_start_turn_draws_full_hand() {
    let mut player = Player::new("Alia", 80, 42);
    player.piles.seed_deck(named_cards(10));

    player.start_turn();

    assert_eq!(player.piles.hand.len(), player.hand_size);
    assert_eq!(player.piles.deck.len(), 10 - player.hand_size);
}

#[test]
fn test_draw_preserves_deck_order() {
    let mut player = Player::new("Alia", 80, 42);
    player.piles.seed_deck(named_cards(6));

    player.draw(3);

    let hand: Vec<_> = player.piles.hand.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(hand, vec!["C0", "C1", "C2"]);
}

#[test]
fn test_reshuffle_when_deck_exhausted_mid_draw() {
    let mut player = Player::new("Alia", 80, 42).with_hand_size(4);
    player.piles.seed_deck(named_cards(2));
    player.piles.seed_discard(vec![Card::new("D0"), Card::new("D1")]);

    // deck [C0, C1], discard [D0, D1], draw 4.
    player.start_turn();

    assert_eq!(player.piles.hand.len(), 4);
    assert!(player.piles.deck.is_empty());
    assert!(player.piles.discard.is_empty());

    // The in-deck cards come first, in order; the reshuffled pair
    // follows in some order.
    assert_eq!(player.piles.hand[0].name, "C0");
    assert_eq!(player.piles.hand[1].name, "C1");
    let mut tail: Vec<_> = player.piles.hand[2..]
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    tail.sort_unstable();
    assert_eq!(tail, vec!["D0", "D1"]);
}

#[test]
fn test_exhausted_draw_leaves_hand_short() {
    let mut player = Player::new("Alia", 80, 42).with_hand_size(4);
    player.piles.seed_deck(named_cards(1));

    player.start_turn();

    assert_eq!(player.piles.hand.len(), 1);
    assert!(player.piles.deck.is_empty());
    assert!(player.piles.discard.is_empty());

    // Drawing again with nothing anywhere is silently absorbed.
    assert_eq!(player.draw(3), 0);
    assert_eq!(player.piles.hand.len(), 1);
}

#[test]
fn test_end_turn_keeps_relative_order_after_prior_discards() {
    let mut player = Player::new("Alia", 80, 42);
    player.piles.discard = vec![Card::new("Old0"), Card::new("Old1")];
    player.piles.hand = vec![Card::new("H0"), Card::new("H1"), Card::new("H2")];

    player.end_turn();

    let discard: Vec<_> = player
        .piles
        .discard
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(discard, vec!["Old0", "Old1", "H0", "H1", "H2"]);
    assert!(player.piles.hand.is_empty());
}

#[test]
fn test_many_turns_cycle_all_cards() {
    let mut player = Player::new("Alia", 80, 42).with_hand_size(3);
    player.piles.seed_deck(named_cards(7));

    let total = player.piles.total();
    for _ in 0..20 {
        player.start_turn();
        assert!(player.piles.hand.len() <= 3);
        player.end_turn();
        assert_eq!(player.piles.total(), total);
    }
}

/// One lifecycle operation for the property tests.
#[derive(Clone, Copy, Debug)]
enum Op {
    Draw(usize),
    EndTurn,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Draw),
        Just(Op::EndTurn),
    ]
}

proptest! {
    /// `|deck| + |hand| + |discard|` never changes, for any starting
    /// split and any operation sequence, and drawing never panics.
    #[test]
    fn prop_card_conservation(
        deck_size in 0usize..10,
        discard_size in 0usize..10,
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut rng = GameRng::new(seed);
        let mut piles = CardPiles::new();
        piles.seed_deck(named_cards(deck_size));
        piles.seed_discard(named_cards(discard_size));

        let total = piles.total();
        for op in ops {
            match op {
                Op::Draw(n) => { piles.draw(n, &mut rng); }
                Op::EndTurn => piles.discard_hand(),
            }
            prop_assert_eq!(piles.total(), total);
        }
    }

    /// A draw yields exactly `min(n, deck + discard)` cards: reshuffle
    /// recovers everything outside the hand, and exhaustion stops the
    /// draw early rather than raising.
    #[test]
    fn prop_draw_count_is_exact(
        deck_size in 0usize..10,
        discard_size in 0usize..10,
        n in 0usize..25,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut piles = CardPiles::new();
        piles.seed_deck(named_cards(deck_size));
        piles.seed_discard(named_cards(discard_size));

        let available = deck_size + discard_size;
        let drawn = piles.draw(n, &mut rng);

        prop_assert_eq!(drawn, n.min(available));
        prop_assert_eq!(piles.hand.len(), drawn);
    }

    /// After any draw that touched the reshuffle path, the discard
    /// pile is empty: reshuffle moves all of it, not part.
    #[test]
    fn prop_reshuffle_takes_whole_discard(
        discard_size in 1usize..10,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut piles = CardPiles::new();
        piles.seed_discard(named_cards(discard_size));

        piles.draw(1, &mut rng);

        prop_assert!(piles.discard.is_empty());
        prop_assert_eq!(piles.hand.len(), 1);
        prop_assert_eq!(piles.deck.len(), discard_size - 1);
    }
}
