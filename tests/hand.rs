//! Hand scoring tests.

use blackjack_deck::hand::{is_soft, score};
use blackjack_deck::{Card, Hand, Rank, Suit};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| Card::new(suit, rank))
        .collect()
}

#[test]
fn hands_without_aces_sum_face_values() {
    assert_eq!(score(&cards(&[Rank::Two, Rank::Three])), 5);
    assert_eq!(score(&cards(&[Rank::Ten, Rank::Nine])), 19);
    assert_eq!(score(&cards(&[Rank::Jack, Rank::Queen])), 20);
    assert_eq!(score(&cards(&[Rank::King, Rank::Five, Rank::Seven])), 22);
    assert_eq!(score(&[]), 0);

    for rank in Rank::ALL.into_iter().filter(|r| *r != Rank::Ace) {
        assert_eq!(score(&cards(&[rank, Rank::Two])), rank.value() + 2);
    }
}

#[test]
fn single_ace_is_soft_when_it_fits() {
    for rank in [Rank::Two, Rank::Five, Rank::Nine, Rank::Ten, Rank::King] {
        let hand = cards(&[Rank::Ace, rank]);
        assert_eq!(score(&hand), 11 + rank.value());
        assert!(is_soft(&hand));
    }

    assert_eq!(score(&cards(&[Rank::Ace])), 11);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Jack])), 21);
}

#[test]
fn single_ace_is_hard_when_eleven_would_bust() {
    let hand = cards(&[Rank::Ace, Rank::Six, Rank::Five]);
    assert_eq!(score(&hand), 12);
    assert!(!is_soft(&hand));

    let hand = cards(&[Rank::Ace, Rank::King, Rank::Queen]);
    assert_eq!(score(&hand), 21);
    assert!(!is_soft(&hand));
}

#[test]
fn only_one_ace_is_ever_promoted() {
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(
        score(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
        14
    );
    assert_eq!(
        score(&cards(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Nine])),
        21
    );
}

#[test]
fn score_ignores_card_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let hands = [
        cards(&[Rank::Ace, Rank::Six, Rank::Five]),
        cards(&[Rank::Ace, Rank::Ace, Rank::Nine, Rank::King]),
        cards(&[Rank::Two, Rank::Three, Rank::Ace, Rank::Four]),
        cards(&[Rank::Queen, Rank::Seven, Rank::Ace]),
    ];

    for hand in hands {
        let expected = score(&hand);
        let mut shuffled = hand.clone();
        for _ in 0..20 {
            shuffled.shuffle(&mut rng);
            assert_eq!(score(&shuffled), expected);
        }
        let mut reversed = hand;
        reversed.reverse();
        assert_eq!(score(&reversed), expected);
    }
}

#[test]
fn hand_tracks_bust_and_twenty_one() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    hand.push(Card::new(Suit::Hearts, Rank::King));
    hand.push(Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(hand.len(), 2);
    assert!(hand.is_twenty_one());
    assert!(hand.is_soft());

    hand.push(Card::new(Suit::Clubs, Rank::Five));
    assert_eq!(hand.score(), 16);
    assert!(!hand.is_bust());

    hand.push(Card::new(Suit::Diamonds, Rank::Queen));
    assert_eq!(hand.score(), 26);
    assert!(hand.is_bust());

    assert_eq!(
        hand.to_string(),
        "[King of Hearts, Ace of Spades, Five of Clubs, Queen of Diamonds]"
    );

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);
}
