//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, MAX_RANK, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// Builds an unshuffled deck: every suit/rank combination followed by the joker.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::RANKED {
        for rank in 1..=MAX_RANK {
            cards.push(Card::new(suit, rank));
        }
    }
    cards.push(Card::JOKER);

    cards
}

/// Shuffles the cards in place with a Fisher-Yates pass.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot in `0..=i`.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

/// Splits the deck at `len / 2`; the second hand takes the remainder.
///
/// A full deck yields hands of 26 and 27 cards.
#[must_use]
pub fn deal(mut cards: Vec<Card>) -> (Hand, Hand) {
    let second = cards.split_off(cards.len() / 2);
    (Hand::from_cards(cards), Hand::from_cards(second))
}

/// Checks that a prearranged deck holds exactly the 53 distinct cards.
///
/// # Errors
///
/// Returns [`DeckError::WrongSize`] if the deck is not 53 cards long,
/// [`DeckError::DuplicateCard`] if any card appears twice, and
/// [`DeckError::UnknownCard`] if a card is not part of a standard deck.
pub fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    if cards.len() != DECK_SIZE {
        return Err(DeckError::WrongSize);
    }

    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in cards {
        let known = if card.is_joker() {
            card.suit == Suit::Joker
        } else {
            card.suit != Suit::Joker && (1..=MAX_RANK).contains(&card.rank)
        };
        if !known {
            return Err(DeckError::UnknownCard);
        }
        if !seen.insert(*card) {
            return Err(DeckError::DuplicateCard);
        }
    }

    Ok(())
}
