//! Same-rank pair detection.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;

/// Two cards of equal rank, in hand order.
pub type Pair = [Card; 2];

/// Removes same-rank pairs from `cards` in a single greedy pass.
///
/// Cards are grouped by rank and paired off in hand order: the first and
/// second card of a rank form a pair, then the third and fourth, and an odd
/// card out stays in the hand. Remaining cards keep their relative order.
/// Pairs are returned ordered by the position of their first card. The joker
/// never pairs.
///
/// Three of a kind therefore loses exactly one pair and keeps its last card:
///
/// ```
/// use oldmaid::{Card, Suit, pairs::find_and_remove_pairs};
///
/// let ranks = [3, 3, 7, 7, 7, 5];
/// let suits = [Suit::Spades, Suit::Hearts, Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Spades];
/// let hand: Vec<Card> = suits.iter().zip(ranks).map(|(&s, r)| Card::new(s, r)).collect();
///
/// let (remaining, pairs) = find_and_remove_pairs(&hand);
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(remaining, vec![Card::new(Suit::Clubs, 7), Card::new(Suit::Spades, 5)]);
/// ```
#[must_use]
pub fn find_and_remove_pairs(cards: &[Card]) -> (Vec<Card>, Vec<Pair>) {
    // partner[i] = index of the next card with the same rank
    let mut partner = alloc::vec![None; cards.len()];
    let mut next_of_rank: HashMap<u8, usize> = HashMap::new();
    for (i, card) in cards.iter().enumerate().rev() {
        if card.is_joker() {
            continue;
        }
        partner[i] = next_of_rank.insert(card.rank, i);
    }

    let mut matched = alloc::vec![false; cards.len()];
    let mut remaining = Vec::with_capacity(cards.len());
    let mut found = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        if matched[i] {
            continue;
        }
        match partner[i] {
            Some(j) => {
                matched[j] = true;
                found.push([*card, cards[j]]);
            }
            None => remaining.push(*card),
        }
    }

    (remaining, found)
}

/// Returns whether any two non-joker cards share a rank.
#[must_use]
pub fn has_pairs(cards: &[Card]) -> bool {
    let mut counts: HashMap<u8, usize> = HashMap::new();
    cards.iter().filter(|card| !card.is_joker()).any(|card| {
        let count = counts.entry(card.rank).or_insert(0);
        *count += 1;
        *count > 1
    })
}
