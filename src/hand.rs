//! Player hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::pairs::{self, Pair};

/// An ordered hand of cards.
///
/// Order matters only for drawing (cards are drawn by position) and for the
/// order in which pairs are found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Appends a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `position`, keeping the order of the rest.
    ///
    /// Returns `None` if `position` is out of range.
    pub fn take(&mut self, position: usize) -> Option<Card> {
        (position < self.cards.len()).then(|| self.cards.remove(position))
    }

    /// Removes every pair the resolver finds and returns them in discovery order.
    pub fn remove_pairs(&mut self) -> Vec<Pair> {
        let (remaining, found) = pairs::find_and_remove_pairs(&self.cards);
        self.cards = remaining;
        found
    }

    /// Returns whether the hand holds the joker.
    #[must_use]
    pub fn has_joker(&self) -> bool {
        self.cards.iter().any(Card::is_joker)
    }

    /// Returns whether the joker is the only card left.
    #[must_use]
    pub fn is_lone_joker(&self) -> bool {
        matches!(self.cards.as_slice(), [card] if card.is_joker())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
