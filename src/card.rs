//! Card types and deck constants.

use core::fmt;

/// Card suit.
///
/// [`Suit::Joker`] is the sentinel carried by the single joker; it never
/// appears on a ranked card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Joker marker.
    Joker,
}

impl Suit {
    /// The four ranked suits, in deck-building order.
    pub const RANKED: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Joker => "🃏",
        }
    }
}

/// Rank reserved for the joker.
pub const JOKER_RANK: u8 = 0;

/// Highest rank of a ranked card (King).
pub const MAX_RANK: u8 = 13;

/// Number of cards in an Old Maid deck: 52 ranked cards plus one joker.
pub const DECK_SIZE: usize = 53;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King, 0 = joker).
    pub rank: u8,
}

impl Card {
    /// The joker.
    pub const JOKER: Self = Self {
        suit: Suit::Joker,
        rank: JOKER_RANK,
    };

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::JOKER`] for
    /// the joker rather than pairing an arbitrary suit with rank 0.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is the joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER_RANK
    }

    /// Returns the stable identifier of this card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId(*self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("JK");
        }
        let rank = match self.rank {
            1 => "A",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => return write!(f, "{}{}", self.rank, self.suit.symbol()),
        };
        write!(f, "{rank}{}", self.suit.symbol())
    }
}

/// Stable, unique identifier of a card within one deck.
///
/// Formats as `"<suit>-<rank>"` (for example `"♠-1"`) or `"joker"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(Card);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_joker() {
            f.write_str("joker")
        } else {
            write!(f, "{}-{}", self.0.suit.symbol(), self.0.rank)
        }
    }
}
