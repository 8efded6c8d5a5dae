//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when moving a card between hands.
///
/// These are refusals: the engine leaves every hand untouched when it returns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game is not being played.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// It is not the receiving player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Source and destination are the same player.
    #[error("cannot draw from your own hand")]
    SamePlayer,
    /// The source hand has no cards.
    #[error("source hand is empty")]
    EmptyHand,
    /// The requested position is past the end of the source hand.
    #[error("card position out of range")]
    PositionOutOfRange,
}

/// Errors that can occur when starting a game from a prearranged deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly 53 cards.
    #[error("deck must hold exactly 53 cards")]
    WrongSize,
    /// A card appears more than once.
    #[error("duplicate card in deck")]
    DuplicateCard,
    /// A card is not part of a standard deck plus joker.
    #[error("card is not part of an Old Maid deck")]
    UnknownCard,
}
