//! Discard records and end-of-game results.

use crate::hand::Hand;
use crate::pairs::Pair;
use crate::player::PlayerIndex;

/// A pair removed from a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscardedPair {
    /// The two cards, both of the same rank.
    pub cards: Pair,
    /// The player who discarded them.
    pub player: PlayerIndex,
    /// Logical creation time. Strictly increasing within a game; only used for ordering.
    pub timestamp: u64,
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    /// The winning player.
    pub winner: PlayerIndex,
    /// Whether the game ended with the loser holding only the joker.
    pub has_joker: bool,
}

/// Decides whether the game has ended after `player` resolved their pairs.
///
/// An empty hand wins for `player`. A hand holding only the joker loses for
/// `player`. Any other hand keeps the game going.
#[must_use]
pub fn evaluate(player: PlayerIndex, hand: &Hand) -> Option<GameResult> {
    if hand.is_empty() {
        Some(GameResult {
            winner: player,
            has_joker: false,
        })
    } else if hand.is_lone_joker() {
        Some(GameResult {
            winner: player.other(),
            has_joker: true,
        })
    } else {
        None
    }
}
