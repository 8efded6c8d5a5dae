//! Player identities.

use alloc::string::String;

use crate::hand::Hand;

/// Seat of a player. Exactly two seats exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerIndex {
    /// The human player (index 0).
    Human,
    /// The automated opponent (index 1).
    Npc,
}

impl PlayerIndex {
    /// Both seats, in index order.
    pub const BOTH: [Self; 2] = [Self::Human, Self::Npc];

    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Npc,
            Self::Npc => Self::Human,
        }
    }

    /// Returns the numeric index (0 = human, 1 = NPC).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Npc => 1,
        }
    }
}

/// A seated player and their hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Seat of the player.
    pub index: PlayerIndex,
    /// Display name.
    pub name: String,
    /// Cards held by the player.
    pub hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(index: PlayerIndex, name: String) -> Self {
        Self {
            index,
            name,
            hand: Hand::new(),
        }
    }
}
