//! Game state types.

use alloc::vec::Vec;

use crate::player::{Player, PlayerIndex};
use crate::result::{DiscardedPair, GameResult};

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// No hands dealt.
    Idle,
    /// Hands dealt, waiting for the coin toss.
    CoinToss,
    /// First mover chosen and initial pairs discarded; play has not begun.
    InitialPairCheck,
    /// Turn loop active.
    Playing,
    /// Game finished; a [`GameResult`] is available.
    GameOver,
}

/// Outcome of the coin toss from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoinResult {
    /// The human moves first.
    First,
    /// The NPC moves first.
    Second,
}

impl CoinResult {
    /// Returns the player who moves first.
    #[must_use]
    pub const fn first_mover(self) -> PlayerIndex {
        match self {
            Self::First => PlayerIndex::Human,
            Self::Second => PlayerIndex::Npc,
        }
    }
}

/// Short status line a front end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Waiting for a new game.
    Idle,
    /// Waiting for the coin toss.
    TossingCoin,
    /// Initial pairs are being shown before play begins.
    CheckingPairs,
    /// The human player is to draw.
    PlayerTurn,
    /// The NPC is to draw.
    NpcTurn,
    /// The game has ended.
    GameOver,
}

/// Point-in-time copy of everything a front end may observe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Current phase.
    pub phase: GamePhase,
    /// Current status.
    pub status: GameStatus,
    /// Both players, human first.
    pub players: [Player; 2],
    /// Player entitled to draw, if any.
    pub current_turn: Option<PlayerIndex>,
    /// Coin toss outcome, once tossed.
    pub coin_result: Option<CoinResult>,
    /// Every pair discarded so far, oldest first.
    pub discarded_pairs: Vec<DiscardedPair>,
    /// Final result, once the game is over.
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    /// Returns the total number of cards held or discarded.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum::<usize>() + self.discarded_pairs.len() * 2
    }
}
