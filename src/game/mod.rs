//! Game engine and state management.

use core::sync::atomic::{AtomicU64, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::{Player, PlayerIndex};
use crate::result::{DiscardedPair, GameResult};

pub mod schedule;
mod setup;
pub mod state;
mod turn;

pub use schedule::{Fired, Scheduled, ScheduledAction, Ticket};
pub use state::{CoinResult, GamePhase, GameSnapshot, GameStatus};
pub use turn::TurnOutcome;

/// Everything a single trigger reads or writes, kept under one lock so each
/// trigger runs to completion against a consistent table.
#[derive(Debug)]
struct Table {
    phase: GamePhase,
    players: [Player; 2],
    current_turn: Option<PlayerIndex>,
    coin_result: Option<CoinResult>,
    discarded_pairs: Vec<DiscardedPair>,
    result: Option<GameResult>,
    /// Bumped on every mutation; scheduled actions carry the value they saw.
    generation: u64,
}

impl Table {
    fn hand(&self, player: PlayerIndex) -> &Hand {
        &self.players[player.index()].hand
    }

    fn hand_mut(&mut self, player: PlayerIndex) -> &mut Hand {
        &mut self.players[player.index()].hand
    }

    fn status(&self) -> GameStatus {
        match (self.phase, self.current_turn) {
            (GamePhase::Idle, _) => GameStatus::Idle,
            (GamePhase::CoinToss, _) => GameStatus::TossingCoin,
            (GamePhase::InitialPairCheck, _) => GameStatus::CheckingPairs,
            (GamePhase::GameOver, _) => GameStatus::GameOver,
            (GamePhase::Playing, Some(PlayerIndex::Npc)) => GameStatus::NpcTurn,
            (GamePhase::Playing, _) => GameStatus::PlayerTurn,
        }
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

/// An Old Maid game engine for one human player against one NPC.
///
/// The game owns both hands, the discard log and the random source. Every
/// action takes `&self`; actions that do not apply to the current phase are
/// ignored rather than reported as errors.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Table state.
    table: Mutex<Table>,
    /// Logical clock for discard timestamps.
    clock: AtomicU64,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new idle game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use oldmaid::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), GamePhase::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let players = [
            Player::new(PlayerIndex::Human, options.player_name.clone()),
            Player::new(PlayerIndex::Npc, options.npc_name.clone()),
        ];

        Self {
            options,
            table: Mutex::new(Table {
                phase: GamePhase::Idle,
                players,
                current_turn: None,
                coin_result: None,
                discarded_pairs: Vec::new(),
                result: None,
                generation: 0,
            }),
            clock: AtomicU64::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Resolves pairs in `player`'s hand and appends them to the discard log.
    fn discard_pairs(&self, table: &mut Table, player: PlayerIndex) -> Vec<DiscardedPair> {
        let found = table.hand_mut(player).remove_pairs();
        let discarded: Vec<DiscardedPair> = found
            .into_iter()
            .map(|cards| DiscardedPair {
                cards,
                player,
                timestamp: self.clock.fetch_add(1, Ordering::SeqCst),
            })
            .collect();

        for pair in &discarded {
            log::debug!(
                "{:?} discarded {} and {}",
                player,
                pair.cards[0],
                pair.cards[1]
            );
        }
        table.discarded_pairs.extend_from_slice(&discarded);
        discarded
    }

    /// Returns the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.table.lock().phase
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.table.lock().status()
    }

    /// Returns the player entitled to draw.
    ///
    /// Returns `None` before the coin toss and once the game is over.
    pub fn current_turn(&self) -> Option<PlayerIndex> {
        self.table.lock().current_turn
    }

    /// Returns a clone of the player's hand.
    pub fn hand(&self, player: PlayerIndex) -> Hand {
        self.table.lock().hand(player).clone()
    }

    /// Returns a clone of the player.
    pub fn player(&self, player: PlayerIndex) -> Player {
        self.table.lock().players[player.index()].clone()
    }

    /// Returns every pair discarded so far, oldest first.
    pub fn discarded_pairs(&self) -> Vec<DiscardedPair> {
        self.table.lock().discarded_pairs.clone()
    }

    /// Returns the final result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.table.lock().result
    }

    /// Returns the coin toss outcome, once tossed.
    pub fn coin_result(&self) -> Option<CoinResult> {
        self.table.lock().coin_result
    }

    /// Returns a copy of all observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        let table = self.table.lock();
        GameSnapshot {
            phase: table.phase,
            status: table.status(),
            players: table.players.clone(),
            current_turn: table.current_turn,
            coin_result: table.coin_result,
            discarded_pairs: table.discarded_pairs.clone(),
            result: table.result,
        }
    }
}
