//! An Old Maid card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a two-player game of Old Maid
//! (a human against an NPC): dealing a 52-card deck plus one joker, the coin
//! toss, the initial pair check, the draw-and-discard turn loop and the final
//! result. Rendering is left to the caller, which drives the engine through a
//! handful of actions and observes it through [`Game::snapshot`].
//!
//! # Example
//!
//! ```
//! use oldmaid::{Game, GameOptions, GamePhase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start();
//! game.toss_coin();
//! game.begin_play();
//!
//! while game.phase() == GamePhase::Playing {
//!     if game.npc_draw().is_none() {
//!         game.select_card(0);
//!     }
//! }
//! assert!(game.result().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pairs;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, JOKER_RANK, Suit};
pub use error::{DeckError, DrawError};
pub use game::{
    CoinResult, Fired, Game, GamePhase, GameSnapshot, GameStatus, Scheduled, ScheduledAction,
    Ticket, TurnOutcome,
};
pub use hand::Hand;
pub use options::GameOptions;
pub use pairs::Pair;
pub use player::{Player, PlayerIndex};
pub use result::{DiscardedPair, GameResult};
