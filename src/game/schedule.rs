//! Timed actions owned by the front end.
//!
//! The engine never sleeps. Instead it tells the caller which action is due
//! next and after how long, together with a [`Ticket`] tied to the current
//! table generation. Every mutation bumps the generation, so a timer that
//! fires after a reset, a restart or any other move carries a stale ticket
//! and [`Game::fire`] discards it.
//!
//! ```
//! use oldmaid::{Game, GameOptions, ScheduledAction, PlayerIndex, GamePhase};
//!
//! let game = Game::new(GameOptions::default(), 7);
//! game.start();
//! game.toss_coin_as(PlayerIndex::Npc);
//!
//! let due = game.next_scheduled().unwrap();
//! assert_eq!(due.action, ScheduledAction::FinishPairCheck);
//!
//! game.reset();
//! assert!(game.fire(due.ticket).is_none());
//! assert_eq!(game.phase(), GamePhase::Idle);
//! ```

use core::time::Duration;

use crate::player::PlayerIndex;

use super::{Game, GamePhase, Table, TurnOutcome};

/// Proof that a scheduled action was armed against a particular table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
}

/// An action the engine expects to run after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Leave the initial pair check and begin play.
    FinishPairCheck,
    /// The NPC draws from the human player's hand.
    NpcDraw,
}

/// A due action, its delay and the ticket that authorises it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// Action to run.
    pub action: ScheduledAction,
    /// How long to wait before firing.
    pub delay: Duration,
    /// Ticket to pass to [`Game::fire`].
    pub ticket: Ticket,
}

/// Result of firing a scheduled action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fired {
    /// Play began (or the game ended straight away on the initial hands).
    PlayBegan,
    /// The NPC drew a card.
    NpcDrew(TurnOutcome),
}

impl Game {
    fn due(&self, table: &Table) -> Option<Scheduled> {
        let (action, delay) = match (table.phase, table.current_turn) {
            (GamePhase::InitialPairCheck, _) => {
                (ScheduledAction::FinishPairCheck, self.options.settle_delay)
            }
            (GamePhase::Playing, Some(PlayerIndex::Npc)) => {
                (ScheduledAction::NpcDraw, self.options.npc_delay)
            }
            _ => return None,
        };

        Some(Scheduled {
            action,
            delay,
            ticket: Ticket {
                generation: table.generation,
            },
        })
    }

    /// Returns the timed action due in the current state, if any.
    pub fn next_scheduled(&self) -> Option<Scheduled> {
        let table = self.table.lock();
        self.due(&table)
    }

    /// Returns whether `ticket` still matches the current table state.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.table.lock().generation == ticket.generation
    }

    /// Runs the action `ticket` was issued for.
    ///
    /// Returns `None` without touching the game if the ticket is stale.
    pub fn fire(&self, ticket: Ticket) -> Option<Fired> {
        let mut table = self.table.lock();
        if table.generation != ticket.generation {
            log::warn!(
                "discarding stale scheduled action (generation {} != {})",
                ticket.generation,
                table.generation
            );
            return None;
        }

        match self.due(&table)?.action {
            ScheduledAction::FinishPairCheck => {
                self.begin_play_locked(&mut table);
                Some(Fired::PlayBegan)
            }
            ScheduledAction::NpcDraw => self.npc_draw_locked(&mut table).map(Fired::NpcDrew),
        }
    }
}
