use alloc::vec::Vec;
use rand::Rng;

use crate::card::Card;
use crate::error::DrawError;
use crate::player::PlayerIndex;
use crate::result::{self, DiscardedPair, GameResult};

use super::{Game, GamePhase, Table};

/// What happened during one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The player who drew.
    pub drawer: PlayerIndex,
    /// The card that changed hands.
    pub card: Card,
    /// Position the card was taken from in the opponent's hand.
    pub position: usize,
    /// Pairs the drawer discarded afterwards.
    pub pairs: Vec<DiscardedPair>,
    /// Final result, if this draw ended the game.
    pub result: Option<GameResult>,
}

impl Game {
    /// Moves a card from a uniformly random position of `from`'s hand to the
    /// end of `to`'s hand, then resolves pairs, checks for the end of the game
    /// and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game untouched, if `from` and `to` are the
    /// same player, the game is not being played, it is not `to`'s turn, or
    /// `from` has no cards.
    pub fn draw(&self, from: PlayerIndex, to: PlayerIndex) -> Result<TurnOutcome, DrawError> {
        let mut table = self.table.lock();
        self.draw_locked(&mut table, from, to, None)
    }

    /// Same as [`Game::draw`], taking the card at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error for the same reasons as [`Game::draw`], or if
    /// `position` is past the end of `from`'s hand.
    pub fn draw_at(
        &self,
        from: PlayerIndex,
        to: PlayerIndex,
        position: usize,
    ) -> Result<TurnOutcome, DrawError> {
        let mut table = self.table.lock();
        self.draw_locked(&mut table, from, to, Some(position))
    }

    /// The human player draws the card at `position` of the NPC's hand.
    ///
    /// Ignored (returns `None`) unless the game is being played and it is the
    /// human's turn. An out-of-range position is refused the same way.
    pub fn select_card(&self, position: usize) -> Option<TurnOutcome> {
        let mut table = self.table.lock();
        if table.phase != GamePhase::Playing || table.current_turn != Some(PlayerIndex::Human) {
            log::debug!(
                "ignoring card selection in {:?} on {:?}'s turn",
                table.phase,
                table.current_turn
            );
            return None;
        }

        self.draw_locked(&mut table, PlayerIndex::Npc, PlayerIndex::Human, Some(position))
            .inspect_err(|err| log::warn!("card selection refused: {err}"))
            .ok()
    }

    /// The NPC draws a random card from the human player's hand.
    ///
    /// Ignored (returns `None`) unless the game is being played and it is the
    /// NPC's turn.
    pub fn npc_draw(&self) -> Option<TurnOutcome> {
        let mut table = self.table.lock();
        self.npc_draw_locked(&mut table)
    }

    pub(super) fn npc_draw_locked(&self, table: &mut Table) -> Option<TurnOutcome> {
        if table.phase != GamePhase::Playing || table.current_turn != Some(PlayerIndex::Npc) {
            log::debug!(
                "ignoring NPC draw in {:?} on {:?}'s turn",
                table.phase,
                table.current_turn
            );
            return None;
        }

        self.draw_locked(table, PlayerIndex::Human, PlayerIndex::Npc, None)
            .inspect_err(|err| log::warn!("NPC draw refused: {err}"))
            .ok()
    }

    fn draw_locked(
        &self,
        table: &mut Table,
        from: PlayerIndex,
        to: PlayerIndex,
        position: Option<usize>,
    ) -> Result<TurnOutcome, DrawError> {
        if from == to {
            return Err(DrawError::SamePlayer);
        }
        if table.phase != GamePhase::Playing {
            return Err(DrawError::InvalidState);
        }
        if table.current_turn != Some(to) {
            return Err(DrawError::NotYourTurn);
        }

        let available = table.hand(from).len();
        if available == 0 {
            return Err(DrawError::EmptyHand);
        }
        let position = match position {
            Some(position) if position >= available => {
                return Err(DrawError::PositionOutOfRange);
            }
            Some(position) => position,
            None => self.rng.lock().random_range(0..available),
        };

        let card = table
            .hand_mut(from)
            .take(position)
            .ok_or(DrawError::PositionOutOfRange)?;
        table.hand_mut(to).add_card(card);
        log::debug!("{to:?} drew {card} from position {position}");

        let pairs = self.discard_pairs(table, to);
        let outcome = result::evaluate(to, table.hand(to));
        match outcome {
            Some(outcome) => Self::finish(table, outcome),
            None => table.current_turn = Some(to.other()),
        }
        table.bump();

        Ok(TurnOutcome {
            drawer: to,
            card,
            position,
            pairs,
            result: outcome,
        })
    }

    pub(super) fn finish(table: &mut Table, outcome: GameResult) {
        log::info!(
            "{:?} wins{}",
            outcome.winner,
            if outcome.has_joker {
                " (loser kept the joker)"
            } else {
                ""
            }
        );
        table.result = Some(outcome);
        table.current_turn = None;
        table.phase = GamePhase::GameOver;
    }
}
