use alloc::vec::Vec;
use rand::Rng;

use crate::card::Card;
use crate::deck;
use crate::error::DeckError;
use crate::player::PlayerIndex;
use crate::result;

use super::{CoinResult, Game, GamePhase, Table};

impl Game {
    /// Starts a new game: builds, shuffles and deals the deck.
    ///
    /// Moves from `Idle` to `CoinToss`. Returns `false` and changes nothing
    /// in any other phase.
    pub fn start(&self) -> bool {
        let mut table = self.table.lock();
        if table.phase != GamePhase::Idle {
            log::debug!("ignoring start in {:?}", table.phase);
            return false;
        }

        let mut cards = deck::build_deck();
        deck::shuffle(&mut cards, &mut *self.rng.lock());
        log::trace!("shuffled deck: {cards:?}");

        self.deal_into(&mut table, cards);
        true
    }

    /// Starts a new game with the deck in the given order, without shuffling.
    ///
    /// Returns `Ok(false)` outside `Idle`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is not exactly the 53 distinct cards of an
    /// Old Maid deck.
    pub fn start_with_deck(&self, cards: Vec<Card>) -> Result<bool, DeckError> {
        deck::validate_deck(&cards)?;

        let mut table = self.table.lock();
        if table.phase != GamePhase::Idle {
            log::debug!("ignoring start in {:?}", table.phase);
            return Ok(false);
        }

        self.deal_into(&mut table, cards);
        Ok(true)
    }

    fn deal_into(&self, table: &mut Table, cards: Vec<Card>) {
        let (first, second) = deck::deal(cards);
        log::info!("dealt {} and {} cards", first.len(), second.len());

        table.players[PlayerIndex::Human.index()].hand = first;
        table.players[PlayerIndex::Npc.index()].hand = second;
        table.discarded_pairs.clear();
        table.result = None;
        table.coin_result = None;
        table.current_turn = None;
        table.phase = GamePhase::CoinToss;
        table.bump();
    }

    /// Tosses the coin to choose the first mover, then discards the pairs
    /// each player was dealt.
    ///
    /// Returns the first mover, or `None` outside `CoinToss`.
    pub fn toss_coin(&self) -> Option<PlayerIndex> {
        let mut table = self.table.lock();
        if table.phase != GamePhase::CoinToss {
            log::debug!("ignoring coin toss in {:?}", table.phase);
            return None;
        }

        let coin = if self.rng.lock().random_bool(0.5) {
            CoinResult::First
        } else {
            CoinResult::Second
        };
        log::trace!("coin landed {coin:?}");

        self.apply_coin(&mut table, coin);
        Some(coin.first_mover())
    }

    /// Same as [`Game::toss_coin`] with a fixed outcome.
    ///
    /// Returns `false` outside `CoinToss`.
    pub fn toss_coin_as(&self, first: PlayerIndex) -> bool {
        let mut table = self.table.lock();
        if table.phase != GamePhase::CoinToss {
            log::debug!("ignoring coin toss in {:?}", table.phase);
            return false;
        }

        let coin = match first {
            PlayerIndex::Human => CoinResult::First,
            PlayerIndex::Npc => CoinResult::Second,
        };
        self.apply_coin(&mut table, coin);
        true
    }

    fn apply_coin(&self, table: &mut Table, coin: CoinResult) {
        table.coin_result = Some(coin);
        table.current_turn = Some(coin.first_mover());
        table.phase = GamePhase::InitialPairCheck;

        for player in PlayerIndex::BOTH {
            let found = self.discard_pairs(table, player);
            log::debug!("{player:?} starts with {} pairs", found.len());
        }

        log::info!("{:?} moves first", coin.first_mover());
        table.bump();
    }

    /// Ends the initial pair check and begins play with the first mover active.
    ///
    /// When [`GameOptions::evaluate_initial_pairs`](crate::GameOptions) is set,
    /// a hand already empty (or holding only the joker) ends the game here.
    /// Returns `false` outside `InitialPairCheck`.
    pub fn begin_play(&self) -> bool {
        let mut table = self.table.lock();
        if table.phase != GamePhase::InitialPairCheck {
            log::debug!("ignoring begin play in {:?}", table.phase);
            return false;
        }
        self.begin_play_locked(&mut table);
        true
    }

    pub(super) fn begin_play_locked(&self, table: &mut Table) {
        table.phase = GamePhase::Playing;
        table.bump();

        if !self.options.evaluate_initial_pairs {
            log::info!("play begins");
            return;
        }

        let finished = PlayerIndex::BOTH
            .into_iter()
            .find_map(|player| result::evaluate(player, table.hand(player)));
        match finished {
            Some(outcome) => Self::finish(table, outcome),
            None => log::info!("play begins"),
        }
    }

    /// Clears hands, discards, coin and result and returns to `Idle`.
    ///
    /// Any scheduled action armed before the reset becomes stale.
    /// Returns `false` if the game is already idle.
    pub fn reset(&self) -> bool {
        let mut table = self.table.lock();
        if table.phase == GamePhase::Idle {
            log::debug!("ignoring reset while idle");
            return false;
        }

        for player in &mut table.players {
            player.hand.clear();
        }
        table.discarded_pairs.clear();
        table.result = None;
        table.coin_result = None;
        table.current_turn = None;
        table.phase = GamePhase::Idle;
        table.bump();

        log::info!("game reset");
        true
    }
}
