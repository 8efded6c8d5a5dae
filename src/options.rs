//! Game configuration options.

use alloc::string::String;
use core::time::Duration;

/// Configuration options for an Old Maid game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use oldmaid::GameOptions;
///
/// let options = GameOptions::default()
///     .with_npc_delay(Duration::from_millis(500))
///     .with_player_name("Alice");
/// assert_eq!(options.player_name, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name of the human player.
    pub player_name: String,
    /// Display name of the NPC.
    pub npc_name: String,
    /// Delay before the NPC draws once it becomes its turn.
    pub npc_delay: Duration,
    /// Delay between the initial pair check and the first turn.
    pub settle_delay: Duration,
    /// Whether hands left empty (or holding only the joker) by the initial
    /// pair check end the game as soon as play begins.
    pub evaluate_initial_pairs: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            npc_name: String::from("NPC"),
            npc_delay: Duration::from_millis(1000),
            settle_delay: Duration::from_millis(2000),
            evaluate_initial_pairs: true,
        }
    }
}

impl GameOptions {
    /// Sets the human player's display name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the NPC's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use oldmaid::GameOptions;
    ///
    /// let options = GameOptions::default().with_npc_name("Bot");
    /// assert_eq!(options.npc_name, "Bot");
    /// ```
    #[must_use]
    pub fn with_npc_name(mut self, name: impl Into<String>) -> Self {
        self.npc_name = name.into();
        self
    }

    /// Sets the delay before the NPC draws.
    #[must_use]
    pub const fn with_npc_delay(mut self, delay: Duration) -> Self {
        self.npc_delay = delay;
        self
    }

    /// Sets the delay between the initial pair check and the first turn.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use oldmaid::GameOptions;
    ///
    /// let options = GameOptions::default().with_settle_delay(Duration::ZERO);
    /// assert_eq!(options.settle_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets whether the hands are checked for a finished game when play begins.
    #[must_use]
    pub const fn with_evaluate_initial_pairs(mut self, evaluate: bool) -> Self {
        self.evaluate_initial_pairs = evaluate;
        self
    }
}
