//! Game configuration options.

use alloc::string::String;

/// Key under which the engine persists its state by default.
pub const DEFAULT_STORAGE_KEY: &str = "game-state";

/// Configuration options for a dreidel game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dreidel::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_pot(10)
///     .with_starting_score(0);
/// assert_eq!(options.starting_pot, 10);
/// assert_eq!(options.starting_score, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Points in the pot when a game starts or is cleared.
    pub starting_pot: u32,
    /// Points a player receives on joining.
    ///
    /// Pot-only variants start every player at 0.
    pub starting_score: u32,
    /// Key the engine uses with its [`Store`](crate::Store).
    pub storage_key: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_pot: 5,
            starting_score: 4,
            storage_key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl GameOptions {
    /// Sets the starting pot.
    ///
    /// # Example
    ///
    /// ```
    /// use dreidel::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_pot(8);
    /// assert_eq!(options.starting_pot, 8);
    /// ```
    #[must_use]
    pub const fn with_starting_pot(mut self, pot: u32) -> Self {
        self.starting_pot = pot;
        self
    }

    /// Sets the score each joining player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use dreidel::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_score(10);
    /// assert_eq!(options.starting_score, 10);
    /// ```
    #[must_use]
    pub const fn with_starting_score(mut self, score: u32) -> Self {
        self.starting_score = score;
        self
    }

    /// Sets the storage key.
    ///
    /// # Example
    ///
    /// ```
    /// use dreidel::GameOptions;
    ///
    /// let options = GameOptions::default().with_storage_key("family-game");
    /// assert_eq!(options.storage_key, "family-game");
    /// ```
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
