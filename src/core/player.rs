//! Player identification and per-player data storage.
//!
//! The crafting world is a fixed two-player game. `PlayerId` is still a
//! newtype rather than a bare bool so that call sites read as
//! `PlayerId::ONE` / `PlayerId::TWO`, and `PerPlayer<T>` gives O(1)
//! indexed storage for the pair without heap allocation.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in every episode.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier for the two-player crafting game.
///
/// Player indices are 0-based; the display form matches the board
/// characters `'1'` and `'2'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player (board character `'1'`).
    pub const ONE: PlayerId = PlayerId(0);

    /// The second player (board character `'2'`).
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a player ID from a 0-based index.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "PlayerId out of range: {id}");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// The character this player is drawn with on the board.
    #[must_use]
    pub const fn symbol(self) -> u8 {
        b'1' + self.0
    }

    /// Iterate over both player IDs in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a fixed two-element array, indexed by `PlayerId`.
///
/// ## Example
///
/// ```
/// use craftworld::core::{PerPlayer, PlayerId};
///
/// let mut rewards: PerPlayer<f64> = PerPlayer::with_value(0.0);
/// rewards[PlayerId::TWO] = -2.0;
///
/// assert_eq!(rewards[PlayerId::ONE], 0.0);
/// assert_eq!(rewards[PlayerId::TWO], -2.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PerPlayer<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PerPlayer<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
