//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Arcana is strictly a two-player game, so player identity is a two-variant
//! enum rather than a numeric index. `opponent()` gives the other seat.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed two-element array.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// The player who takes the first turn.
    First,
    /// The player who takes the second turn.
    Second,
}

impl PlayerId {
    /// Both players, in seat order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// Get the other seat.
    ///
    /// ```
    /// use arcana_core::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::First.opponent(), PlayerId::Second);
    /// assert_eq!(PlayerId::Second.opponent(), PlayerId::First);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a fixed `[T; 2]` with one entry per seat. Created with a
/// factory function receiving each seat's `PlayerId`.
///
/// ## Example
///
/// ```
/// use arcana_core::core::{PlayerId, PlayerMap};
///
/// // Create with factory
/// let mut life: PlayerMap<i32> = PlayerMap::new(|_| 20);
///
/// // Access by player
/// assert_eq!(life[PlayerId::First], 20);
///
/// // Modify
/// life[PlayerId::Second] = 15;
/// assert_eq!(life[PlayerId::Second], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::First), factory(PlayerId::Second)],
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
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

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.iter().copied().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::BOTH.iter().copied().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
