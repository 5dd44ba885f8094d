//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats. Player 0 sits behind cells 1-5,
//! player 1 behind cells 7-11.
//!
//! ## PlayerPair
//!
//! Fixed two-slot per-player storage, indexable by `PlayerId`. Used for
//! scores and anywhere else both seats carry a value.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats. The game is strictly two-player.
pub const PLAYER_COUNT: usize = 2;

/// Identifier for one of the two seats.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < PLAYER_COUNT as u8, "PlayerId must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use oan_quan::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per seat.
///
/// ## Example
///
/// ```
/// use oan_quan::core::{PlayerId, PlayerPair};
///
/// let mut scores: PlayerPair<i64> = PlayerPair::with_value(0);
///
/// scores[PlayerId::new(1)] += 5;
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a new pair with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a new pair with both entries set to the same value.
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

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_opponent() {
        assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_player_pair_new() {
        let pair: PlayerPair<i64> = PlayerPair::new(|p| p.index() as i64 * 10);

        assert_eq!(pair[PlayerId::new(0)], 0);
        assert_eq!(pair[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair: PlayerPair<i64> = PlayerPair::with_value(0);

        pair[PlayerId::new(0)] = 10;
        pair[PlayerId::new(1)] -= 5;

        assert_eq!(pair[PlayerId::new(0)], 10);
        assert_eq!(pair[PlayerId::new(1)], -5);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair: PlayerPair<i64> = PlayerPair::new(|p| p.index() as i64);

        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &0), (PlayerId::new(1), &1)]);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair: PlayerPair<i64> = PlayerPair::new(|p| p.index() as i64 + 1);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
