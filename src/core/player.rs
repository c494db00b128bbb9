//! Player identification and per-player value pairs.
//!
//! ## Who
//!
//! GI-TCG is strictly a two-player game. `Who` is either player 0 or
//! player 1; raw indices convert through `TryFrom` and fail with
//! [`Error::InvalidArgument`] for anything else.
//!
//! ## PlayerPair
//!
//! Exactly two values, one per player, indexable by `Who`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Who {
    /// The first player (index 0).
    Player0,
    /// The second player (index 1).
    Player1,
}

impl Who {
    /// Both players in index order.
    pub const BOTH: [Who; 2] = [Who::Player0, Who::Player1];

    /// Parse a raw player index.
    pub fn new(index: i64) -> Result<Self> {
        match index {
            0 => Ok(Who::Player0),
            1 => Ok(Who::Player1),
            other => Err(Error::InvalidArgument(other)),
        }
    }

    /// Get the player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Who::Player0 => 0,
            Who::Player1 => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Who::Player0 => Who::Player1,
            Who::Player1 => Who::Player0,
        }
    }
}

impl std::fmt::Display for Who {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

impl TryFrom<i64> for Who {
    type Error = Error;

    fn try_from(index: i64) -> Result<Self> {
        Who::new(index)
    }
}

impl TryFrom<i32> for Who {
    type Error = Error;

    fn try_from(index: i32) -> Result<Self> {
        Who::new(i64::from(index))
    }
}

impl TryFrom<u8> for Who {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Who::new(i64::from(index))
    }
}

impl TryFrom<usize> for Who {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        // Saturate so huge indices still report as invalid rather than wrapping.
        Who::new(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<Who> for u8 {
    fn from(who: Who) -> Self {
        who.index() as u8
    }
}

/// A value for each of the two players.
///
/// ```
/// use gitcg::core::{PlayerPair, Who};
///
/// let mut omni = PlayerPair::new(false, true);
/// assert!(!omni[Who::Player0]);
/// assert!(omni[Who::Player1]);
///
/// omni[Who::Player0] = true;
/// assert_eq!(omni, PlayerPair::new(true, true));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from player 0's and player 1's values.
    pub const fn new(player0: T, player1: T) -> Self {
        Self {
            data: [player0, player1],
        }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, who: Who) -> &T {
        &self.data[who.index()]
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, who: Who) -> &mut T {
        &mut self.data[who.index()]
    }

    /// Iterate over (Who, &T) pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (Who, &T)> {
        Who::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> From<(T, T)> for PlayerPair<T> {
    fn from((player0, player1): (T, T)) -> Self {
        Self::new(player0, player1)
    }
}

impl<T> From<[T; 2]> for PlayerPair<T> {
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<Who> for PlayerPair<T> {
    type Output = T;

    fn index(&self, who: Who) -> &Self::Output {
        self.get(who)
    }
}

impl<T> IndexMut<Who> for PlayerPair<T> {
    fn index_mut(&mut self, who: Who) -> &mut Self::Output {
        self.get_mut(who)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_who_basics() {
        assert_eq!(Who::Player0.index(), 0);
        assert_eq!(Who::Player1.index(), 1);
        assert_eq!(Who::Player0.opposite(), Who::Player1);
        assert_eq!(format!("{}", Who::Player1), "Player 1");
    }

    #[test]
    fn test_who_parsing() {
        assert_eq!(Who::new(0).unwrap(), Who::Player0);
        assert_eq!(Who::try_from(1u8).unwrap(), Who::Player1);
        assert!(matches!(Who::new(2), Err(Error::InvalidArgument(2))));
        assert!(matches!(Who::new(-1), Err(Error::InvalidArgument(-1))));
        assert!(matches!(
            Who::try_from(usize::MAX),
            Err(Error::InvalidArgument(i64::MAX))
        ));
    }

    #[test]
    fn test_who_serde() {
        let json = serde_json::to_string(&Who::Player1).unwrap();
        assert_eq!(json, "1");
        assert_eq!(serde_json::from_str::<Who>("0").unwrap(), Who::Player0);
        assert!(serde_json::from_str::<Who>("2").is_err());
    }

    #[test]
    fn test_player_pair_indexing() {
        let mut pair: PlayerPair<usize> = [0, 10].into();
        assert_eq!(pair[Who::Player0], 0);
        assert_eq!(pair[Who::Player1], 10);

        pair[Who::Player1] = 15;
        assert_eq!(*pair.get(Who::Player1), 15);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair = PlayerPair::new(1, 2);
        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(Who::Player0, &1), (Who::Player1, &2)]);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair: PlayerPair<bool> = (true, false).into();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "[true,false]");
        let deserialized: PlayerPair<bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
