//! Seat identification and per-seat storage.
//!
//! ## PlayerId
//!
//! A seat at the table. Seat `PlayerId(0)` opens the match.
//!
//! ## PlayerMap
//!
//! One value per seat, backed by a `Vec` for O(1) access and indexable
//! by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
///
/// Seats are 0-based: the opening seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, wrapping around the table.
    ///
    /// ```
    /// use impact_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seat_count: usize) -> Self {
        Self(((self.index() + 1) % seat_count) as u8)
    }

    /// Iterate over all seats of a table with `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..seat_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use impact_engine::core::{PlayerId, PlayerMap};
///
/// let mut bank: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// bank[PlayerId::new(1)] = 10;
/// assert_eq!(bank[PlayerId::new(1)], 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default(seat_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(seat_count, |_| T::default())
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `seat` exists in this map.
    #[must_use]
    pub fn contains(&self, seat: PlayerId) -> bool {
        seat.index() < self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: PlayerId) -> Option<&T> {
        self.data.get(seat.index())
    }

    pub fn get_mut(&mut self, seat: PlayerId) -> Option<&mut T> {
        self.data.get_mut(seat.index())
    }

    /// Mutable access to two distinct seats at once.
    ///
    /// Returns `None` if the seats are equal or either is out of range.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> Option<(&mut T, &mut T)> {
        let (ai, bi) = (a.index(), b.index());
        if ai == bi || ai >= self.data.len() || bi >= self.data.len() {
            return None;
        }
        if ai < bi {
            let (left, right) = self.data.split_at_mut(bi);
            Some((&mut left[ai], &mut right[0]))
        } else {
            let (left, right) = self.data.split_at_mut(ai);
            Some((&mut right[0], &mut left[bi]))
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all seat IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_seat_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(format!("{}", PlayerId::new(1)), "Seat 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.seat_count(), 3);
    }

    #[test]
    fn test_get_out_of_range() {
        let map: PlayerMap<u32> = PlayerMap::with_value(2, 7);

        assert_eq!(map.get(PlayerId::new(1)), Some(&7));
        assert_eq!(map.get(PlayerId::new(2)), None);
        assert!(!map.contains(PlayerId::new(5)));
    }

    #[test]
    fn test_pair_mut() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(2, 0);

        {
            let (a, b) = map.pair_mut(PlayerId::new(1), PlayerId::new(0)).unwrap();
            *a = 1;
            *b = 2;
        }

        assert_eq!(map[PlayerId::new(1)], 1);
        assert_eq!(map[PlayerId::new(0)], 2);
        assert!(map.pair_mut(PlayerId::new(0), PlayerId::new(0)).is_none());
        assert!(map.pair_mut(PlayerId::new(0), PlayerId::new(9)).is_none());
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_player_map_zero_seats() {
        let _: PlayerMap<u32> = PlayerMap::with_value(0, 0);
    }
}
