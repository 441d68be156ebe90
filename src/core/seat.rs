//! Player seats.
//!
//! Seats are 1-based, matching how players refer to each other at the
//! table: "seat 1" through "seat N". A [`Seat`] can only be obtained
//! through a bounds check against the table size, so holding one is proof
//! the slot exists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated 1-based player slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Validate `number` against the table size.
    ///
    /// Returns `None` when `number` is outside `[1, num_players]`; the
    /// caller decides whether that is a configuration error (constructor
    /// input) or an invalid operation (a mid-game lookup).
    #[must_use]
    pub fn new(number: u8, num_players: u8) -> Option<Self> {
        if (1..=num_players).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    /// The 1-based seat number players speak aloud.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The 0-based index into the role assignment.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over every seat at a table of `num_players`.
    pub fn all(num_players: u8) -> impl Iterator<Item = Seat> {
        (1..=num_players).map(Seat)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Seat::new(1, 5).is_some());
        assert!(Seat::new(5, 5).is_some());
        assert!(Seat::new(0, 5).is_none());
        assert!(Seat::new(6, 5).is_none());
    }

    #[test]
    fn test_index_is_zero_based() {
        let seat = Seat::new(3, 5).unwrap();
        assert_eq!(seat.number(), 3);
        assert_eq!(seat.index(), 2);
    }

    #[test]
    fn test_all() {
        let seats: Vec<Seat> = Seat::all(5).collect();
        assert_eq!(seats.len(), 5);
        assert_eq!(seats[0].number(), 1);
        assert_eq!(seats[4].number(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Seat::new(2, 5).unwrap().to_string(), "seat 2");
    }
}
