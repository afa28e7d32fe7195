//! Grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(row, col)` coordinate on the simulation grid.
///
/// Equality and hashing are by value. A `Location` carries no bounds of
/// its own; whether it lies on a particular grid is a question for the
/// grid (see `reef-space`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    row: i32,
    col: i32,
}

impl Location {
    /// Create a location at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row index (0 is the top edge).
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Column index (0 is the left edge).
    pub const fn col(&self) -> i32 {
        self.col
    }

    /// The location displaced by `(dr, dc)`.
    pub const fn offset(&self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Chebyshev distance, which is 1 for every Moore neighbour.
    pub fn chebyshev(&self, other: &Location) -> u32 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        dr.max(dc)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_by_value() {
        let mut set = HashSet::new();
        set.insert(Location::new(2, 3));
        assert!(set.contains(&Location::from((2, 3))));
        assert!(!set.contains(&Location::new(3, 2)));
    }

    #[test]
    fn offset_moves_both_axes() {
        let l = Location::new(4, 4).offset(-1, 1);
        assert_eq!((l.row(), l.col()), (3, 5));
        assert_eq!(l.to_string(), "(3, 5)");
    }

    proptest! {
        #[test]
        fn offset_round_trips(r in -100i32..100, c in -100i32..100, dr in -3i32..=3, dc in -3i32..=3) {
            let l = Location::new(r, c);
            prop_assert_eq!(l.offset(dr, dc).offset(-dr, -dc), l);
            prop_assert_eq!(l.chebyshev(&l.offset(dr, dc)), dr.unsigned_abs().max(dc.unsigned_abs()));
        }
    }
}
