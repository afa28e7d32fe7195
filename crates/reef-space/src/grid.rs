//! 2D rectangular grid with 8-connected (Moore) neighbourhood.

use crate::error::SpaceError;
use reef_core::Location;
use smallvec::SmallVec;

/// Neighbour list; never spills to the heap on a Moore grid.
pub type Neighbours = SmallVec<[Location; 8]>;

/// All 8 offsets in row-major order: the row above, the two sides, the
/// row below.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A bounded `depth × width` grid.
///
/// Each cell has location `(row, col)` with `0 <= row < depth` and
/// `0 <= col < width`. Neighbours include the four cardinal directions
/// plus four diagonals; off-grid neighbours are omitted, so corners have
/// 3 neighbours and edge cells have 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    depth: u32,
    width: u32,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `depth × width` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(depth: u32, width: u32) -> Result<Self, SpaceError> {
        if depth == 0 || width == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if depth > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "depth",
                value: depth,
                max: Self::MAX_DIM,
            });
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { depth, width })
    }

    /// Number of rows.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.depth as usize) * (self.width as usize)
    }

    /// Whether `location` lies on the grid.
    pub fn contains(&self, location: &Location) -> bool {
        location.row() >= 0
            && location.col() >= 0
            && (location.row() as u32) < self.depth
            && (location.col() as u32) < self.width
    }

    /// Row-major flat index of `location`, or `None` if off-grid.
    pub fn index_of(&self, location: &Location) -> Option<usize> {
        self.contains(location)
            .then(|| location.row() as usize * self.width as usize + location.col() as usize)
    }

    /// Like [`index_of`](Self::index_of) but reports the bounds on failure.
    pub fn check(&self, location: &Location) -> Result<usize, SpaceError> {
        self.index_of(location)
            .ok_or(SpaceError::LocationOutOfBounds {
                location: *location,
                depth: self.depth,
                width: self.width,
            })
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn location_at(&self, index: usize) -> Option<Location> {
        (index < self.cell_count()).then(|| {
            let w = self.width as usize;
            Location::new((index / w) as i32, (index % w) as i32)
        })
    }

    /// The Moore neighbourhood of `location`, clipped to the grid and
    /// excluding `location` itself, in a fixed row-major order.
    ///
    /// Callers that need randomised order shuffle the result themselves.
    pub fn neighbours(&self, location: &Location) -> Neighbours {
        OFFSETS_8
            .iter()
            .map(|&(dr, dc)| location.offset(dr, dc))
            .filter(|n| self.contains(n))
            .collect()
    }

    /// All cells in row-major order: `(0,0), (0,1), ..., (depth-1, width-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.depth as i32)
            .flat_map(move |r| (0..self.width as i32).map(move |c| Location::new(r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn l(r: i32, c: i32) -> Location {
        Location::new(r, c)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(Grid::new(0, 5), Err(SpaceError::EmptySpace));
        assert_eq!(Grid::new(5, 0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn oversized_dimension_rejected() {
        assert!(matches!(
            Grid::new(u32::MAX, 1),
            Err(SpaceError::DimensionTooLarge { name: "depth", .. })
        ));
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbours(&l(2, 2));
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&l(2, 2)));
    }

    #[test]
    fn neighbours_corner() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbours(&l(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&l(1, 0)));
        assert!(n.contains(&l(0, 1)));
        assert!(n.contains(&l(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.neighbours(&l(0, 2)).len(), 5);
        assert_eq!(g.neighbours(&l(4, 2)).len(), 5);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = Grid::new(1, 1).unwrap();
        assert!(g.neighbours(&l(0, 0)).is_empty());
    }

    // ── Indexing tests ──────────────────────────────────────────

    #[test]
    fn index_round_trip_and_bounds() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.index_of(&l(2, 3)), Some(11));
        assert_eq!(g.location_at(11), Some(l(2, 3)));
        assert_eq!(g.index_of(&l(3, 0)), None);
        assert_eq!(g.index_of(&l(0, -1)), None);
        assert_eq!(g.location_at(12), None);
        assert!(matches!(
            g.check(&l(-1, 0)),
            Err(SpaceError::LocationOutOfBounds { depth: 3, width: 4, .. })
        ));
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let g = Grid::new(2, 3).unwrap();
        let order: Vec<_> = g.canonical_ordering().collect();
        assert_eq!(order.len(), 6);
        for (i, loc) in order.iter().enumerate() {
            assert_eq!(g.index_of(loc), Some(i));
        }
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(depth in 1u32..20, width in 1u32..20, r in 0i32..20, c in 0i32..20) {
            let g = Grid::new(depth, width).unwrap();
            let here = l(r % depth as i32, c % width as i32);
            for n in g.neighbours(&here) {
                prop_assert!(g.contains(&n));
                prop_assert_eq!(here.chebyshev(&n), 1);
                prop_assert!(g.neighbours(&n).contains(&here));
            }
        }
    }
}
