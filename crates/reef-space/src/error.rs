//! Error types for grid construction and lookups.

use reef_core::Location;
use std::fmt;

/// Errors arising from grid construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds what a [`Location`] coordinate can address.
    DimensionTooLarge {
        /// Which dimension (`"depth"` or `"width"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A location is outside the grid.
    LocationOutOfBounds {
        /// The offending location.
        location: Location,
        /// Grid depth.
        depth: u32,
        /// Grid width.
        width: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::LocationOutOfBounds {
                location,
                depth,
                width,
            } => write!(
                f,
                "location {location} out of bounds: [0, {depth}) x [0, {width})"
            ),
        }
    }
}

impl std::error::Error for SpaceError {}
