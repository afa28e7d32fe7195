//! Spatial topology for Reef simulations.
//!
//! The reef is a bounded rectangle of `depth × width` cells. [`Grid`]
//! answers every purely geometric question the simulation asks: whether
//! a [`Location`](reef_core::Location) is on the grid, its flat index, the
//! canonical row-major ordering, and its 8-connected (Moore)
//! neighbourhood clipped to the edges.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::SpaceError;
pub use grid::{Grid, Neighbours};
