//! Double-buffered occupancy storage for reef simulations.
//!
//! Organisms live in a single [`Population`] arena and are referred to by
//! [`OrganismId`](reef_core::OrganismId). Two [`Field`] buffers map grid
//! cells to ids:
//!
//! ```text
//! PingPongField
//! ├── current: Field   ←── read-only during a tick
//! └── next:    Field   ←── written by every placement this tick
//! Population           ←── shared organism storage, compacted on publish
//! ```
//!
//! On [`PingPongField::publish`] the buffers swap, the population is
//! compacted to the organisms that survived into the new current buffer,
//! and the old current buffer is cleared for reuse. No occupancy storage
//! is reallocated between ticks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod hash;
pub mod pingpong;
pub mod population;
pub mod read;

pub use field::{Field, FreeCells};
pub use hash::field_digest;
pub use pingpong::PingPongField;
pub use population::Population;
pub use read::Snapshot;
