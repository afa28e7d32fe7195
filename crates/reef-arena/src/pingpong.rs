//! Double-buffered field orchestrator.
//!
//! The lifecycle per tick is:
//! 1. [`PingPongField::split_mut`] borrows the current buffer read-only and
//!    the next buffer writable
//! 2. behaviours place survivors and newborns into the next buffer
//! 3. [`PingPongField::publish`] swaps the buffers, compacts the
//!    population and clears the old current buffer for reuse

use reef_space::Grid;

use crate::field::Field;
use crate::population::Population;
use crate::read::Snapshot;

/// Two [`Field`] buffers that alternate between "current" and "next".
#[derive(Clone, Debug)]
pub struct PingPongField {
    current: Field,
    next: Field,
}

impl PingPongField {
    /// Create two empty buffers over `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            current: Field::new(grid),
            next: Field::new(grid),
        }
    }

    /// The grid both buffers share.
    pub fn grid(&self) -> &Grid {
        self.current.grid()
    }

    /// The published buffer.
    pub fn current(&self) -> &Field {
        &self.current
    }

    /// Mutable access to the published buffer, for seeding a population
    /// before the first tick.
    pub fn current_mut(&mut self) -> &mut Field {
        &mut self.current
    }

    /// The staging buffer.
    pub fn next(&self) -> &Field {
        &self.next
    }

    /// Borrow the current buffer for reading and the next for writing.
    pub fn split_mut(&mut self) -> (&Field, &mut Field) {
        (&self.current, &mut self.next)
    }

    /// Make the staging buffer current.
    ///
    /// After the swap, `population` holds exactly the living occupants of
    /// the new current buffer, renumbered in placement order. The new
    /// staging buffer is empty.
    pub fn publish(&mut self, population: &mut Population) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.current.compact(population);
        self.next.clear();
    }

    /// Empty both buffers.
    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
    }

    /// Read-only view of the published buffer.
    pub fn snapshot<'a>(&'a self, population: &'a Population) -> Snapshot<'a> {
        Snapshot::new(&self.current, population)
    }
}
