//! Read-only view of a published field.

use indexmap::IndexMap;
use reef_core::{Location, Organism, Species};

use crate::field::Field;
use crate::hash::field_digest;
use crate::population::Population;

/// A published buffer together with the organisms it refers to.
///
/// This is what views and statistics sinks receive once per tick. It
/// cannot be used to mutate the field.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    field: &'a Field,
    population: &'a Population,
}

impl<'a> Snapshot<'a> {
    /// Pair a buffer with its population.
    pub fn new(field: &'a Field, population: &'a Population) -> Self {
        Self { field, population }
    }

    /// Number of rows.
    pub fn depth(&self) -> u32 {
        self.field.depth()
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.field.width()
    }

    /// The living organism at `location`, if any.
    pub fn organism_at(&self, location: &Location) -> Option<&'a Organism> {
        self.field
            .organism_at(location)
            .and_then(|id| self.population.get(id))
            .filter(|o| o.is_alive())
    }

    /// Living organisms in placement order.
    pub fn organisms(&self) -> impl Iterator<Item = &'a Organism> + 'a {
        self.field.living(self.population).map(|(_, o)| o)
    }

    /// Living count per species.
    pub fn stats(&self) -> IndexMap<Species, usize> {
        self.field.stats(self.population)
    }

    /// Whether every required animal species survives.
    pub fn is_viable(&self) -> bool {
        self.field.is_viable(self.population)
    }

    /// Total living occupants.
    pub fn living_count(&self) -> usize {
        self.field.living_count(self.population)
    }

    /// FNV-1a digest of every living occupant; see [`field_digest`].
    pub fn digest(&self) -> u64 {
        field_digest(self.field, self.population)
    }
}

impl std::fmt::Debug for Snapshot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("depth", &self.depth())
            .field("width", &self.width())
            .field("living", &self.living_count())
            .finish()
    }
}
