//! Per-tick inputs handed to every behaviour.

use rand::{Rng, RngCore};
use reef_arena::{Field, FreeCells, Population};
use reef_core::{Condition, Location, Species, SpeciesDescriptor, SpeciesTable};

use crate::tally::Tally;

/// The buffers an organism acts on.
///
/// `current` is the published generation and is never written during a
/// tick. `next` receives every placement. `population` owns the organisms
/// both buffers refer to; killing prey marks its entry dead here.
pub struct Scene<'a> {
    /// Read-only published buffer.
    pub current: &'a Field,
    /// Staging buffer for the following generation.
    pub next: &'a mut Field,
    /// Organism storage shared by both buffers.
    pub population: &'a mut Population,
}

impl Scene<'_> {
    /// Cells around `location` that a birth or a move may claim, in
    /// shuffled order.
    ///
    /// A cell qualifies when it is free in `next` and no living organism
    /// that has yet to act still holds it in `current`. Such an organism
    /// will re-place itself there if it stays put.
    pub fn free_adjacent_locations<R: Rng + ?Sized>(
        &self,
        location: &Location,
        rng: &mut R,
    ) -> FreeCells {
        let population = &*self.population;
        self.next
            .free_adjacent_locations(location, population, rng)
            .remaining()
            .iter()
            .copied()
            .filter(|loc| !self.current.is_held(loc, population))
            .collect()
    }
}

/// Explicit per-tick context passed to [`Behavior::act`](crate::Behavior::act).
///
/// Replaces any ambient simulator state: behaviours see the clock, the
/// weather and the random source only through this value.
pub struct ActContext<'a> {
    time_of_day: u32,
    weather: Condition,
    rng: &'a mut dyn RngCore,
    table: &'a SpeciesTable,
    tally: &'a mut Tally,
}

impl<'a> ActContext<'a> {
    /// Construct a context. Typically called by the engine once per tick.
    pub fn new(
        time_of_day: u32,
        weather: Condition,
        rng: &'a mut dyn RngCore,
        table: &'a SpeciesTable,
        tally: &'a mut Tally,
    ) -> Self {
        Self {
            time_of_day,
            weather,
            rng,
            table,
            tally,
        }
    }

    /// Hour of the day in `0..24`.
    pub fn time_of_day(&self) -> u32 {
        self.time_of_day
    }

    /// Weather for this tick.
    pub fn weather(&self) -> Condition {
        self.weather
    }

    /// The shared random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Species parameter table.
    pub fn table(&self) -> &'a SpeciesTable {
        self.table
    }

    /// Descriptor for `species`.
    pub fn descriptor(&self, species: Species) -> &'a SpeciesDescriptor {
        self.table.get(species)
    }

    /// Event counters for this tick.
    pub fn tally(&mut self) -> &mut Tally {
        self.tally
    }
}
