//! One occupancy buffer: a cell → organism index plus placement order.
//!
//! A [`Field`] never owns organisms. It records which [`OrganismId`]
//! occupies each cell and the order in which placements happened. A
//! placement entry is *valid* while its cell still points at its id;
//! eviction simply overwrites the cell, leaving a stale entry behind that
//! every query skips.

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use reef_core::{Location, Organism, OrganismId, Species};
use reef_space::{Grid, Neighbours};

use crate::population::Population;

/// A consumable list of free cells.
///
/// Returned by [`Field::free_adjacent_locations`]. Claiming removes the
/// cell from the list, so two claims from the same list never yield the
/// same location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreeCells {
    cells: Neighbours,
    cursor: usize,
}

impl FreeCells {
    /// Take the next free cell.
    pub fn claim(&mut self) -> Option<Location> {
        let cell = self.cells.get(self.cursor).copied();
        if cell.is_some() {
            self.cursor += 1;
        }
        cell
    }

    /// The cell the next [`claim`](Self::claim) would return.
    pub fn peek(&self) -> Option<Location> {
        self.cells.get(self.cursor).copied()
    }

    /// Number of unclaimed cells.
    pub fn len(&self) -> usize {
        self.cells.len() - self.cursor
    }

    /// Whether every cell has been claimed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The unclaimed cells, in claim order.
    pub fn remaining(&self) -> &[Location] {
        &self.cells[self.cursor..]
    }
}

impl FromIterator<Location> for FreeCells {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
            cursor: 0,
        }
    }
}

/// A `depth × width` occupancy buffer.
#[derive(Clone, Debug)]
pub struct Field {
    grid: Grid,
    cells: Vec<Option<OrganismId>>,
    placed: Vec<(OrganismId, Location)>,
}

impl Field {
    /// Create an empty field over `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![None; grid.cell_count()],
            placed: Vec::new(),
        }
    }

    /// The grid topology.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    pub fn depth(&self) -> u32 {
        self.grid.depth()
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Put `id` at `location`, returning the occupant it evicted.
    ///
    /// The evicted occupant is forgotten by this buffer. Re-placing the
    /// same organism at the same cell is a no-op. Locations off the grid
    /// are ignored.
    pub fn place(&mut self, id: OrganismId, location: Location) -> Option<OrganismId> {
        let Some(idx) = self.grid.index_of(&location) else {
            debug_assert!(false, "placement at {location} is off the grid");
            return None;
        };
        let prior = self.cells[idx];
        if prior == Some(id) {
            return None;
        }
        self.cells[idx] = Some(id);
        self.placed.push((id, location));
        prior
    }

    /// The id occupying `location`, dead or alive.
    pub fn organism_at(&self, location: &Location) -> Option<OrganismId> {
        self.grid.index_of(location).and_then(|idx| self.cells[idx])
    }

    /// Whether `location` is empty or holds a dead organism.
    pub fn is_free(&self, location: &Location, population: &Population) -> bool {
        self.organism_at(location)
            .map_or(true, |id| !population.is_alive(id))
    }

    /// Whether the organism indexed at `location` is alive and still
    /// records `location` as its own, i.e. it has not left the cell.
    pub fn is_held(&self, location: &Location, population: &Population) -> bool {
        self.organism_at(location)
            .and_then(|id| population.get(id))
            .is_some_and(|o| o.is_alive() && o.location() == Some(*location))
    }

    fn is_valid(&self, id: OrganismId, location: Location) -> bool {
        self.organism_at(&location) == Some(id)
    }

    /// Every placement still in force, in placement order.
    pub fn entries(&self) -> impl Iterator<Item = (OrganismId, Location)> + '_ {
        self.placed
            .iter()
            .copied()
            .filter(|&(id, loc)| self.is_valid(id, loc))
    }

    /// Ids of every placement still in force, in placement order.
    pub fn organisms(&self) -> impl Iterator<Item = OrganismId> + '_ {
        self.entries().map(|(id, _)| id)
    }

    /// Living occupants in placement order.
    pub fn living<'p>(
        &'p self,
        population: &'p Population,
    ) -> impl Iterator<Item = (OrganismId, &'p Organism)> + 'p {
        self.organisms().filter_map(move |id| {
            population
                .get(id)
                .filter(|o| o.is_alive())
                .map(|o| (id, o))
        })
    }

    /// The Moore neighbourhood of `location` in shuffled order.
    pub fn adjacent_locations<R: Rng + ?Sized>(
        &self,
        location: &Location,
        rng: &mut R,
    ) -> Neighbours {
        let mut neighbours = self.grid.neighbours(location);
        neighbours.shuffle(rng);
        neighbours
    }

    /// Adjacent cells that are empty or hold a dead organism, in shuffled
    /// order.
    pub fn free_adjacent_locations<R: Rng + ?Sized>(
        &self,
        location: &Location,
        population: &Population,
        rng: &mut R,
    ) -> FreeCells {
        self.adjacent_locations(location, rng)
            .into_iter()
            .filter(|loc| self.is_free(loc, population))
            .collect()
    }

    /// Every free cell in row-major order.
    pub fn free_locations(&self, population: &Population) -> Vec<Location> {
        self.grid
            .canonical_ordering()
            .filter(|loc| self.is_free(loc, population))
            .collect()
    }

    /// Number of living occupants.
    pub fn living_count(&self, population: &Population) -> usize {
        self.living(population).count()
    }

    /// Living occupants per species, every species listed.
    pub fn stats(&self, population: &Population) -> IndexMap<Species, usize> {
        let mut counts = [0usize; Species::ALL.len()];
        for (_, organism) in self.living(population) {
            counts[organism.species().index()] += 1;
        }
        Species::ALL.iter().map(|&s| (s, counts[s.index()])).collect()
    }

    /// Whether every required animal species has a living occupant.
    pub fn is_viable(&self, population: &Population) -> bool {
        let stats = self.stats(population);
        Species::REQUIRED
            .iter()
            .all(|s| stats.get(s).copied().unwrap_or(0) > 0)
    }

    /// Empty both the occupancy index and the placement order, keeping
    /// their allocations.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.placed.clear();
    }

    /// Rewrite this buffer and `population` so that the population holds
    /// exactly the living occupants of this buffer, numbered in placement
    /// order. Dead occupants are removed from their cells.
    pub(crate) fn compact(&mut self, population: &mut Population) {
        let mut old: Vec<Option<Organism>> = population.take_all().into_iter().map(Some).collect();
        let mut placed = std::mem::take(&mut self.placed);
        let valid: Vec<(OrganismId, Location, usize)> = placed
            .iter()
            .filter_map(|&(id, loc)| {
                let idx = self.grid.index_of(&loc)?;
                (self.cells[idx] == Some(id)).then_some((id, loc, idx))
            })
            .collect();

        self.cells.fill(None);
        placed.clear();
        for (id, loc, idx) in valid {
            let Some(mut organism) = old.get_mut(id.index()).and_then(Option::take) else {
                continue;
            };
            if organism.is_alive() {
                organism.set_location(loc);
                let renumbered = population.spawn(organism);
                self.cells[idx] = Some(renumbered);
                placed.push((renumbered, loc));
            }
        }
        self.placed = placed;
    }
}
