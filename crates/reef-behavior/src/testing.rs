//! In-crate harness for running one organism against hand-built buffers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reef_arena::{PingPongField, Population};
use reef_core::{Condition, Organism, OrganismId, SpeciesTable};
use reef_space::Grid;

use crate::context::{ActContext, Scene};
use crate::tally::Tally;

pub(crate) struct Harness {
    pub arena: PingPongField,
    pub population: Population,
    pub table: SpeciesTable,
    pub rng: ChaCha8Rng,
    pub tally: Tally,
    pub hour: u32,
    pub weather: Condition,
}

impl Harness {
    pub fn new(depth: u32, width: u32) -> Self {
        Self {
            arena: PingPongField::new(Grid::new(depth, width).unwrap()),
            population: Population::new(),
            table: SpeciesTable::default(),
            rng: ChaCha8Rng::seed_from_u64(42),
            tally: Tally::default(),
            hour: 12,
            weather: Condition::Sunny,
        }
    }

    /// Place into the current buffer.
    pub fn put(&mut self, organism: Organism) -> OrganismId {
        let at = organism.location().unwrap();
        let id = self.population.spawn(organism);
        self.arena.current_mut().place(id, at);
        id
    }

    /// Place into the next buffer, as if the organism had already acted.
    pub fn put_next(&mut self, organism: Organism) -> OrganismId {
        let at = organism.location().unwrap();
        let id = self.population.spawn(organism);
        self.arena.split_mut().1.place(id, at);
        id
    }

    pub fn with_scene<T>(
        &mut self,
        f: impl FnOnce(&mut Scene<'_>, &mut ActContext<'_>) -> T,
    ) -> T {
        let (current, next) = self.arena.split_mut();
        let mut scene = Scene {
            current,
            next,
            population: &mut self.population,
        };
        let mut ctx = ActContext::new(
            self.hour,
            self.weather,
            &mut self.rng,
            &self.table,
            &mut self.tally,
        );
        f(&mut scene, &mut ctx)
    }

    pub fn act(&mut self, id: OrganismId) {
        self.with_scene(|scene, ctx| crate::act(id, scene, ctx));
    }

    pub fn organism(&self, id: OrganismId) -> &Organism {
        self.population.get(id).unwrap()
    }
}
