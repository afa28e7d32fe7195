//! Test utilities for reef development.
//!
//! Provides a [`ScenarioBuilder`] for hand-placed simulations, recording
//! implementations of the observer traits, and organism fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reef_arena::Snapshot;
use reef_core::{Condition, Location, Organism, Species, TickId, Weather};
use reef_engine::{
    CreationProbabilities, FieldView, InfectionConfig, SimConfig, Simulator, StatsSink,
};

/// Seed used when a test does not pick one.
pub const TEST_SEED: u64 = 0x5EED_4EEF;

/// Deterministic RNG for unit tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Builder for simulators with a hand-placed population.
///
/// Starts from an empty field (no random seeding), infection off and
/// sunny weather pinned, so that only the placed organisms and the
/// behaviour under test affect the outcome.
pub struct ScenarioBuilder {
    config: SimConfig,
    placements: Vec<(Organism, Location)>,
    weather: Weather,
}

impl ScenarioBuilder {
    pub fn new(depth: u32, width: u32) -> Self {
        let config = SimConfig {
            seed: Some(TEST_SEED),
            creation: CreationProbabilities::NONE,
            infection: InfectionConfig::OFF,
            ..SimConfig::with_dimensions(depth as i64, width as i64)
        };
        Self {
            config,
            placements: Vec::new(),
            weather: Weather::pinned(Condition::Sunny),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Hour of the day at step 0. The first tick runs at `hour + 1`.
    pub fn day_start(mut self, hour: u32) -> Self {
        self.config.day_start = hour;
        self
    }

    pub fn weather(mut self, condition: Condition) -> Self {
        self.weather = Weather::pinned(condition);
        self
    }

    pub fn plant_growth(mut self, cap: u32) -> Self {
        self.config.plant_growth_per_tick = cap;
        self
    }

    /// Arbitrary config edits.
    pub fn configure(mut self, edit: impl FnOnce(&mut SimConfig)) -> Self {
        edit(&mut self.config);
        self
    }

    /// Place `organism` at its own location. Placement order is act order.
    pub fn with(mut self, organism: Organism) -> Self {
        let at = organism
            .location()
            .expect("scenario organisms need a location");
        self.placements.push((organism, at));
        self
    }

    pub fn build(self) -> Simulator {
        let mut sim = Simulator::empty(self.config).expect("scenario config is valid");
        sim.set_weather(self.weather);
        for (organism, at) in self.placements {
            sim.insert(organism, at).expect("scenario location is on the grid");
        }
        sim
    }
}

/// One observed frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub step: TickId,
    pub digest: u64,
    pub living: usize,
    pub viable: bool,
}

/// [`FieldView`] that records every frame it is shown.
#[derive(Default)]
pub struct RecordingView {
    pub frames: Vec<Frame>,
}

impl FieldView for RecordingView {
    fn show_status(&mut self, step: TickId, snapshot: &Snapshot<'_>) {
        self.frames.push(Frame {
            step,
            digest: snapshot.digest(),
            living: snapshot.living_count(),
            viable: snapshot.is_viable(),
        });
    }
}

/// [`StatsSink`] that records every report.
#[derive(Default)]
pub struct RecordingStats {
    pub reports: Vec<(TickId, IndexMap<Species, usize>)>,
}

impl RecordingStats {
    /// Count of `species` in the latest report.
    pub fn last(&self, species: Species) -> usize {
        self.reports
            .last()
            .and_then(|(_, stats)| stats.get(&species).copied())
            .unwrap_or(0)
    }
}

impl StatsSink for RecordingStats {
    fn report(&mut self, step: TickId, stats: &IndexMap<Species, usize>) {
        self.reports.push((step, stats.clone()));
    }
}
