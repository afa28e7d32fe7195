//! The tick orchestrator.
//!
//! Each [`Simulator::step`] runs one complete tick:
//!
//! ```text
//! tick-start ─► infect-and-spread ─► act-all ─► grow-plants ─► swap-buffers
//! ```
//!
//! The current buffer is read-only for the whole tick and the next buffer
//! is only written. Nothing in between is observable from outside:
//! callers only ever see published snapshots.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reef_arena::{PingPongField, Population, Snapshot};
use reef_behavior::{act, ActContext, Scene};
use reef_core::{Location, Organism, OrganismId, SpeciesTable, TickId, Weather, HOURS_PER_DAY};
use reef_space::{Grid, SpaceError};
use tracing::{debug, debug_span, info, trace};

use crate::config::{ConfigError, SimConfig, HOURS_PER_STEP, LONG_RUN_STEPS};
use crate::growth::grow_plants;
use crate::infection::spread_infection;
use crate::metrics::StepMetrics;
use crate::observer::{FieldView, StatsSink};
use crate::populate::populate;

// ── RunSummary ─────────────────────────────────────────────────────

/// Why [`Simulator::simulate`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// The requested number of steps ran.
    StepLimit,
    /// A required species died out.
    NotViable,
    /// The cancel flag was raised.
    Cancelled,
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Halt::StepLimit => "step limit reached",
            Halt::NotViable => "a required species is extinct",
            Halt::Cancelled => "cancelled",
        })
    }
}

/// Outcome of a [`Simulator::simulate`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed by this run.
    pub steps_run: u64,
    /// Why the run ended.
    pub halt: Halt,
}

// ── Simulator ──────────────────────────────────────────────────────

/// Owns the field, the clock, the weather and the random source.
///
/// All randomness flows from one [`ChaCha8Rng`] seeded from the config, so
/// two simulators built from the same config and seed produce identical
/// sequences of snapshots.
pub struct Simulator {
    config: SimConfig,
    grid: Grid,
    seed: u64,
    rng: ChaCha8Rng,
    population: Population,
    field: PingPongField,
    tick: TickId,
    time_of_day: u32,
    weather: Weather,
    last_metrics: StepMetrics,
    cancel: Arc<AtomicBool>,
}

impl Simulator {
    /// Build a simulator and seed its initial population.
    ///
    /// Unusable dimensions are replaced by the defaults; any other invalid
    /// setting is an error.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let mut sim = Self::empty(config)?;
        sim.populate();
        Ok(sim)
    }

    /// Build a simulator with no organisms, for hand-built scenarios.
    pub fn empty(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            seed,
            depth = grid.depth(),
            width = grid.width(),
            "simulator created"
        );
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            weather: Weather::new(config.weather_change_probability),
            time_of_day: config.day_start % HOURS_PER_DAY,
            field: PingPongField::new(grid),
            population: Population::new(),
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
            cancel: Arc::new(AtomicBool::new(false)),
            config,
            grid,
            seed,
        })
    }

    fn populate(&mut self) {
        let created = populate(
            self.field.current_mut(),
            &mut self.population,
            &self.config.creation,
            &self.config.species,
            &mut self.rng,
        );
        debug!(created, "population seeded");
    }

    /// Put `organism` at `location` in the published field.
    ///
    /// A prior occupant of that cell is evicted. Intended for setting up
    /// scenarios before the first tick.
    pub fn insert(
        &mut self,
        mut organism: Organism,
        location: Location,
    ) -> Result<OrganismId, SpaceError> {
        self.grid.check(&location)?;
        organism.set_location(location);
        let id = self.population.spawn(organism);
        if let Some(evicted) = self.field.current_mut().place(id, location) {
            if let Some(prior) = self.population.get_mut(evicted) {
                prior.set_dead();
            }
        }
        Ok(id)
    }

    /// Return to step 0 with a freshly seeded population.
    ///
    /// The RNG restarts from the configured seed and the weather from its
    /// initial condition, so a reset simulator replays its first run.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.weather = Weather::new(self.config.weather_change_probability);
        self.tick = TickId::default();
        self.time_of_day = self.config.day_start % HOURS_PER_DAY;
        self.last_metrics = StepMetrics::default();
        self.field.clear();
        self.population.clear();
        self.populate();
        info!(seed = self.seed, "simulator reset");
    }

    /// Run one tick.
    pub fn step(&mut self) -> &StepMetrics {
        let started = Instant::now();
        let mut metrics = StepMetrics::default();

        self.tick = self.tick.next();
        let _span = debug_span!("tick", step = self.tick.0).entered();
        self.time_of_day = (self.time_of_day + HOURS_PER_STEP) % HOURS_PER_DAY;
        let before = self.weather.condition();
        if self.weather.update(&mut self.rng) {
            trace!(from = %before, to = %self.weather.condition(), "weather changed");
        }

        let phase = Instant::now();
        spread_infection(
            self.field.current(),
            &mut self.population,
            &self.config.infection,
            &mut self.rng,
            &mut metrics.tally,
        );
        metrics.infection_us = elapsed_us(phase);

        let phase = Instant::now();
        {
            let (current, next) = self.field.split_mut();
            let mut scene = Scene {
                current,
                next,
                population: &mut self.population,
            };
            let mut ctx = ActContext::new(
                self.time_of_day,
                self.weather.condition(),
                &mut self.rng,
                &self.config.species,
                &mut metrics.tally,
            );
            for id in current.organisms() {
                act(id, &mut scene, &mut ctx);
            }
        }
        metrics.act_us = elapsed_us(phase);

        let phase = Instant::now();
        let (_, next) = self.field.split_mut();
        grow_plants(
            next,
            &mut self.population,
            self.config.plant_growth_per_tick,
            &mut self.rng,
            &mut metrics.tally,
        );
        metrics.growth_us = elapsed_us(phase);

        let phase = Instant::now();
        self.field.publish(&mut self.population);
        metrics.publish_us = elapsed_us(phase);

        metrics.living = self.field.current().living_count(&self.population);
        metrics.total_us = elapsed_us(started);
        let t = &metrics.tally;
        debug!(
            hour = self.time_of_day,
            weather = %self.weather.condition(),
            births = t.births,
            eaten = t.eaten,
            starved = t.starved,
            aged_out = t.aged_out,
            overcrowded = t.overcrowded,
            evicted = t.evicted,
            infections = t.new_infections,
            plants = t.plants_grown,
            living = metrics.living,
            "tick complete"
        );
        self.last_metrics = metrics;
        &self.last_metrics
    }

    /// Run up to `steps` ticks, stopping early if the field stops being
    /// viable or the cancel flag is raised.
    ///
    /// `view` and `stats` see the state before the first tick and after
    /// every tick. Cancellation is checked between ticks only.
    pub fn simulate(
        &mut self,
        steps: u64,
        view: &mut dyn FieldView,
        stats: &mut dyn StatsSink,
    ) -> RunSummary {
        info!(steps, seed = self.seed, start = self.tick.0, "run started");
        self.report(view, stats);

        let mut steps_run = 0;
        let halt = loop {
            if steps_run == steps {
                break Halt::StepLimit;
            }
            if self.cancel.load(Ordering::Relaxed) {
                break Halt::Cancelled;
            }
            if !self.is_viable() {
                break Halt::NotViable;
            }
            self.step();
            steps_run += 1;
            self.report(view, stats);
        };

        info!(steps_run, step = self.tick.0, %halt, "run stopped");
        RunSummary { steps_run, halt }
    }

    /// [`simulate`](Self::simulate) for the standard long run.
    pub fn run_long(&mut self, view: &mut dyn FieldView, stats: &mut dyn StatsSink) -> RunSummary {
        self.simulate(LONG_RUN_STEPS, view, stats)
    }

    fn report(&self, view: &mut dyn FieldView, stats: &mut dyn StatsSink) {
        let snapshot = self.snapshot();
        stats.report(self.tick, &snapshot.stats());
        view.show_status(self.tick, &snapshot);
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Read-only view of the published field.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.field.snapshot(&self.population)
    }

    /// Whether every required species is still alive.
    pub fn is_viable(&self) -> bool {
        self.field.current().is_viable(&self.population)
    }

    /// Ticks completed since construction or the last reset.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Hour of the day in `0..24`.
    pub fn time_of_day(&self) -> u32 {
        self.time_of_day
    }

    /// Current weather.
    pub fn weather(&self) -> &Weather {
        &self.weather
    }

    /// Replace the weather, e.g. with [`Weather::pinned`].
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
    }

    /// The seed in use.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The grid being simulated.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this simulator was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Species parameters.
    pub fn table(&self) -> &SpeciesTable {
        &self.config.species
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Flag that stops [`simulate`](Self::simulate) before its next tick.
    ///
    /// The flag stays raised until lowered by its holder.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }
}

fn elapsed_us(since: Instant) -> u64 {
    since.elapsed().as_micros() as u64
}
