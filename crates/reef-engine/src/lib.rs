//! Tick orchestration for reef simulations.
//!
//! [`Simulator`] owns the double-buffered field, the clock, the weather
//! and the seeded random source, and advances them one tick at a time:
//!
//! 1. advance the clock and re-draw the weather
//! 2. [`spread_infection`] over the published buffer
//! 3. every living organism acts through its diet's
//!    [`Behavior`](reef_behavior::Behavior)
//! 4. [`grow_plants`] into the free cells of the next buffer
//! 5. publish the next buffer
//!
//! Configuration comes from [`SimConfig`], optionally loaded from TOML.
//! Rendering and statistics are delegated to [`FieldView`] and
//! [`StatsSink`] implementations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod growth;
pub mod infection;
pub mod metrics;
pub mod observer;
pub mod populate;
pub mod simulator;

pub use config::{
    ConfigError, CreationProbabilities, InfectionConfig, SimConfig, DAY_START, DEFAULT_DEPTH,
    DEFAULT_WIDTH, HOURS_PER_STEP, LONG_RUN_STEPS, PLANT_GROWTH_PER_TICK,
};
pub use growth::grow_plants;
pub use infection::spread_infection;
pub use metrics::StepMetrics;
pub use observer::{FieldView, NullObserver, StatsSink, TracingStats, TracingView};
pub use populate::populate;
pub use simulator::{Halt, RunSummary, Simulator};
