//! Reef: a predator-prey ecosystem simulated on a discrete grid.
//!
//! This is the facade crate. It re-exports the public API of every reef
//! sub-crate, so depending on `reef` alone is enough for most uses.
//!
//! # Quick start
//!
//! ```rust
//! use reef::prelude::*;
//!
//! let mut config = SimConfig::with_dimensions(20, 30);
//! config.seed = Some(7);
//! let mut sim = Simulator::new(config).unwrap();
//!
//! let summary = sim.simulate(10, &mut NullObserver, &mut NullObserver);
//! assert!(summary.steps_run <= 10);
//! assert_eq!(sim.current_tick(), TickId(summary.steps_run));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `reef-core` | Ids, locations, species table, organisms, weather |
//! | [`space`] | `reef-space` | Grid bounds, indexing and Moore neighbourhoods |
//! | [`arena`] | `reef-arena` | Population arena, double-buffered field, snapshots |
//! | [`behavior`] | `reef-behavior` | Per-diet behaviour executors and the act context |
//! | [`engine`] | `reef-engine` | Simulator, configuration, observers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`reef-core`).
///
/// Species descriptors live in [`types::SpeciesTable`]; organisms carry
/// either [`types::AnimalState`] or [`types::PlantState`] vitals.
pub use reef_core as types;

/// Grid topology (`reef-space`).
pub use reef_space as space;

/// Organism storage and the double-buffered field (`reef-arena`).
///
/// [`arena::Snapshot`] is the read-only view handed to observers.
pub use reef_arena as arena;

/// Diet strategies (`reef-behavior`).
///
/// Implement [`behavior::Behavior`] to experiment with new strategies.
pub use reef_behavior as behavior;

/// Simulation orchestration (`reef-engine`).
///
/// [`engine::Simulator`] drives ticks; [`engine::SimConfig`] configures it.
pub use reef_engine as engine;

/// Common imports for typical reef usage.
///
/// ```rust
/// use reef::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use reef_core::{
        Condition, Gender, Location, Organism, OrganismId, Species, SpeciesTable, TickId, Weather,
    };

    // Space
    pub use reef_space::{Grid, SpaceError};

    // Arena
    pub use reef_arena::Snapshot;

    // Engine
    pub use reef_engine::{
        ConfigError, FieldView, Halt, NullObserver, RunSummary, SimConfig, Simulator, StatsSink,
        StepMetrics, TracingStats, TracingView,
    };
}
