//! Core types for the Reef ecological simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Reef workspace:
//! identifiers, grid locations, the species descriptor table, organism
//! state with its capability queries, and the weather state machine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod location;
pub mod organism;
pub mod species;
pub mod weather;

pub use id::{OrganismId, TickId};
pub use location::Location;
pub use organism::{AnimalState, Organism, PlantState, Vitals, MAX_GROWTH};
pub use species::{
    DietStrategy, DiurnalGate, DiurnalWindow, Gender, Kind, Species, SpeciesDescriptor,
    SpeciesTable, HOURS_PER_DAY,
};
pub use weather::{Condition, Weather, WEATHER_CHANGE_PROBABILITY};
