//! Per-species behaviour for reef simulations.
//!
//! Every organism's tick is driven by one of four executors selected by
//! the [`DietStrategy`](reef_core::DietStrategy) in its species
//! descriptor:
//!
//! | Executor | Diet | Feeds on | Breeding |
//! |---|---|---|---|
//! | [`Piscivore`] | hunter | prey species (current buffer) | adjacent mate |
//! | [`Herbivore`] | grazer | any live plant | no mate |
//! | [`Pelagic`] | none | nothing | adjacent mate |
//! | [`Photosynthetic`] | plant | – | global growth only |
//!
//! Executors read the current buffer and write the next one through a
//! [`Scene`], and receive everything else (time of day, weather, the RNG,
//! the species table, the event [`Tally`]) through an explicit
//! [`ActContext`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod context;
pub mod herbivore;
pub mod lifecycle;
pub mod pelagic;
pub mod photosynthetic;
pub mod piscivore;
pub mod tally;

#[cfg(test)]
pub(crate) mod testing;

pub use behavior::{act, behavior_for, Behavior};
pub use context::{ActContext, Scene};
pub use herbivore::Herbivore;
pub use lifecycle::{newborn, seeded};
pub use pelagic::Pelagic;
pub use photosynthetic::Photosynthetic;
pub use piscivore::Piscivore;
pub use tally::{Death, Tally};
