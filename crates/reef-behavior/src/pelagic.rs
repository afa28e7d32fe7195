//! Open-water schooling fish that neither hunt nor graze.

use reef_core::OrganismId;

use crate::behavior::Behavior;
use crate::context::{ActContext, Scene};
use crate::lifecycle;
use crate::tally::Death;

/// Executor for [`DietStrategy::PelagicNonPredator`](reef_core::DietStrategy::PelagicNonPredator).
///
/// Outside its active window the animal holds its cell. Inside it, it
/// needs a free neighbour: births are placed first, then the animal moves
/// into a remaining free cell. Running out of cells at either point is
/// death by overcrowding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pelagic;

impl Behavior for Pelagic {
    fn name(&self) -> &str {
        "pelagic"
    }

    fn act(&self, id: OrganismId, scene: &mut Scene<'_>, ctx: &mut ActContext<'_>) {
        let Some(organism) = scene.population.get_mut(id) else {
            return;
        };
        let descriptor = ctx.descriptor(organism.species());
        if let Some(cause) = lifecycle::age_and_hunger(organism, descriptor) {
            lifecycle::die(id, cause, scene, ctx);
            return;
        }
        let Some(here) = organism.location() else {
            return;
        };
        let hour = ctx.time_of_day();
        let moving = descriptor.gate.allows_movement(hour);
        let breeding = descriptor.gate.allows_breeding(hour);
        if !moving && !breeding {
            lifecycle::settle(id, here, scene, ctx);
            return;
        }

        let mut free = scene.free_adjacent_locations(&here, ctx.rng());
        if free.is_empty() {
            lifecycle::die(id, Death::Overcrowded, scene, ctx);
            return;
        }
        if breeding {
            lifecycle::breed(id, &mut free, scene, ctx);
        }
        let destination = if moving { free.claim() } else { Some(here) };
        match destination {
            Some(loc) => lifecycle::settle(id, loc, scene, ctx),
            None => lifecycle::die(id, Death::Overcrowded, scene, ctx),
        }
    }
}
