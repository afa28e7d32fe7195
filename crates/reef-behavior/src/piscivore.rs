//! Hunters: breed with an adjacent mate, then hunt, then move.

use reef_core::OrganismId;

use crate::behavior::Behavior;
use crate::context::{ActContext, Scene};
use crate::lifecycle;
use crate::tally::Death;

/// Executor for [`DietStrategy::Piscivore`](reef_core::DietStrategy::Piscivore).
///
/// Order within a tick: age and hunger; births into free cells of the
/// next buffer; a hunt in the current buffer unless the weather forbids
/// it; otherwise a move to a remaining free cell; otherwise death by
/// overcrowding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Piscivore;

impl Behavior for Piscivore {
    fn name(&self) -> &str {
        "piscivore"
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

        let mut free = scene.free_adjacent_locations(&here, ctx.rng());
        if !free.is_empty() && descriptor.gate.allows_breeding(ctx.time_of_day()) {
            lifecycle::breed(id, &mut free, scene, ctx);
        }

        let meal = if ctx.weather().permits_hunting() {
            lifecycle::forage(id, scene, ctx)
        } else {
            None
        };
        let destination = match meal {
            Some((loc, food)) => {
                lifecycle::feed(id, food, scene);
                Some(loc)
            }
            None if descriptor.gate.allows_movement(ctx.time_of_day()) => free.claim(),
            None => Some(here),
        };

        match destination {
            Some(loc) => lifecycle::settle(id, loc, scene, ctx),
            None => lifecycle::die(id, Death::Overcrowded, scene, ctx),
        }
    }
}
