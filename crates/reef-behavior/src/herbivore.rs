//! Grazers: eat an adjacent plant, or breed and wander.

use reef_core::OrganismId;

use crate::behavior::Behavior;
use crate::context::{ActContext, Scene};
use crate::lifecycle;
use crate::tally::Death;

/// Executor for [`DietStrategy::Herbivore`](reef_core::DietStrategy::Herbivore).
///
/// A grazer that finds a live plant eats it and moves onto its cell, and
/// does not breed that tick. Otherwise it needs at least one free cell
/// around it to survive; it breeds if the breeding window is open, then
/// moves to a remaining free cell if the movement window is open, and
/// stays where it is in every other case.
#[derive(Clone, Copy, Debug, Default)]
pub struct Herbivore;

impl Behavior for Herbivore {
    fn name(&self) -> &str {
        "herbivore"
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

        let mut free = scene.free_adjacent_locations(&here, ctx.rng());

        if let Some((meal, food)) = lifecycle::forage(id, scene, ctx) {
            lifecycle::feed(id, food, scene);
            lifecycle::settle(id, meal, scene, ctx);
            return;
        }

        if free.is_empty() {
            lifecycle::die(id, Death::Overcrowded, scene, ctx);
            return;
        }
        if descriptor.gate.allows_breeding(hour) {
            lifecycle::breed(id, &mut free, scene, ctx);
        }
        let destination = if descriptor.gate.allows_movement(hour) {
            free.claim()
        } else {
            None
        };
        lifecycle::settle(id, destination.unwrap_or(here), scene, ctx);
    }
}
