//! Plants: grow in place.

use reef_core::OrganismId;

use crate::behavior::Behavior;
use crate::context::{ActContext, Scene};
use crate::lifecycle;

/// Executor for [`DietStrategy::Photosynthetic`](reef_core::DietStrategy::Photosynthetic).
///
/// A plant grows by one (up to the cap) and re-places itself at its own
/// cell. New plants come from global growth, never from individuals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Photosynthetic;

impl Behavior for Photosynthetic {
    fn name(&self) -> &str {
        "photosynthetic"
    }

    fn act(&self, id: OrganismId, scene: &mut Scene<'_>, ctx: &mut ActContext<'_>) {
        let Some(plant) = scene.population.get_mut(id) else {
            return;
        };
        plant.grow();
        if let Some(here) = plant.location() {
            lifecycle::settle(id, here, scene, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Harness;
    use reef_core::{Location, Organism, Species, MAX_GROWTH};

    #[test]
    fn plant_grows_and_persists() {
        let mut h = Harness::new(2, 2);
        let at = Location::new(1, 0);
        let algae = h.put(Organism::plant(Species::Algae, at));
        for _ in 0..(MAX_GROWTH + 3) {
            h.act(algae);
        }
        assert_eq!(h.organism(algae).as_plant().unwrap().growth, MAX_GROWTH);
        assert_eq!(h.arena.next().organism_at(&at), Some(algae));
        assert_eq!(h.arena.next().organisms().count(), 1);
    }
}
