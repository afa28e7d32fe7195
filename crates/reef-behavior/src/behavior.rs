//! The capability trait every executor implements, and dispatch by diet.

use reef_core::{DietStrategy, OrganismId};

use crate::context::{ActContext, Scene};
use crate::herbivore::Herbivore;
use crate::pelagic::Pelagic;
use crate::photosynthetic::Photosynthetic;
use crate::piscivore::Piscivore;

/// One tick of behaviour for a single organism.
///
/// # Contract
///
/// - Reads neighbours from `scene.current`; writes only to `scene.next`
///   and to organisms in `scene.population`.
/// - Places the acting organism into `scene.next` at most once. An
///   organism that is not placed does not survive the tick.
/// - Every random decision draws from `ctx.rng()`.
///
/// Executors are stateless; all per-species variation comes from the
/// [`SpeciesDescriptor`](reef_core::SpeciesDescriptor) looked up through
/// the context.
pub trait Behavior: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Run the organism `id` for one tick.
    ///
    /// Called only for organisms that are alive when their turn comes.
    fn act(&self, id: OrganismId, scene: &mut Scene<'_>, ctx: &mut ActContext<'_>);
}

/// The executor for `diet`.
pub fn behavior_for(diet: &DietStrategy) -> &'static dyn Behavior {
    match diet {
        DietStrategy::Piscivore { .. } => &Piscivore,
        DietStrategy::Herbivore => &Herbivore,
        DietStrategy::PelagicNonPredator => &Pelagic,
        DietStrategy::Photosynthetic { .. } => &Photosynthetic,
    }
}

/// Run `id` through the executor its species descriptor selects.
///
/// Dead or unknown ids are skipped.
pub fn act(id: OrganismId, scene: &mut Scene<'_>, ctx: &mut ActContext<'_>) {
    let Some(organism) = scene.population.get(id).filter(|o| o.is_alive()) else {
        return;
    };
    let diet = ctx.descriptor(organism.species()).diet;
    behavior_for(&diet).act(id, scene, ctx);
}
