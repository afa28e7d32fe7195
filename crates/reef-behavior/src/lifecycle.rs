//! The template every animal executor shares: construction, ageing,
//! hunger, breeding, birth placement, food and mate search, and the two
//! ways a tick can end (placed, or dead).

use rand::Rng;
use reef_arena::FreeCells;
use reef_core::{
    DietStrategy, Gender, Kind, Location, Organism, OrganismId, Species, SpeciesDescriptor,
};
use tracing::trace;

use crate::context::{ActContext, Scene};
use crate::tally::Death;

fn initial_food<R: Rng + ?Sized>(descriptor: &SpeciesDescriptor, rng: &mut R) -> i32 {
    match descriptor.diet {
        DietStrategy::Piscivore { food_value, .. } if food_value > 0 => {
            rng.gen_range(0..food_value)
        }
        _ => 0,
    }
}

/// An organism for the initial population.
///
/// Animals get a uniform age in `[0, max_age)` and a random gender;
/// hunters start with a random food level below one meal.
pub fn seeded<R: Rng + ?Sized>(
    species: Species,
    location: Location,
    descriptor: &SpeciesDescriptor,
    rng: &mut R,
) -> Organism {
    match species.kind() {
        Kind::Plant => Organism::plant(species, location),
        Kind::Animal => {
            let age = if descriptor.max_age > 0 {
                rng.gen_range(0..descriptor.max_age)
            } else {
                0
            };
            let gender = Gender::sample(rng);
            let food = initial_food(descriptor, rng);
            Organism::animal(species, location, gender, age, food)
        }
    }
}

/// A newborn: age 0, random gender, and for hunters a random food level.
pub fn newborn<R: Rng + ?Sized>(
    species: Species,
    location: Location,
    descriptor: &SpeciesDescriptor,
    rng: &mut R,
) -> Organism {
    let gender = Gender::sample(rng);
    let food = initial_food(descriptor, rng);
    Organism::animal(species, location, gender, 0, food)
}

/// Age the animal by one tick and, for hunters, burn one unit of food.
///
/// Returns the cause if this killed it. The caller records the death.
pub(crate) fn age_and_hunger(
    organism: &mut Organism,
    descriptor: &SpeciesDescriptor,
) -> Option<Death> {
    let starves = descriptor.diet.starves();
    let animal = organism.as_animal_mut()?;
    animal.age += 1;
    let cause = if animal.age > descriptor.max_age {
        Some(Death::AgedOut)
    } else if starves {
        animal.food_level -= 1;
        (animal.food_level <= 0).then_some(Death::Starved)
    } else {
        None
    };
    if cause.is_some() {
        organism.set_dead();
    }
    cause
}

/// Mark `id` dead and count it.
pub(crate) fn die(id: OrganismId, cause: Death, scene: &mut Scene<'_>, ctx: &mut ActContext<'_>) {
    if let Some(organism) = scene.population.get_mut(id) {
        trace!(organism = %id, species = %organism.species(), %cause, "died");
        organism.set_dead();
    }
    ctx.tally().record(cause);
}

/// Place `id` at `location` in the next buffer.
///
/// Free cells exclude anything a living organism holds or may still
/// return to, so the occupant here is normally absent or dead prey. A
/// living occupant is evicted anyway: it is marked dead and counted.
pub(crate) fn settle(
    id: OrganismId,
    location: Location,
    scene: &mut Scene<'_>,
    ctx: &mut ActContext<'_>,
) {
    if let Some(organism) = scene.population.get_mut(id) {
        organism.set_location(location);
    }
    let Some(evicted) = scene.next.place(id, location) else {
        return;
    };
    if let Some(occupant) = scene.population.get_mut(evicted).filter(|o| o.is_alive()) {
        trace!(organism = %evicted, species = %occupant.species(), at = %location, "evicted");
        occupant.set_dead();
        ctx.tally().evicted += 1;
    }
}

/// Draw a litter size: zero unless the breeding probability draw
/// succeeds, then uniform in `[1, max_litter_size]`.
pub(crate) fn litter_size<R: Rng + ?Sized>(descriptor: &SpeciesDescriptor, rng: &mut R) -> u32 {
    if rng.gen::<f64>() <= descriptor.breeding_probability {
        rng.gen_range(1..=descriptor.max_litter_size.max(1))
    } else {
        0
    }
}

/// Whether a breeding partner for `id` has already settled next to it in
/// the next buffer.
pub(crate) fn has_mate(id: OrganismId, scene: &Scene<'_>, ctx: &mut ActContext<'_>) -> bool {
    let Some(organism) = scene.population.get(id) else {
        return false;
    };
    let (Some(here), Some(animal)) = (organism.location(), organism.as_animal()) else {
        return false;
    };
    let species = organism.species();
    let gender = animal.gender;
    let descriptor = ctx.descriptor(species);
    scene
        .next
        .adjacent_locations(&here, ctx.rng())
        .iter()
        .filter_map(|loc| scene.next.organism_at(loc))
        .filter_map(|other| scene.population.get(other))
        .any(|other| other.is_mate_for(species, gender, descriptor))
}

/// Try to breed and place the young into claimed free cells.
///
/// Mate-dependent diets need [`has_mate`] first. Returns the number of
/// young actually placed, which may be less than the litter when cells
/// run out.
pub(crate) fn breed(
    id: OrganismId,
    free: &mut FreeCells,
    scene: &mut Scene<'_>,
    ctx: &mut ActContext<'_>,
) -> u32 {
    let Some(organism) = scene.population.get(id).filter(|o| o.is_alive()) else {
        return 0;
    };
    let species = organism.species();
    let descriptor = ctx.descriptor(species);
    let old_enough = organism
        .as_animal()
        .is_some_and(|a| descriptor.is_breeding_age(a.age));
    if !old_enough {
        return 0;
    }
    if descriptor.diet.requires_mate() && !has_mate(id, scene, ctx) {
        return 0;
    }

    let litter = litter_size(descriptor, ctx.rng());
    let mut born = 0;
    while born < litter {
        let Some(cell) = free.claim() else {
            break;
        };
        let young = newborn(species, cell, descriptor, ctx.rng());
        let young = scene.population.spawn(young);
        settle(young, cell, scene, ctx);
        born += 1;
    }
    ctx.tally().births += born;
    born
}

/// Find the first edible neighbour in the current buffer, in shuffled
/// order, and kill it.
///
/// Prey that has already swum to another cell this tick is out of reach.
/// Returns the meal's location and food value.
pub(crate) fn forage(
    id: OrganismId,
    scene: &mut Scene<'_>,
    ctx: &mut ActContext<'_>,
) -> Option<(Location, i32)> {
    let organism = scene.population.get(id)?;
    let here = organism.location()?;
    let diet = ctx.descriptor(organism.species()).diet;
    let table = ctx.table();

    let adjacent = scene.current.adjacent_locations(&here, ctx.rng());
    for loc in adjacent {
        let Some(prey) = scene.current.organism_at(&loc) else {
            continue;
        };
        if !scene.current.is_held(&loc, scene.population) {
            continue;
        }
        let Some(food) = scene
            .population
            .get(prey)
            .and_then(|p| p.food_value_for(&diet, table))
        else {
            continue;
        };
        if let Some(meal) = scene.population.get_mut(prey) {
            trace!(organism = %prey, species = %meal.species(), by = %id, "eaten");
            meal.set_dead();
        }
        ctx.tally().record(Death::Eaten);
        return Some((loc, food));
    }
    None
}

/// Set the animal's food level after a meal.
pub(crate) fn feed(id: OrganismId, food: i32, scene: &mut Scene<'_>) {
    if let Some(animal) = scene.population.get_mut(id).and_then(Organism::as_animal_mut) {
        animal.food_level = food;
    }
}
