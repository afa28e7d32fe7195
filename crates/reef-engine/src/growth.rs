//! Field-wide plant growth.

use rand::seq::index;
use rand::Rng;
use reef_arena::{Field, Population};
use reef_behavior::Tally;
use reef_core::{Organism, Species};

/// Seed new plants into free cells of `next`.
///
/// Picks `min(cap, free cells)` distinct free cells with an RNG-driven
/// sample and fills them alternately with Algae and Seaweed, starting with
/// Algae. Returns the number of plants created.
pub fn grow_plants<R: Rng + ?Sized>(
    next: &mut Field,
    population: &mut Population,
    cap: u32,
    rng: &mut R,
    tally: &mut Tally,
) -> usize {
    let free = next.free_locations(population);
    let amount = free.len().min(cap as usize);
    if amount == 0 {
        return 0;
    }
    let kinds = [Species::Algae, Species::Seaweed];
    for (n, i) in index::sample(rng, free.len(), amount).into_iter().enumerate() {
        let location = free[i];
        let id = population.spawn(Organism::plant(kinds[n % 2], location));
        next.place(id, location);
    }
    tally.plants_grown += amount as u32;
    amount
}
