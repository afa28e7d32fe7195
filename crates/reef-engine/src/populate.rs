//! Initial population seeding.

use rand::Rng;
use reef_arena::{Field, Population};
use reef_behavior::seeded;
use reef_core::SpeciesTable;

use crate::config::CreationProbabilities;

/// Fill `field` cell by cell in row-major order.
///
/// Each cell draws once per species in cascade order and takes the first
/// species whose draw is at or below its probability; a cell where no
/// draw succeeds stays empty. Species with probability zero are skipped
/// without drawing. Returns the number of organisms created.
pub fn populate<R: Rng + ?Sized>(
    field: &mut Field,
    population: &mut Population,
    creation: &CreationProbabilities,
    table: &SpeciesTable,
    rng: &mut R,
) -> usize {
    let cascade = creation.cascade();
    let cells: Vec<_> = field.grid().canonical_ordering().collect();
    let mut created = 0;
    for location in cells {
        let hit = cascade
            .iter()
            .find(|&&(_, p)| p > 0.0 && rng.gen::<f64>() <= p);
        if let Some(&(species, _)) = hit {
            let organism = seeded(species, location, table.get(species), rng);
            let id = population.spawn(organism);
            field.place(id, location);
            created += 1;
        }
    }
    created
}
