//! Disease reservoir and contact spread.
//!
//! Infection is tracked on animals and spread each tick, with no effect on
//! behaviour, breeding or mortality.

use rand::Rng;
use reef_arena::{Field, Population};
use reef_behavior::Tally;
use reef_core::OrganismId;
use tracing::trace;

use crate::config::InfectionConfig;

/// Run one infection pass over the published buffer.
///
/// First every living animal, in placement order, independently catches
/// the disease with the spontaneous probability. Then every animal that
/// is infected at that point exposes each healthy animal neighbour, in
/// shuffled order, with the spread probability. Animals infected during
/// the spread phase do not spread further this tick.
pub fn spread_infection<R: Rng + ?Sized>(
    field: &Field,
    population: &mut Population,
    config: &InfectionConfig,
    rng: &mut R,
    tally: &mut Tally,
) {
    let animals: Vec<OrganismId> = field
        .living(population)
        .filter(|(_, o)| o.as_animal().is_some())
        .map(|(id, _)| id)
        .collect();

    if config.spontaneous_probability > 0.0 {
        for &id in &animals {
            let Some(animal) = population.get_mut(id).filter(|o| o.is_susceptible()) else {
                continue;
            };
            if rng.gen::<f64>() < config.spontaneous_probability && animal.infect() {
                trace!(organism = %id, species = %animal.species(), "infected");
                tally.new_infections += 1;
            }
        }
    }

    if config.spread_probability <= 0.0 {
        return;
    }
    let carriers: Vec<(OrganismId, _)> = animals
        .iter()
        .filter_map(|&id| {
            let carrier = population.get(id).filter(|o| o.is_infected())?;
            Some((id, carrier.location()?))
        })
        .collect();
    for (carrier, here) in carriers {
        for loc in field.adjacent_locations(&here, rng) {
            let Some(neighbour) = field.organism_at(&loc) else {
                continue;
            };
            let Some(animal) = population
                .get_mut(neighbour)
                .filter(|o| o.is_susceptible())
            else {
                continue;
            };
            if rng.gen::<f64>() < config.spread_probability && animal.infect() {
                trace!(organism = %neighbour, from = %carrier, "infection spread");
                tally.new_infections += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use reef_core::{Gender, Location, Organism, Species};
    use reef_space::Grid;

    fn line(n: i32) -> (Field, Population, Vec<OrganismId>) {
        let mut field = Field::new(Grid::new(1, n as u32 + 1).unwrap());
        let mut pop = Population::new();
        let mut ids = Vec::new();
        for c in 0..n {
            let at = Location::new(0, c);
            let id = pop.spawn(Organism::animal(Species::Tuna, at, Gender::Male, 1, 0));
            field.place(id, at);
            ids.push(id);
        }
        let plant_at = Location::new(0, n);
        let plant = pop.spawn(Organism::plant(Species::Algae, plant_at));
        field.place(plant, plant_at);
        (field, pop, ids)
    }

    #[test]
    fn certain_reservoir_infects_every_animal() {
        let (field, mut pop, ids) = line(4);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut tally = Tally::default();
        let config = InfectionConfig {
            spontaneous_probability: 1.0,
            spread_probability: 0.0,
        };
        spread_infection(&field, &mut pop, &config, &mut rng, &mut tally);
        assert!(ids.iter().all(|&id| pop.get(id).unwrap().is_infected()));
        assert_eq!(tally.new_infections, 4);
    }

    #[test]
    fn spread_does_not_chain_within_a_tick() {
        let (field, mut pop, ids) = line(4);
        pop.get_mut(ids[0]).unwrap().infect();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut tally = Tally::default();
        let config = InfectionConfig {
            spontaneous_probability: 0.0,
            spread_probability: 1.0,
        };
        spread_infection(&field, &mut pop, &config, &mut rng, &mut tally);
        assert!(pop.get(ids[1]).unwrap().is_infected());
        assert!(!pop.get(ids[2]).unwrap().is_infected());
        assert_eq!(tally.new_infections, 1);

        spread_infection(&field, &mut pop, &config, &mut rng, &mut tally);
        assert!(pop.get(ids[2]).unwrap().is_infected());
        assert!(!pop.get(ids[3]).unwrap().is_infected());
    }

    #[test]
    fn disabled_infection_changes_nothing() {
        let (field, mut pop, ids) = line(3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut tally = Tally::default();
        spread_infection(&field, &mut pop, &InfectionConfig::OFF, &mut rng, &mut tally);
        assert!(ids.iter().all(|&id| !pop.get(id).unwrap().is_infected()));
        assert_eq!(tally.new_infections, 0);
    }
}
