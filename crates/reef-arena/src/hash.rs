//! FNV-1a digest of field state.
//!
//! Not cryptographically secure. Used to compare runs for determinism.

use reef_core::{Gender, Vitals};

use crate::field::Field;
use crate::population::Population;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Marker folded in for an empty cell.
const EMPTY: u8 = 0xFF;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash every cell of `field` in row-major order.
///
/// Each cell contributes either an empty marker or the living occupant's
/// species, gender, age, food level, infection flag (animals) or growth
/// (plants). Dimensions are folded in first so that equally populated
/// fields of different shapes differ.
pub fn field_digest(field: &Field, population: &Population) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, field.depth());
    hash = fnv1a_u32(hash, field.width());

    for loc in field.grid().canonical_ordering() {
        let occupant = field
            .organism_at(&loc)
            .and_then(|id| population.get(id))
            .filter(|o| o.is_alive());
        let Some(organism) = occupant else {
            hash = fnv1a_byte(hash, EMPTY);
            continue;
        };
        hash = fnv1a_byte(hash, organism.species().index() as u8);
        match organism.vitals() {
            Vitals::Animal(a) => {
                hash = fnv1a_byte(hash, matches!(a.gender, Gender::Female) as u8);
                hash = fnv1a_u32(hash, a.age);
                hash = fnv1a_u32(hash, a.food_level as u32);
                hash = fnv1a_byte(hash, a.infected as u8);
            }
            Vitals::Plant(p) => {
                hash = fnv1a_u32(hash, p.growth);
            }
        }
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use reef_core::{Location, Organism, Species};
    use reef_space::Grid;

    #[test]
    fn empty_fields_differ_by_shape() {
        let pop = Population::new();
        let a = Field::new(Grid::new(2, 3).unwrap());
        let b = Field::new(Grid::new(3, 2).unwrap());
        assert_ne!(field_digest(&a, &pop), field_digest(&b, &pop));
    }

    #[test]
    fn digest_sees_occupant_state() {
        let mut pop = Population::new();
        let mut field = Field::new(Grid::new(2, 2).unwrap());
        let at = Location::new(1, 0);
        let id = pop.spawn(Organism::animal(Species::Tuna, at, Gender::Male, 4, 0));
        field.place(id, at);
        let before = field_digest(&field, &pop);

        pop.get_mut(id).unwrap().infect();
        let infected = field_digest(&field, &pop);
        assert_ne!(before, infected);

        pop.get_mut(id).unwrap().set_dead();
        let empty = field_digest(&Field::new(Grid::new(2, 2).unwrap()), &pop);
        assert_eq!(field_digest(&field, &pop), empty);
    }
}
