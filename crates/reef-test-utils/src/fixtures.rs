//! Organism fixtures.

use reef_core::{Gender, Location, Organism, Species};

/// An adult animal well past breeding age, with a comfortable food level.
pub fn adult(species: Species, gender: Gender, row: i32, col: i32) -> Organism {
    Organism::animal(species, Location::new(row, col), gender, 20, 10)
}

/// A young animal that cannot breed yet.
pub fn juvenile(species: Species, row: i32, col: i32) -> Organism {
    Organism::animal(species, Location::new(row, col), Gender::Male, 1, 10)
}

/// A hunter with an explicit food level.
pub fn hunter(species: Species, row: i32, col: i32, food_level: i32) -> Organism {
    Organism::animal(species, Location::new(row, col), Gender::Male, 1, food_level)
}

/// A freshly grown plant.
pub fn plant(species: Species, row: i32, col: i32) -> Organism {
    Organism::plant(species, Location::new(row, col))
}

/// One adult of each required animal species along the first row, from
/// column 0. Needs a field at least five columns wide.
pub fn viable_row() -> Vec<Organism> {
    Species::REQUIRED
        .iter()
        .enumerate()
        .map(|(c, &s)| adult(s, Gender::Female, 0, c as i32))
        .collect()
}
