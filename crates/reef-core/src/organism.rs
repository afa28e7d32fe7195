//! Organism state and capability queries.
//!
//! An [`Organism`] is plain data: its species, liveness, location and a
//! tagged [`Vitals`] payload. Behaviour lives in `reef-behavior`; the
//! queries here answer the questions other organisms ask about an
//! occupant ("can I eat you?", "are you a mate for me?") without
//! inspecting concrete species.

use crate::location::Location;
use crate::species::{DietStrategy, Gender, Kind, Species, SpeciesDescriptor, SpeciesTable};

/// Upper bound on a plant's growth counter.
pub const MAX_GROWTH: u32 = 10;

/// Mutable state carried by animals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimalState {
    /// Fixed at birth.
    pub gender: Gender,
    /// Ticks lived.
    pub age: u32,
    /// Remaining food; only meaningful for diets that starve.
    pub food_level: i32,
    /// Carries the disease. Tracked and spread, with no further effect.
    pub infected: bool,
}

/// Mutable state carried by plants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlantState {
    /// Growth counter in `1..=MAX_GROWTH`.
    pub growth: u32,
}

/// Capability-specific state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vitals {
    /// See [`AnimalState`].
    Animal(AnimalState),
    /// See [`PlantState`].
    Plant(PlantState),
}

/// A single living (or dead) entity on the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Organism {
    species: Species,
    alive: bool,
    location: Option<Location>,
    vitals: Vitals,
}

impl Organism {
    /// Create a living animal.
    pub fn animal(
        species: Species,
        location: Location,
        gender: Gender,
        age: u32,
        food_level: i32,
    ) -> Self {
        debug_assert_eq!(species.kind(), Kind::Animal, "{species} is not an animal");
        Self {
            species,
            alive: true,
            location: Some(location),
            vitals: Vitals::Animal(AnimalState {
                gender,
                age,
                food_level,
                infected: false,
            }),
        }
    }

    /// Create a living plant with growth 1.
    pub fn plant(species: Species, location: Location) -> Self {
        debug_assert_eq!(species.kind(), Kind::Plant, "{species} is not a plant");
        Self {
            species,
            alive: true,
            location: Some(location),
            vitals: Vitals::Plant(PlantState { growth: 1 }),
        }
    }

    /// The organism's species.
    pub fn species(&self) -> Species {
        self.species
    }

    /// Capability class.
    pub fn kind(&self) -> Kind {
        match self.vitals {
            Vitals::Animal(_) => Kind::Animal,
            Vitals::Plant(_) => Kind::Plant,
        }
    }

    /// Whether the organism is alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Current location; `None` once dead.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Move the organism. Has no effect on a dead organism.
    pub fn set_location(&mut self, location: Location) {
        if self.alive {
            self.location = Some(location);
        }
    }

    /// Mark the organism dead and clear its location.
    pub fn set_dead(&mut self) {
        self.alive = false;
        self.location = None;
    }

    /// Capability-specific state.
    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Animal state, if this is an animal.
    pub fn as_animal(&self) -> Option<&AnimalState> {
        match &self.vitals {
            Vitals::Animal(a) => Some(a),
            Vitals::Plant(_) => None,
        }
    }

    /// Mutable animal state, if this is an animal.
    pub fn as_animal_mut(&mut self) -> Option<&mut AnimalState> {
        match &mut self.vitals {
            Vitals::Animal(a) => Some(a),
            Vitals::Plant(_) => None,
        }
    }

    /// Plant state, if this is a plant.
    pub fn as_plant(&self) -> Option<&PlantState> {
        match &self.vitals {
            Vitals::Plant(p) => Some(p),
            Vitals::Animal(_) => None,
        }
    }

    /// Whether this is a living, infected animal.
    pub fn is_infected(&self) -> bool {
        self.alive && self.as_animal().is_some_and(|a| a.infected)
    }

    /// Whether this is a living animal that could still catch the disease.
    pub fn is_susceptible(&self) -> bool {
        self.alive && self.as_animal().is_some_and(|a| !a.infected)
    }

    /// Mark an animal infected. Returns `true` if the state changed.
    pub fn infect(&mut self) -> bool {
        match &mut self.vitals {
            Vitals::Animal(a) if self.alive && !a.infected => {
                a.infected = true;
                true
            }
            _ => false,
        }
    }

    /// Advance a plant's growth by one, saturating at [`MAX_GROWTH`].
    pub fn grow(&mut self) {
        if let Vitals::Plant(p) = &mut self.vitals {
            if self.alive && p.growth < MAX_GROWTH {
                p.growth += 1;
            }
        }
    }

    /// Food value this organism yields to an eater with `diet`, or `None`
    /// if it is dead or not edible by that diet.
    pub fn food_value_for(&self, diet: &DietStrategy, table: &SpeciesTable) -> Option<i32> {
        if !self.alive {
            return None;
        }
        match *diet {
            DietStrategy::Piscivore { prey, food_value } => {
                (self.species == prey).then_some(food_value)
            }
            DietStrategy::Herbivore => match table.get(self.species).diet {
                DietStrategy::Photosynthetic { food_value } => Some(food_value),
                _ => None,
            },
            DietStrategy::PelagicNonPredator | DietStrategy::Photosynthetic { .. } => None,
        }
    }

    /// Whether this organism is a breeding partner for an animal of
    /// `species` and `gender`: same species, opposite gender, alive and of
    /// breeding age under `descriptor`.
    pub fn is_mate_for(
        &self,
        species: Species,
        gender: Gender,
        descriptor: &SpeciesDescriptor,
    ) -> bool {
        self.alive
            && self.species == species
            && self
                .as_animal()
                .is_some_and(|a| a.gender != gender && descriptor.is_breeding_age(a.age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location::new(1, 1)
    }

    #[test]
    fn set_dead_clears_location() {
        let mut o = Organism::animal(Species::Tuna, loc(), Gender::Male, 3, 0);
        assert!(o.is_alive());
        o.set_dead();
        assert!(!o.is_alive());
        assert_eq!(o.location(), None);
        o.set_location(Location::new(0, 0));
        assert_eq!(o.location(), None);
    }

    #[test]
    fn tuna_is_food_for_sharks_only() {
        let table = SpeciesTable::default();
        let tuna = Organism::animal(Species::Tuna, loc(), Gender::Female, 1, 0);
        let shark_diet = table.get(Species::Shark).diet;
        let goldfish_diet = table.get(Species::Goldfish).diet;
        assert_eq!(tuna.food_value_for(&shark_diet, &table), Some(25));
        assert_eq!(tuna.food_value_for(&goldfish_diet, &table), None);
    }

    #[test]
    fn plants_feed_herbivores_their_own_value() {
        let table = SpeciesTable::default();
        let herb = DietStrategy::Herbivore;
        let algae = Organism::plant(Species::Algae, loc());
        let seaweed = Organism::plant(Species::Seaweed, loc());
        assert_eq!(algae.food_value_for(&herb, &table), Some(10));
        assert_eq!(seaweed.food_value_for(&herb, &table), Some(13));
        let shark_diet = table.get(Species::Shark).diet;
        assert_eq!(algae.food_value_for(&shark_diet, &table), None);
    }

    #[test]
    fn dead_organisms_are_not_food() {
        let table = SpeciesTable::default();
        let mut algae = Organism::plant(Species::Algae, loc());
        algae.set_dead();
        assert_eq!(algae.food_value_for(&DietStrategy::Herbivore, &table), None);
    }

    #[test]
    fn mates_need_opposite_gender_and_age() {
        let d = SpeciesDescriptor::default_for(Species::Shark);
        let adult_f = Organism::animal(Species::Shark, loc(), Gender::Female, 8, 5);
        let young_f = Organism::animal(Species::Shark, loc(), Gender::Female, 7, 5);
        let adult_m = Organism::animal(Species::Shark, loc(), Gender::Male, 9, 5);
        let other = Organism::animal(Species::Barracuda, loc(), Gender::Female, 9, 5);
        assert!(adult_f.is_mate_for(Species::Shark, Gender::Male, &d));
        assert!(!young_f.is_mate_for(Species::Shark, Gender::Male, &d));
        assert!(!adult_m.is_mate_for(Species::Shark, Gender::Male, &d));
        assert!(!other.is_mate_for(Species::Shark, Gender::Male, &d));
    }

    #[test]
    fn growth_saturates() {
        let mut p = Organism::plant(Species::Seaweed, loc());
        for _ in 0..20 {
            p.grow();
        }
        assert_eq!(p.as_plant().map(|s| s.growth), Some(MAX_GROWTH));
    }

    #[test]
    fn infection_applies_to_living_animals_once() {
        let mut a = Organism::animal(Species::Goldfish, loc(), Gender::Male, 0, 0);
        assert!(a.is_susceptible());
        assert!(a.infect());
        assert!(!a.infect());
        assert!(a.is_infected());
        let mut p = Organism::plant(Species::Algae, loc());
        assert!(!p.infect());
        assert!(!p.is_susceptible());
    }
}
