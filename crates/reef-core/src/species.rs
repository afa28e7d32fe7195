//! Species catalogue and per-species behaviour descriptors.
//!
//! Every concrete species is data: a [`SpeciesDescriptor`] carries its
//! life-history numbers, a [`DietStrategy`] tag that selects the
//! behaviour executor, and a [`DiurnalGate`] restricting movement or
//! breeding to part of the day. The [`SpeciesTable`] maps every
//! [`Species`] to its descriptor.

use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the time-of-day cycle, in hours.
pub const HOURS_PER_DAY: u32 = 24;

/// Broad capability class of a species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ages, moves, breeds and (for some diets) starves.
    Animal,
    /// Stationary; grows and may be eaten.
    Plant,
}

/// Every species the simulation knows about.
///
/// Declaration order is the canonical order used for statistics and for
/// the initial-population creation cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Apex piscivore.
    Shark,
    /// Piscivore.
    Barracuda,
    /// Pelagic schooling fish; the piscivores' prey.
    Tuna,
    /// Herbivore, moves at night.
    Goldfish,
    /// Herbivore, breeds at night.
    Parrotfish,
    /// Photosynthetic.
    Algae,
    /// Photosynthetic.
    Seaweed,
}

impl Species {
    /// All species in canonical order.
    pub const ALL: [Species; 7] = [
        Species::Shark,
        Species::Barracuda,
        Species::Tuna,
        Species::Goldfish,
        Species::Parrotfish,
        Species::Algae,
        Species::Seaweed,
    ];

    /// Animal species whose extinction ends a run.
    pub const REQUIRED: [Species; 5] = [
        Species::Shark,
        Species::Barracuda,
        Species::Tuna,
        Species::Goldfish,
        Species::Parrotfish,
    ];

    /// Position of this species in [`Species::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Capability class.
    pub const fn kind(self) -> Kind {
        match self {
            Species::Algae | Species::Seaweed => Kind::Plant,
            _ => Kind::Animal,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Species::Shark => "Shark",
            Species::Barracuda => "Barracuda",
            Species::Tuna => "Tuna",
            Species::Goldfish => "Goldfish",
            Species::Parrotfish => "Parrotfish",
            Species::Algae => "Algae",
            Species::Seaweed => "Seaweed",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Animal gender, fixed at birth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Draw a gender uniformly at random.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f64>() < 0.5 {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// The other gender.
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// An inclusive range of hours on the 24-hour clock.
///
/// When `start > end` the window wraps past midnight, so
/// `DiurnalWindow::new(19, 5)` covers 19:00 through 05:00.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiurnalWindow {
    /// First hour inside the window.
    pub start: u32,
    /// Last hour inside the window.
    pub end: u32,
}

impl DiurnalWindow {
    /// Daylight hours used by pelagic species.
    pub const DAYLIGHT: DiurnalWindow = DiurnalWindow::new(5, 20);
    /// Night hours used by herbivores.
    pub const NIGHT: DiurnalWindow = DiurnalWindow::new(19, 5);

    /// Create a window spanning `start..=end`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `hour` falls inside the window.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            (self.start..=self.end).contains(&hour)
        } else {
            hour >= self.start || hour <= self.end
        }
    }

    /// Both bounds lie on the clock.
    pub fn is_valid(&self) -> bool {
        self.start < HOURS_PER_DAY && self.end < HOURS_PER_DAY
    }
}

/// Time-of-day restrictions on a species' behaviour.
///
/// `None` means the behaviour is unrestricted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiurnalGate {
    /// Hours during which the animal may leave its cell.
    #[serde(default)]
    pub movement: Option<DiurnalWindow>,
    /// Hours during which the animal may breed.
    #[serde(default)]
    pub breeding: Option<DiurnalWindow>,
}

impl DiurnalGate {
    /// No restrictions.
    pub const OPEN: DiurnalGate = DiurnalGate {
        movement: None,
        breeding: None,
    };

    /// Movement allowed at `hour`.
    pub fn allows_movement(&self, hour: u32) -> bool {
        self.movement.map_or(true, |w| w.contains(hour))
    }

    /// Breeding allowed at `hour`.
    pub fn allows_breeding(&self, hour: u32) -> bool {
        self.breeding.map_or(true, |w| w.contains(hour))
    }
}

/// How a species feeds and what gates its breeding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum DietStrategy {
    /// Hunts a prey species; needs a mate to breed; starves without food.
    Piscivore {
        /// The species this hunter eats.
        prey: Species,
        /// Food level restored by one kill.
        food_value: i32,
    },
    /// Eats any live plant; breeds without a mate.
    Herbivore,
    /// Neither hunts nor grazes; needs a mate to breed.
    PelagicNonPredator,
    /// Stationary plant, eaten by herbivores.
    Photosynthetic {
        /// Food level a herbivore gains from eating this plant.
        food_value: i32,
    },
}

impl DietStrategy {
    /// The capability class this diet applies to.
    pub fn kind(&self) -> Kind {
        match self {
            DietStrategy::Photosynthetic { .. } => Kind::Plant,
            _ => Kind::Animal,
        }
    }

    /// Whether animals with this diet lose food level every tick.
    pub fn starves(&self) -> bool {
        matches!(self, DietStrategy::Piscivore { .. })
    }

    /// Whether breeding requires an adjacent partner.
    pub fn requires_mate(&self) -> bool {
        matches!(
            self,
            DietStrategy::Piscivore { .. } | DietStrategy::PelagicNonPredator
        )
    }

    /// Short name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            DietStrategy::Piscivore { .. } => "piscivore",
            DietStrategy::Herbivore => "herbivore",
            DietStrategy::PelagicNonPredator => "pelagic",
            DietStrategy::Photosynthetic { .. } => "photosynthetic",
        }
    }
}

/// Fixed parameter table for one species.
///
/// The life-history fields are ignored for photosynthetic species, which
/// neither age nor breed individually.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDescriptor {
    /// Age from which the animal may breed.
    pub breeding_age: u32,
    /// The animal dies once its age exceeds this.
    pub max_age: u32,
    /// Chance that an eligible animal breeds on a given tick.
    pub breeding_probability: f64,
    /// Upper bound of the uniform litter size draw (at least 1).
    pub max_litter_size: u32,
    /// Feeding rule and behaviour executor selector.
    pub diet: DietStrategy,
    /// Time-of-day restrictions.
    #[serde(default)]
    pub gate: DiurnalGate,
}

impl SpeciesDescriptor {
    /// Descriptor for a photosynthetic species.
    pub const fn plant(food_value: i32) -> Self {
        Self {
            breeding_age: 0,
            max_age: 0,
            breeding_probability: 0.0,
            max_litter_size: 0,
            diet: DietStrategy::Photosynthetic { food_value },
            gate: DiurnalGate::OPEN,
        }
    }

    /// Default descriptor for `species`.
    pub const fn default_for(species: Species) -> Self {
        match species {
            Species::Shark | Species::Barracuda => Self {
                breeding_age: 8,
                max_age: 150,
                breeding_probability: 0.8,
                max_litter_size: 2,
                diet: DietStrategy::Piscivore {
                    prey: Species::Tuna,
                    food_value: 25,
                },
                gate: DiurnalGate::OPEN,
            },
            Species::Tuna => Self {
                breeding_age: 6,
                max_age: 80,
                breeding_probability: 0.4,
                max_litter_size: 3,
                diet: DietStrategy::PelagicNonPredator,
                gate: DiurnalGate {
                    movement: Some(DiurnalWindow::DAYLIGHT),
                    breeding: Some(DiurnalWindow::DAYLIGHT),
                },
            },
            Species::Goldfish => Self {
                breeding_age: 5,
                max_age: 40,
                breeding_probability: 0.01,
                max_litter_size: 4,
                diet: DietStrategy::Herbivore,
                gate: DiurnalGate {
                    movement: Some(DiurnalWindow::NIGHT),
                    breeding: None,
                },
            },
            Species::Parrotfish => Self {
                breeding_age: 5,
                max_age: 40,
                breeding_probability: 0.05,
                max_litter_size: 4,
                diet: DietStrategy::Herbivore,
                gate: DiurnalGate {
                    movement: None,
                    breeding: Some(DiurnalWindow::NIGHT),
                },
            },
            Species::Algae => Self::plant(10),
            Species::Seaweed => Self::plant(13),
        }
    }

    /// Whether an animal of this species is old enough to breed.
    pub fn is_breeding_age(&self, age: u32) -> bool {
        age >= self.breeding_age
    }
}

/// Descriptor lookup for every species.
///
/// Always complete: deserialising a partial map fills the missing species
/// with their defaults, so lookups never fail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<Species, SpeciesDescriptor>",
    into = "IndexMap<Species, SpeciesDescriptor>"
)]
pub struct SpeciesTable {
    descriptors: [SpeciesDescriptor; 7],
}

impl SpeciesTable {
    /// Descriptor for `species`.
    pub fn get(&self, species: Species) -> &SpeciesDescriptor {
        &self.descriptors[species.index()]
    }

    /// Replace the descriptor for `species`.
    pub fn set(&mut self, species: Species, descriptor: SpeciesDescriptor) {
        self.descriptors[species.index()] = descriptor;
    }

    /// Iterate `(species, descriptor)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, &SpeciesDescriptor)> {
        Species::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self {
            descriptors: Species::ALL.map(SpeciesDescriptor::default_for),
        }
    }
}

impl From<IndexMap<Species, SpeciesDescriptor>> for SpeciesTable {
    fn from(overrides: IndexMap<Species, SpeciesDescriptor>) -> Self {
        let mut table = Self::default();
        for (species, descriptor) in overrides {
            table.set(species, descriptor);
        }
        table
    }
}

impl From<SpeciesTable> for IndexMap<Species, SpeciesDescriptor> {
    fn from(table: SpeciesTable) -> Self {
        table.iter().map(|(s, d)| (s, *d)).collect()
    }
}
