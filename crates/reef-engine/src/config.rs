//! Simulation configuration, TOML loading and validation.

use std::error::Error;
use std::fmt;
use std::path::Path;

use reef_core::{DiurnalWindow, Kind, Species, SpeciesTable, WEATHER_CHANGE_PROBABILITY};
use reef_space::{Grid, SpaceError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Rows used when the configured depth is unusable.
pub const DEFAULT_DEPTH: u32 = 80;
/// Columns used when the configured width is unusable.
pub const DEFAULT_WIDTH: u32 = 120;
/// Length of [`Simulator::run_long`](crate::Simulator::run_long).
pub const LONG_RUN_STEPS: u64 = 700;
/// Hour of the day at step 0.
pub const DAY_START: u32 = 12;
/// Hours the clock advances per tick.
pub const HOURS_PER_STEP: u32 = 1;
/// Upper bound on plants created by global growth in one tick.
pub const PLANT_GROWTH_PER_TICK: u32 = 40;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating a [`SimConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The config file is not valid TOML for this schema.
    Parse(toml::de::Error),
    /// A probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// Which setting.
        name: String,
        /// The offending value.
        value: f64,
    },
    /// An animal species has `max_litter_size` of zero.
    InvalidLitterSize {
        /// The species.
        species: Species,
    },
    /// A diet does not fit the species it is attached to.
    InvalidDiet {
        /// The species.
        species: Species,
        /// What is wrong.
        reason: &'static str,
    },
    /// A diurnal window has an hour outside `0..24`.
    InvalidWindow {
        /// The species.
        species: Species,
        /// The offending window.
        window: DiurnalWindow,
    },
    /// The grid could not be built.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading config: {e}"),
            Self::Parse(e) => write!(f, "parsing config: {e}"),
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            Self::InvalidLitterSize { species } => {
                write!(f, "{species}: max_litter_size must be at least 1")
            }
            Self::InvalidDiet { species, reason } => write!(f, "{species}: {reason}"),
            Self::InvalidWindow { species, window } => write!(
                f,
                "{species}: window {}..={} must use hours below 24",
                window.start, window.end
            ),
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── Sections ───────────────────────────────────────────────────────

/// Per-cell creation probabilities for the initial population.
///
/// Each cell draws once per species, in [`Species::ALL`] order, and takes
/// the first species whose draw succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreationProbabilities {
    /// Shark.
    pub shark: f64,
    /// Barracuda.
    pub barracuda: f64,
    /// Tuna.
    pub tuna: f64,
    /// Goldfish.
    pub goldfish: f64,
    /// Parrotfish.
    pub parrotfish: f64,
    /// Algae.
    pub algae: f64,
    /// Seaweed.
    pub seaweed: f64,
}

impl CreationProbabilities {
    /// No initial population at all.
    pub const NONE: CreationProbabilities = CreationProbabilities {
        shark: 0.0,
        barracuda: 0.0,
        tuna: 0.0,
        goldfish: 0.0,
        parrotfish: 0.0,
        algae: 0.0,
        seaweed: 0.0,
    };

    /// Probability for `species`.
    pub fn get(&self, species: Species) -> f64 {
        match species {
            Species::Shark => self.shark,
            Species::Barracuda => self.barracuda,
            Species::Tuna => self.tuna,
            Species::Goldfish => self.goldfish,
            Species::Parrotfish => self.parrotfish,
            Species::Algae => self.algae,
            Species::Seaweed => self.seaweed,
        }
    }

    /// The cascade in draw order.
    pub fn cascade(&self) -> [(Species, f64); 7] {
        Species::ALL.map(|s| (s, self.get(s)))
    }
}

impl Default for CreationProbabilities {
    fn default() -> Self {
        Self {
            shark: 0.025,
            barracuda: 0.025,
            tuna: 0.15,
            goldfish: 0.01,
            parrotfish: 0.01,
            algae: 0.02,
            seaweed: 0.02,
        }
    }
}

/// Disease parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfectionConfig {
    /// Chance per tick that a healthy animal becomes infected on its own.
    pub spontaneous_probability: f64,
    /// Chance per tick that a carrier infects one healthy neighbour.
    pub spread_probability: f64,
}

impl InfectionConfig {
    /// Disease disabled.
    pub const OFF: InfectionConfig = InfectionConfig {
        spontaneous_probability: 0.0,
        spread_probability: 0.0,
    };
}

impl Default for InfectionConfig {
    fn default() -> Self {
        Self {
            spontaneous_probability: 0.001,
            spread_probability: 0.05,
        }
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for a [`Simulator`](crate::Simulator).
///
/// Every field has a default, so a TOML file only needs the settings it
/// changes. Species missing from the `species` table keep their default
/// descriptors.
///
/// ```toml
/// depth = 40
/// width = 60
/// seed = 7
///
/// [creation]
/// tuna = 0.2
///
/// [species.goldfish]
/// breeding_age = 4
/// max_age = 40
/// breeding_probability = 0.02
/// max_litter_size = 4
/// diet = { strategy = "herbivore" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Rows. Values that are not positive fall back to the defaults.
    pub depth: i64,
    /// Columns. Values that are not positive fall back to the defaults.
    pub width: i64,
    /// RNG seed. `None` draws one from system entropy.
    pub seed: Option<u64>,
    /// Chance per tick that the weather is re-drawn.
    pub weather_change_probability: f64,
    /// Upper bound on plants created by global growth each tick.
    pub plant_growth_per_tick: u32,
    /// Hour of the day at step 0, taken modulo 24.
    pub day_start: u32,
    /// Initial population density.
    pub creation: CreationProbabilities,
    /// Species parameters.
    pub species: SpeciesTable,
    /// Disease parameters.
    pub infection: InfectionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH as i64,
            width: DEFAULT_WIDTH as i64,
            seed: None,
            weather_change_probability: WEATHER_CHANGE_PROBABILITY,
            plant_growth_per_tick: PLANT_GROWTH_PER_TICK,
            day_start: DAY_START,
            creation: CreationProbabilities::default(),
            species: SpeciesTable::default(),
            infection: InfectionConfig::default(),
        }
    }
}

impl SimConfig {
    /// Default configuration over a `depth × width` field.
    pub fn with_dimensions(depth: i64, width: i64) -> Self {
        Self {
            depth,
            width,
            ..Self::default()
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check every setting except the dimensions, which are corrected
    /// rather than rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (species, p) in self.creation.cascade() {
            check_probability(&format!("creation.{}", species.name().to_lowercase()), p)?;
        }
        check_probability(
            "infection.spontaneous_probability",
            self.infection.spontaneous_probability,
        )?;
        check_probability(
            "infection.spread_probability",
            self.infection.spread_probability,
        )?;
        check_probability(
            "weather_change_probability",
            self.weather_change_probability,
        )?;

        for (species, descriptor) in self.species.iter() {
            if descriptor.diet.kind() != species.kind() {
                return Err(ConfigError::InvalidDiet {
                    species,
                    reason: "diet does not match the species' kind",
                });
            }
            if let reef_core::DietStrategy::Piscivore { prey, .. } = descriptor.diet {
                if prey.kind() != Kind::Animal {
                    return Err(ConfigError::InvalidDiet {
                        species,
                        reason: "piscivore prey must be an animal",
                    });
                }
            }
            if species.kind() == Kind::Plant {
                continue;
            }
            check_probability(
                &format!("species.{}.breeding_probability", species.name().to_lowercase()),
                descriptor.breeding_probability,
            )?;
            if descriptor.max_litter_size == 0 {
                return Err(ConfigError::InvalidLitterSize { species });
            }
            for window in [descriptor.gate.movement, descriptor.gate.breeding]
                .into_iter()
                .flatten()
            {
                if !window.is_valid() {
                    return Err(ConfigError::InvalidWindow { species, window });
                }
            }
        }
        Ok(())
    }

    /// The grid to simulate on.
    ///
    /// Dimensions that are not positive or do not fit a grid are replaced,
    /// both together, by [`DEFAULT_DEPTH`] × [`DEFAULT_WIDTH`] with a
    /// warning.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        let requested = u32::try_from(self.depth)
            .ok()
            .zip(u32::try_from(self.width).ok())
            .and_then(|(depth, width)| Grid::new(depth, width).ok());
        match requested {
            Some(grid) => Ok(grid),
            None => {
                warn!(
                    depth = self.depth,
                    width = self.width,
                    "dimensions must be positive; using {DEFAULT_DEPTH}x{DEFAULT_WIDTH}"
                );
                Ok(Grid::new(DEFAULT_DEPTH, DEFAULT_WIDTH)?)
            }
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability {
            name: name.to_string(),
            value,
        })
    }
}
