//! The weather state machine.
//!
//! Four conditions with no transition restrictions: each tick, with a fixed
//! probability, a condition is re-drawn uniformly from all four (it may
//! draw the current one again). Piscivores do not hunt in fog.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default per-tick probability of re-drawing the condition.
pub const WEATHER_CHANGE_PROBABILITY: f64 = 0.1;

/// A weather condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Initial condition.
    #[default]
    Sunny,
    /// Rain.
    Rainy,
    /// Cloud cover.
    Cloudy,
    /// Fog; suppresses hunting.
    Foggy,
}

impl Condition {
    /// All conditions, in draw order.
    pub const ALL: [Condition; 4] = [
        Condition::Sunny,
        Condition::Rainy,
        Condition::Cloudy,
        Condition::Foggy,
    ];

    /// Whether predators can see prey in this condition.
    pub fn permits_hunting(self) -> bool {
        self != Condition::Foggy
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Condition::Sunny => "sunny",
            Condition::Rainy => "rainy",
            Condition::Cloudy => "cloudy",
            Condition::Foggy => "foggy",
        })
    }
}

/// Weather state, advanced once per tick by the simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct Weather {
    condition: Condition,
    change_probability: f64,
}

impl Weather {
    /// Start sunny with the given per-tick change probability.
    pub fn new(change_probability: f64) -> Self {
        Self {
            condition: Condition::Sunny,
            change_probability,
        }
    }

    /// A weather that never changes away from `condition`.
    pub fn pinned(condition: Condition) -> Self {
        Self {
            condition,
            change_probability: 0.0,
        }
    }

    /// The current condition.
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Overwrite the current condition.
    pub fn force(&mut self, condition: Condition) {
        self.condition = condition;
    }

    /// Per-tick change probability.
    pub fn change_probability(&self) -> f64 {
        self.change_probability
    }

    /// Advance one tick. Returns `true` if a re-draw happened.
    ///
    /// Consumes exactly one draw when the change gate fails and two when
    /// it passes.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if rng.gen::<f64>() <= self.change_probability && self.change_probability > 0.0 {
            self.condition = Condition::ALL[rng.gen_range(0..Condition::ALL.len())];
            true
        } else {
            false
        }
    }
}

impl Default for Weather {
    fn default() -> Self {
        Self::new(WEATHER_CHANGE_PROBABILITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn starts_sunny() {
        assert_eq!(Weather::default().condition(), Condition::Sunny);
    }

    #[test]
    fn pinned_weather_never_changes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut w = Weather::pinned(Condition::Foggy);
        for _ in 0..500 {
            assert!(!w.update(&mut rng));
            assert_eq!(w.condition(), Condition::Foggy);
        }
    }

    #[test]
    fn certain_change_visits_every_condition() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut w = Weather::new(1.0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            assert!(w.update(&mut rng));
            seen.insert(w.condition());
        }
        assert_eq!(seen.len(), Condition::ALL.len());
    }

    #[test]
    fn same_seed_same_sequence() {
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut w = Weather::default();
            (0..300)
                .map(|_| {
                    w.update(&mut rng);
                    w.condition()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn only_fog_blocks_hunting() {
        for c in Condition::ALL {
            assert_eq!(c.permits_hunting(), c != Condition::Foggy);
        }
    }
}
