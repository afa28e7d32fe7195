//! Benchmark profiles for reef simulations.
//!
//! - [`reference_profile`]: the default 80x120 reef
//! - [`stress_profile`]: 320x480 (~150K cells), same densities
//! - [`crowded_profile`]: 80x120 with five times the default animal density

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use reef_engine::{CreationProbabilities, SimConfig};

/// The default reef at its default size.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        seed: Some(seed),
        ..SimConfig::default()
    }
}

/// Default densities on a field sixteen times larger.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        seed: Some(seed),
        ..SimConfig::with_dimensions(320, 480)
    }
}

/// A field where most animals have few free neighbours, so births,
/// evictions and overcrowding dominate.
pub fn crowded_profile(seed: u64) -> SimConfig {
    let base = CreationProbabilities::default();
    SimConfig {
        seed: Some(seed),
        creation: CreationProbabilities {
            shark: base.shark * 5.0,
            barracuda: base.barracuda * 5.0,
            tuna: (base.tuna * 5.0).min(1.0),
            goldfish: base.goldfish * 5.0,
            parrotfish: base.parrotfish * 5.0,
            ..base
        },
        ..SimConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for config in [reference_profile(1), stress_profile(1), crowded_profile(1)] {
            assert!(config.validate().is_ok());
        }
        let grid = stress_profile(1).grid().unwrap();
        assert_eq!(grid.cell_count(), 320 * 480);
    }
}
