//! Same seed, same run.

use reef_engine::{SimConfig, Simulator};
use reef_test_utils::{RecordingStats, RecordingView};

fn run(seed: u64, steps: u64) -> RecordingView {
    let config = SimConfig {
        seed: Some(seed),
        ..SimConfig::with_dimensions(30, 40)
    };
    let mut sim = Simulator::new(config).unwrap();
    let mut view = RecordingView::default();
    sim.simulate(steps, &mut view, &mut RecordingStats::default());
    view
}

#[test]
fn identical_seeds_give_identical_histories() {
    let a = run(42, 40);
    let b = run(42, 40);
    assert_eq!(a.frames, b.frames);
    assert!(a.frames.len() > 1);
}

#[test]
fn different_seeds_diverge() {
    let a = run(1, 5);
    let b = run(2, 5);
    assert_ne!(a.frames[0].digest, b.frames[0].digest);
}

#[test]
fn config_round_trips_through_toml() {
    let config = SimConfig {
        seed: Some(17),
        ..SimConfig::with_dimensions(12, 18)
    };
    let text = toml::to_string(&config).unwrap();
    let parsed = SimConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);

    let mut a = Simulator::new(config).unwrap();
    let mut b = Simulator::new(parsed).unwrap();
    for _ in 0..10 {
        a.step();
        b.step();
        assert_eq!(a.snapshot().digest(), b.snapshot().digest());
    }
}

#[test]
fn default_scale_long_run_completes() {
    let config = SimConfig {
        seed: Some(2024),
        ..SimConfig::default()
    };
    let mut sim = Simulator::new(config).unwrap();
    let mut stats = RecordingStats::default();
    let summary = sim.simulate(60, &mut reef_engine::NullObserver, &mut stats);
    assert_eq!(stats.reports.len() as u64, summary.steps_run + 1);
    assert!(sim.snapshot().living_count() <= 80 * 120);
}
