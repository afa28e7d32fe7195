//! Hand-placed scenarios exercising one rule at a time.

use reef_core::{Condition, Gender, Location, Species};
use reef_engine::{Halt, NullObserver};
use reef_test_utils::fixtures::{adult, hunter, plant, viable_row};
use reef_test_utils::{RecordingStats, RecordingView, ScenarioBuilder};

fn l(r: i32, c: i32) -> Location {
    Location::new(r, c)
}

fn ring(centre: Location) -> Vec<Location> {
    let mut cells = Vec::new();
    for dr in -1..=1 {
        for dc in -1..=1 {
            if (dr, dc) != (0, 0) {
                cells.push(centre.offset(dr, dc));
            }
        }
    }
    cells
}

#[test]
fn boxed_in_hunter_dies_of_overcrowding() {
    // Plants act first, so every neighbour is already taken in the next
    // buffer when the shark's turn comes.
    let mut builder = ScenarioBuilder::new(3, 3).plant_growth(0);
    for cell in ring(l(1, 1)) {
        builder = builder.with(plant(Species::Algae, cell.row(), cell.col()));
    }
    let mut sim = builder.with(hunter(Species::Shark, 1, 1, 10)).build();

    let metrics = sim.step().clone();
    let snap = sim.snapshot();
    assert_eq!(snap.stats()[&Species::Shark], 0);
    assert!(snap.organism_at(&l(1, 1)).is_none());
    assert_eq!(snap.stats()[&Species::Algae], 8);
    assert_eq!(metrics.tally.overcrowded, 1);
}

#[test]
fn hunter_takes_the_only_prey() {
    let mut sim = ScenarioBuilder::new(3, 3)
        .plant_growth(0)
        .with(hunter(Species::Barracuda, 1, 1, 10))
        .with(adult(Species::Tuna, Gender::Male, 0, 0))
        .build();

    sim.step();
    let snap = sim.snapshot();
    assert_eq!(snap.stats()[&Species::Tuna], 0);
    let barracuda = snap.organism_at(&l(0, 0)).expect("hunter moved onto its prey");
    assert_eq!(barracuda.species(), Species::Barracuda);
    assert_eq!(barracuda.as_animal().unwrap().food_level, 25);
    assert_eq!(snap.living_count(), 1);
}

#[test]
fn growth_is_capped_per_tick() {
    let mut sim = ScenarioBuilder::new(10, 10).build();
    let cap = sim.config().plant_growth_per_tick as usize;
    sim.step();
    let snap = sim.snapshot();
    assert_eq!(snap.living_count(), cap);
    assert_eq!(snap.stats()[&Species::Algae], cap / 2);
    assert_eq!(snap.stats()[&Species::Seaweed], cap / 2);

    sim.step();
    assert_eq!(sim.snapshot().living_count(), 2 * cap);
}

fn fog_trap(weather: Condition) -> reef_engine::Simulator {
    // At hour 23 the tuna holds its cell, so the shark's only neighbour
    // that is not a plant is the tuna itself.
    let mut builder = ScenarioBuilder::new(3, 3)
        .day_start(22)
        .weather(weather)
        .plant_growth(0)
        .with(adult(Species::Tuna, Gender::Female, 0, 0));
    for cell in ring(l(1, 1)).into_iter().filter(|&c| c != l(0, 0)) {
        builder = builder.with(plant(Species::Seaweed, cell.row(), cell.col()));
    }
    builder.with(hunter(Species::Shark, 1, 1, 10)).build()
}

#[test]
fn fog_stops_the_hunt() {
    let mut sim = fog_trap(Condition::Foggy);
    sim.step();
    let snap = sim.snapshot();
    assert_eq!(snap.stats()[&Species::Tuna], 1);
    assert_eq!(snap.stats()[&Species::Shark], 0);
}

#[test]
fn without_fog_the_same_trap_feeds_the_hunter() {
    let mut sim = fog_trap(Condition::Cloudy);
    sim.step();
    let snap = sim.snapshot();
    assert_eq!(snap.stats()[&Species::Tuna], 0);
    let shark = snap.organism_at(&l(0, 0)).unwrap();
    assert_eq!(shark.species(), Species::Shark);
}

#[test]
fn run_halts_on_extinction_and_reports_every_tick() {
    // Every animal is female, so nothing that needs a mate can replace
    // the hunters once they starve.
    let mut builder = ScenarioBuilder::new(6, 6).plant_growth(0);
    for organism in viable_row() {
        builder = builder.with(organism);
    }
    let mut sim = builder.build();

    let mut view = RecordingView::default();
    let mut stats = RecordingStats::default();
    let summary = sim.simulate(50, &mut view, &mut stats);

    assert_eq!(summary.halt, Halt::NotViable);
    assert_eq!(view.frames.len() as u64, summary.steps_run + 1);
    assert_eq!(stats.reports.len(), view.frames.len());
    assert!(view.frames[0].viable);
    assert!(!view.frames.last().unwrap().viable);
}

#[test]
fn step_limit_ends_a_viable_run() {
    let mut builder = ScenarioBuilder::new(8, 8);
    for organism in viable_row() {
        builder = builder.with(organism);
    }
    let mut sim = builder.build();
    let summary = sim.simulate(1, &mut NullObserver, &mut NullObserver);
    assert_eq!(summary.steps_run, 1);
    assert_eq!(summary.halt, Halt::StepLimit);
}
