//! Seams towards rendering and statistics reporting.
//!
//! The simulator never draws or prints. Once per completed tick it hands
//! a read-only [`Snapshot`] to a [`FieldView`] and the per-species counts
//! to a [`StatsSink`].

use indexmap::IndexMap;
use reef_arena::Snapshot;
use reef_core::{Species, TickId};
use tracing::{debug, info};

/// Consumer of the published field after each tick.
pub trait FieldView {
    /// Show the state after `step`. Called with step 0 before the first tick.
    fn show_status(&mut self, step: TickId, snapshot: &Snapshot<'_>);
}

/// Consumer of per-species living counts after each tick.
pub trait StatsSink {
    /// Report the counts after `step`.
    fn report(&mut self, step: TickId, stats: &IndexMap<Species, usize>);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl FieldView for NullObserver {
    fn show_status(&mut self, _step: TickId, _snapshot: &Snapshot<'_>) {}
}

impl StatsSink for NullObserver {
    fn report(&mut self, _step: TickId, _stats: &IndexMap<Species, usize>) {}
}

/// Logs the species counts at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingStats;

impl StatsSink for TracingStats {
    fn report(&mut self, step: TickId, stats: &IndexMap<Species, usize>) {
        let line = stats
            .iter()
            .map(|(species, count)| format!("{species}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        info!(step = step.0, "{line}");
    }
}

/// Logs a one-line field summary at `debug` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingView;

impl FieldView for TracingView {
    fn show_status(&mut self, step: TickId, snapshot: &Snapshot<'_>) {
        debug!(
            step = step.0,
            living = snapshot.living_count(),
            viable = snapshot.is_viable(),
            digest = format_args!("{:016x}", snapshot.digest()),
            "field"
        );
    }
}
