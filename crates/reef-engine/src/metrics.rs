//! Per-tick timing and event metrics.

use reef_behavior::Tally;

/// Timing and event counts collected during a single tick.
///
/// All durations are in microseconds. The simulator fills these in at the
/// end of each [`step`](crate::Simulator::step).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Infection draws and spread.
    pub infection_us: u64,
    /// Every organism's `act`.
    pub act_us: u64,
    /// Global plant growth.
    pub growth_us: u64,
    /// Buffer swap and population compaction.
    pub publish_us: u64,
    /// Living organisms after the tick.
    pub living: usize,
    /// What happened during the tick.
    pub tally: Tally,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.living, 0);
        assert_eq!(m.tally, Tally::default());
    }
}
