//! Per-tick metrics for the chain engine.
//!
//! [`StepMetrics`] captures timing and event counts for a single tick.
//! The engine populates these after each `tick()` call; consumers read
//! them from [`TickResult`](crate::TickResult) or
//! [`ChainWorld::last_metrics`](crate::ChainWorld::last_metrics).

/// Timing and event counters collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent in the integrate phase, in microseconds.
    pub integrate_us: u64,
    /// Time spent in the contact sweep, in microseconds.
    pub contacts_us: u64,
    /// Contacts resolved this tick.
    pub contacts_resolved: u32,
    /// Rings stopped by the floor clamp during this tick's integrate
    /// phase.
    pub floor_clamps: u32,
}
