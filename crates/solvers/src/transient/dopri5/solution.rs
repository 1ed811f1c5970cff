use gravitas_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Produced a sample for every requested time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Work counters for a single solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Derivative evaluations, including the initial step-size probe.
    pub evaluations: usize,

    /// Accepted steps.
    pub accepted: usize,

    /// Rejected steps.
    pub rejected: usize,
}

/// The result of a Dormand–Prince integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// One snapshot per requested sample time, in order.
    ///
    /// Shorter than the requested grid only when an observer stopped the solve.
    pub samples: Vec<Snapshot<I, O>>,

    /// Work counters.
    pub stats: Stats,
}
