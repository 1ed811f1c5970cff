use std::fmt;

use gravitas_core::Snapshot;

/// Events emitted by the Dormand–Prince solver.
///
/// A `Sampled` event is emitted once per requested sample time, starting with
/// index 0 for the initial input. Step events report the adaptive controller's
/// decisions between samples.
#[derive(Debug)]
pub enum Event<'a, I, O> {
    /// The solution was evaluated at a requested sample time.
    Sampled {
        /// Position of the sample in the requested time grid.
        index: usize,

        /// The sample time.
        time: f64,

        /// Snapshot of the model input and output at this sample.
        snapshot: &'a Snapshot<I, O>,
    },

    /// A step from `time` to `time + step_size` met the tolerance.
    StepAccepted {
        time: f64,
        step_size: f64,
        error_norm: f64,
    },

    /// A step from `time` was rejected and will be retried with a smaller size.
    StepRejected {
        time: f64,
        step_size: f64,
        error_norm: f64,
    },
}

impl<I, O> Event<'_, I, O> {
    /// Returns the time this event refers to.
    ///
    /// For step events this is the start of the attempted step.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Sampled { time, .. }
            | Self::StepAccepted { time, .. }
            | Self::StepRejected { time, .. } => *time,
        }
    }
}

impl<I, O> fmt::Display for Event<'_, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sampled { index, time, .. } => write!(f, "sample {index} at t={time}"),
            Self::StepAccepted {
                time,
                step_size,
                error_norm,
            } => write!(f, "accepted step at t={time} (h={step_size:e}, err={error_norm:.3})"),
            Self::StepRejected {
                time,
                step_size,
                error_norm,
            } => write!(f, "rejected step at t={time} (h={step_size:e}, err={error_norm:.3})"),
        }
    }
}
