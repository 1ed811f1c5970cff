use std::error::Error as StdError;

/// Errors that can occur during Dormand–Prince integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("no sample times given")]
    NoSampleTimes,

    #[error("sample times must be finite and strictly increasing (index {index})")]
    InvalidSampleTimes { index: usize },

    #[error("non-finite derivative or error estimate at t = {time}")]
    NonFinite { time: f64 },

    #[error("step size {step_size:e} fell below the resolvable minimum at t = {time}")]
    StepSizeTooSmall { time: f64, step_size: f64 },

    #[error("exceeded {max_steps} steps before reaching the end of the span (t = {time})")]
    MaxStepsExceeded { max_steps: usize, time: f64 },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }

    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
