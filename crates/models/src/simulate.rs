//! Integrates a single body over a sampled time span.

use gravitas_core::{Observer, linspace};
use gravitas_solvers::transient::dopri5;
use thiserror::Error;

use crate::{
    body::BodyState,
    constants::{SAMPLES, YEAR},
    orbit::{BodyDerivative, OrbitInput, OrbitModel, OrbitProblem},
    trajectory::Trajectory,
};

/// The span, sampling, and solver settings for one orbit integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    span: [f64; 2],
    samples: usize,
    solver: dopri5::Config,
}

/// Errors that can occur when validating a [`SimulationConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimulationConfigError {
    #[error("span must be finite with start < end")]
    Span,

    #[error("samples must be at least two")]
    Samples,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        let solver = dopri5::Config::new(1e-6, 1e-6, 100_000).unwrap();
        Self::new([0.0, YEAR], SAMPLES, solver).unwrap()
    }
}

impl SimulationConfig {
    /// Creates a validated simulation config.
    ///
    /// # Errors
    ///
    /// Returns an error if the span is empty, reversed, or non-finite, or if
    /// fewer than two samples are requested.
    pub fn new(
        span: [f64; 2],
        samples: usize,
        solver: dopri5::Config,
    ) -> Result<Self, SimulationConfigError> {
        let [start, end] = span;
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(SimulationConfigError::Span);
        }
        if samples < 2 {
            return Err(SimulationConfigError::Samples);
        }

        Ok(Self {
            span,
            samples,
            solver,
        })
    }

    #[must_use]
    pub fn span(&self) -> [f64; 2] {
        self.span
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[must_use]
    pub fn solver(&self) -> &dopri5::Config {
        &self.solver
    }

    /// Returns the evenly spaced sample times, ending exactly on the span end.
    #[must_use]
    pub fn sample_times(&self) -> Vec<f64> {
        let [start, end] = self.span;
        linspace(start, end, self.samples)
    }
}

/// Errors that can occur while integrating an orbit.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("integration failed: {0}")]
    Solver(#[from] dopri5::Error),

    #[error("integration stopped after {samples} of {expected} samples")]
    Incomplete { samples: usize, expected: usize },
}

/// Integrates `initial` under `model`, sampling at `config.sample_times()`.
///
/// The initial state is taken to be the state at the start of the span.
/// Solver events are passed to `observer`; an observer that stops the solve
/// early turns the run into [`SimulationError::Incomplete`].
///
/// # Errors
///
/// Returns an error if the solver fails or does not produce every sample.
pub fn simulate<Obs>(
    model: &OrbitModel,
    initial: BodyState,
    config: &SimulationConfig,
    observer: Obs,
) -> Result<Trajectory, SimulationError>
where
    Obs: for<'a> Observer<dopri5::Event<'a, OrbitInput, BodyDerivative>, dopri5::Action>,
{
    let times = config.sample_times();
    let initial = OrbitInput::new(times[0], initial);

    let solution = dopri5::solve(model, &OrbitProblem, initial, &times, config.solver(), observer)?;

    if solution.status != dopri5::Status::Complete {
        return Err(SimulationError::Incomplete {
            samples: solution.samples.len(),
            expected: times.len(),
        });
    }

    let (times, states) = solution
        .samples
        .iter()
        .map(|snapshot| (snapshot.input.time, snapshot.input.state))
        .unzip();

    Ok(Trajectory::new(times, states, solution.stats))
}

/// Integrates without observation.
///
/// # Errors
///
/// Returns the same errors as [`simulate`].
pub fn simulate_unobserved(
    model: &OrbitModel,
    initial: BodyState,
    config: &SimulationConfig,
) -> Result<Trajectory, SimulationError> {
    simulate(model, initial, config, ())
}
