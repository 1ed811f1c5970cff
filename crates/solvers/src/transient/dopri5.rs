//! Adaptive Dormand–Prince 5(4) solver for ODE problems.
//!
//! Each step advances the state with the fifth-order solution and estimates
//! the local error with the embedded fourth-order solution. The step size is
//! adapted to keep that error within [`Config`] tolerances, and the state at
//! each requested sample time is evaluated with the method's continuous
//! extension, so sample spacing never constrains the step size.
//!
//! # Example
//!
//! ```ignore
//! use gravitas_core::linspace;
//! use gravitas_solvers::transient::dopri5;
//!
//! let times = linspace(0.0, 10.0, 101);
//! let solution = dopri5::solve_unobserved(&model, &problem, initial, &times, &dopri5::Config::default())?;
//!
//! for snapshot in &solution.samples {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;
mod tableau;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Stats, Status};

use gravitas_core::{Model, Observer, OdeProblem, Snapshot};

use tableau::{ERROR_ORDER, rms_norm};

/// Upper bound on step growth after an accepted step.
const MAX_FACTOR: f64 = 10.0;

/// Lower bound on step shrinkage after a rejected step.
const MIN_FACTOR: f64 = 0.2;

/// Safety factor applied to the optimal step-size estimate.
const SAFETY: f64 = 0.9;

/// Integrates an ODE problem, sampling the solution at `times`.
///
/// The initial input is taken to be the state at `times[0]`; integration runs
/// forward to the last sample time.
///
/// # Algorithm
///
/// 1. Record the initial input as sample 0.
/// 2. Choose an initial step size from the scale of the state and its first
///    two derivative evaluations.
/// 3. Repeatedly:
///    - Clamp the step so it ends exactly on the last sample time.
///    - Take a trial step and compute the RMS of the scaled error estimate.
///    - If the error is below one, accept the step, record every sample time
///      inside it via dense output, and grow the step; otherwise shrink it
///      and retry.
/// 4. Return the solution once the last sample is recorded.
///
/// # Observer
///
/// The observer receives an [`Event`] for every sample and every attempted
/// step, and may return [`Action::StopEarly`] to end the solve with the
/// samples recorded so far.
///
/// # Errors
///
/// Returns an error if `times` is empty, non-finite, or not strictly
/// increasing; if the model or problem fails; if a derivative or error
/// estimate is not finite; if the step size underflows; or if the step budget
/// in `config` is exhausted.
pub fn solve<const N: usize, M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    times: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    validate_times(times)?;
    let t_start = times[0];
    let t_end = times[times.len() - 1];

    let mut samples = Vec::with_capacity(times.len());
    let mut system = System {
        model,
        problem,
        base: &initial,
        evaluations: 0,
    };

    let mut y = problem.state(&initial).map_err(Error::problem)?;
    let mut f = system.derivative(t_start, &y)?;

    let initial_output = model.call(&initial).map_err(Error::model)?;
    samples.push(Snapshot::new(initial.clone(), initial_output));
    let action = observer.observe(&Event::Sampled {
        index: 0,
        time: t_start,
        snapshot: &samples[0],
    });
    if let Some(Action::StopEarly) = action {
        return Ok(system.finish(Status::StoppedByObserver, samples, 0, 0));
    }

    let mut accepted = 0;
    let mut rejected = 0;
    let mut t = t_start;
    let mut h_abs = if times.len() > 1 {
        initial_step(&mut system, t_start, &y, &f, config)?
    } else {
        0.0
    };
    let mut step_rejected = false;
    let mut next = 1;

    while next < times.len() {
        if accepted + rejected >= config.max_steps() {
            return Err(Error::MaxStepsExceeded {
                max_steps: config.max_steps(),
                time: t,
            });
        }

        let min_step = 10.0 * (t.abs() * f64::EPSILON).max(f64::MIN_POSITIVE);
        if h_abs < min_step {
            return Err(Error::StepSizeTooSmall {
                time: t,
                step_size: h_abs,
            });
        }

        let (t_new, h) = if t + h_abs >= t_end {
            (t_end, t_end - t)
        } else {
            (t + h_abs, h_abs)
        };

        let trial = tableau::step(|s, state| system.derivative(s, state), t, &y, &f, h, t_new)?;

        let scaled: [f64; N] = std::array::from_fn(|i| {
            let scale = config.abs_tol() + config.rel_tol() * y[i].abs().max(trial.y[i].abs());
            trial.error[i] / scale
        });
        let error_norm = rms_norm(&scaled);
        if !error_norm.is_finite() {
            return Err(Error::NonFinite { time: t });
        }

        if error_norm >= 1.0 {
            rejected += 1;
            step_rejected = true;
            h_abs = h * (SAFETY * error_norm.powf(-1.0 / f64::from(ERROR_ORDER + 1))).max(MIN_FACTOR);

            let action = observer.observe(&Event::StepRejected {
                time: t,
                step_size: h,
                error_norm,
            });
            if let Some(Action::StopEarly) = action {
                return Ok(system.finish(Status::StoppedByObserver, samples, accepted, rejected));
            }
            continue;
        }

        accepted += 1;
        let mut factor = if error_norm == 0.0 {
            MAX_FACTOR
        } else {
            (SAFETY * error_norm.powf(-1.0 / f64::from(ERROR_ORDER + 1))).min(MAX_FACTOR)
        };
        if step_rejected {
            factor = factor.min(1.0);
        }
        step_rejected = false;

        let action = observer.observe(&Event::StepAccepted {
            time: t,
            step_size: h,
            error_norm,
        });
        if let Some(Action::StopEarly) = action {
            return Ok(system.finish(Status::StoppedByObserver, samples, accepted, rejected));
        }

        while next < times.len() && times[next] <= t_new {
            let time = times[next];
            let state = if time == t_new {
                trial.y
            } else {
                tableau::interpolate(&y, &trial, h, (time - t) / h)
            };

            let input = problem
                .build_input(&initial, time, &state)
                .map_err(Error::problem)?;
            let output = model.call(&input).map_err(Error::model)?;
            samples.push(Snapshot::new(input, output));

            let action = observer.observe(&Event::Sampled {
                index: next,
                time,
                snapshot: &samples[next],
            });
            if let Some(Action::StopEarly) = action {
                return Ok(system.finish(Status::StoppedByObserver, samples, accepted, rejected));
            }
            next += 1;
        }

        t = t_new;
        y = trial.y;
        f = trial.end_derivative();
        h_abs = h * factor;
    }

    Ok(system.finish(Status::Complete, samples, accepted, rejected))
}

/// Integrates an ODE problem without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<const N: usize, M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    times: &[f64],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial, times, config, ())
}

/// Evaluates the state derivative by rebuilding a model input and calling the model.
struct System<'a, M, P>
where
    M: Model,
{
    model: &'a M,
    problem: &'a P,
    base: &'a M::Input,
    evaluations: usize,
}

impl<M, P> System<'_, M, P>
where
    M: Model,
{
    fn derivative<const N: usize>(&mut self, time: f64, state: &[f64; N]) -> Result<[f64; N], Error>
    where
        P: OdeProblem<N, Input = M::Input, Output = M::Output>,
    {
        let input = self
            .problem
            .build_input(self.base, time, state)
            .map_err(Error::problem)?;
        let output = self.model.call(&input).map_err(Error::model)?;
        let derivative = self
            .problem
            .derivative(&input, &output)
            .map_err(Error::problem)?;
        self.evaluations += 1;

        if derivative.iter().all(|d| d.is_finite()) {
            Ok(derivative)
        } else {
            Err(Error::NonFinite { time })
        }
    }

    fn finish(
        &self,
        status: Status,
        samples: Vec<Snapshot<M::Input, M::Output>>,
        accepted: usize,
        rejected: usize,
    ) -> Solution<M::Input, M::Output> {
        Solution {
            status,
            samples,
            stats: Stats {
                evaluations: self.evaluations,
                accepted,
                rejected,
            },
        }
    }
}

fn validate_times(times: &[f64]) -> Result<(), Error> {
    if times.is_empty() {
        return Err(Error::NoSampleTimes);
    }
    if let Some(index) = times.iter().position(|t| !t.is_finite()) {
        return Err(Error::InvalidSampleTimes { index });
    }
    if let Some(index) = times.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(Error::InvalidSampleTimes { index: index + 1 });
    }
    Ok(())
}

/// Estimates a first step size from the state scale and a probe derivative.
fn initial_step<const N: usize, M, P>(
    system: &mut System<'_, M, P>,
    t: f64,
    y: &[f64; N],
    f: &[f64; N],
    config: &Config,
) -> Result<f64, Error>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
{
    let scale: [f64; N] = std::array::from_fn(|i| config.abs_tol() + y[i].abs() * config.rel_tol());
    let d0 = rms_norm::<N>(&std::array::from_fn(|i| y[i] / scale[i]));
    let d1 = rms_norm::<N>(&std::array::from_fn(|i| f[i] / scale[i]));

    let h0 = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    };

    let y1: [f64; N] = std::array::from_fn(|i| y[i] + h0 * f[i]);
    let f1 = system.derivative(t + h0, &y1)?;
    let d2 = rms_norm::<N>(&std::array::from_fn(|i| (f1[i] - f[i]) / scale[i])) / h0;

    let h1 = if d1 <= 1e-15 && d2 <= 1e-15 {
        (h0 * 1e-3).max(1e-6)
    } else {
        (0.01 / d1.max(d2)).powf(1.0 / f64::from(ERROR_ORDER + 1))
    };

    Ok((100.0 * h0).min(h1))
}
