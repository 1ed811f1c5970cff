use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use gravitas_core::{Model, OdeProblem, linspace};

use super::{Action, Config, Error, Event, Status, System, initial_step, solve, solve_unobserved};

/// Oscillator state plus the time it refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Input {
    time: f64,
    position: f64,
    velocity: f64,
}

/// Time derivatives of position and velocity.
#[derive(Debug, Clone, Copy)]
struct Output {
    d_position: f64,
    d_velocity: f64,
}

/// Undamped harmonic oscillator: ẋ = v, v̇ = −ω²x.
struct Oscillator {
    omega: f64,
}

impl Model for Oscillator {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Output, Infallible> {
        Ok(Output {
            d_position: input.velocity,
            d_velocity: -self.omega.powi(2) * input.position,
        })
    }
}

struct OscillatorProblem;

impl OdeProblem<2> for OscillatorProblem {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    fn state(&self, input: &Input) -> Result<[f64; 2], Infallible> {
        Ok([input.position, input.velocity])
    }

    fn derivative(&self, _input: &Input, output: &Output) -> Result<[f64; 2], Infallible> {
        Ok([output.d_position, output.d_velocity])
    }

    fn build_input(&self, _base: &Input, time: f64, state: &[f64; 2]) -> Result<Input, Infallible> {
        Ok(Input {
            time,
            position: state[0],
            velocity: state[1],
        })
    }
}

fn at_rest_displaced() -> Input {
    Input {
        time: 0.0,
        position: 1.0,
        velocity: 0.0,
    }
}

fn tight() -> Config {
    Config::new(1e-9, 1e-12, 100_000).unwrap()
}

#[test]
fn tracks_analytical_oscillator() {
    let model = Oscillator { omega: 2.0 };
    let times = linspace(0.0, 10.0, 201);

    let solution = solve_unobserved(&model, &OscillatorProblem, at_rest_displaced(), &times, &tight())
        .expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.samples.len(), times.len());
    for (snapshot, &t) in solution.samples.iter().zip(&times) {
        assert_eq!(snapshot.input.time, t);
        assert_relative_eq!(snapshot.input.position, (2.0 * t).cos(), epsilon = 1e-6);
        assert_relative_eq!(snapshot.input.velocity, -2.0 * (2.0 * t).sin(), epsilon = 1e-6);
    }
}

#[test]
fn initial_step_scales_with_the_dynamics() {
    let initial = at_rest_displaced();
    let config = Config::default();
    let y = [1.0, 0.0];

    let step_for = |omega: f64| {
        let model = Oscillator { omega };
        let mut system = System {
            model: &model,
            problem: &OscillatorProblem,
            base: &initial,
            evaluations: 0,
        };
        let f = system.derivative(0.0, &y).unwrap();
        let h = initial_step(&mut system, 0.0, &y, &f, &config).unwrap();
        assert_eq!(system.evaluations, 2);
        h
    };

    let slow = step_for(1.0);
    let fast = step_for(100.0);

    assert!(slow.is_finite() && slow > 0.0);
    assert!(fast > 0.0 && fast < slow);
}

#[test]
fn samples_hit_requested_times_exactly() {
    // One full period over a year-long span.
    let model = Oscillator {
        omega: std::f64::consts::TAU / 3.154e7,
    };
    let times = linspace(0.0, 3.154e7, 1000);

    let solution = solve_unobserved(
        &model,
        &OscillatorProblem,
        at_rest_displaced(),
        &times,
        &Config::new(1e-6, 1e-6, 100_000).unwrap(),
    )
    .expect("should integrate");

    let sampled: Vec<f64> = solution.samples.iter().map(|s| s.input.time).collect();
    assert_eq!(sampled, times);
    assert_eq!(sampled[0], 0.0);
    assert_eq!(sampled[999], 3.154e7);
}

#[test]
fn sparse_samples_do_not_limit_accuracy() {
    let model = Oscillator { omega: 1.0 };
    let times = [0.0, 1.234, 7.5];

    let solution = solve_unobserved(&model, &OscillatorProblem, at_rest_displaced(), &times, &tight())
        .expect("should integrate");

    assert_eq!(solution.samples.len(), 3);
    assert!(solution.stats.accepted > 2);
    for (snapshot, t) in solution.samples.iter().zip(times) {
        assert_relative_eq!(snapshot.input.position, t.cos(), epsilon = 1e-7);
    }
}

#[test]
fn single_sample_returns_initial() {
    let initial = at_rest_displaced();

    let solution = solve_unobserved(
        &Oscillator { omega: 1.0 },
        &OscillatorProblem,
        initial,
        &[0.0],
        &Config::default(),
    )
    .expect("should return initial");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.samples.len(), 1);
    assert_eq!(solution.samples[0].input, initial);
    assert_eq!(solution.stats.accepted, 0);
}

#[test]
fn rejects_bad_sample_times() {
    let model = Oscillator { omega: 1.0 };
    let config = Config::default();

    let empty = solve_unobserved(&model, &OscillatorProblem, at_rest_displaced(), &[], &config);
    assert!(matches!(empty, Err(Error::NoSampleTimes)));

    let unordered = solve_unobserved(
        &model,
        &OscillatorProblem,
        at_rest_displaced(),
        &[0.0, 2.0, 1.0],
        &config,
    );
    assert!(matches!(unordered, Err(Error::InvalidSampleTimes { index: 2 })));

    let repeated = solve_unobserved(
        &model,
        &OscillatorProblem,
        at_rest_displaced(),
        &[0.0, 0.0],
        &config,
    );
    assert!(matches!(repeated, Err(Error::InvalidSampleTimes { index: 1 })));

    let nan = solve_unobserved(
        &model,
        &OscillatorProblem,
        at_rest_displaced(),
        &[0.0, f64::NAN],
        &config,
    );
    assert!(matches!(nan, Err(Error::InvalidSampleTimes { index: 1 })));
}

#[test]
fn observer_can_stop_early() {
    let model = Oscillator { omega: 1.0 };
    let times = linspace(0.0, 10.0, 11);

    let solution = solve(
        &model,
        &OscillatorProblem,
        at_rest_displaced(),
        &times,
        &Config::default(),
        |event: &Event<'_, Input, Output>| match event {
            Event::Sampled { index: 4, .. } => Some(Action::StopEarly),
            _ => None,
        },
    )
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.samples.len(), 5);
}

#[test]
fn observer_sees_every_sample_in_order() {
    let model = Oscillator { omega: 1.0 };
    let times = linspace(0.0, 5.0, 6);
    let mut indices = Vec::new();
    let mut accepted = 0;

    let solution = solve(
        &model,
        &OscillatorProblem,
        at_rest_displaced(),
        &times,
        &Config::default(),
        |event: &Event<'_, Input, Output>| {
            match event {
                Event::Sampled { index, .. } => indices.push(*index),
                Event::StepAccepted { .. } => accepted += 1,
                Event::StepRejected { .. } => {}
            }
            None
        },
    )
    .expect("should solve");

    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(accepted, solution.stats.accepted);
}

#[test]
fn step_budget_is_enforced() {
    let model = Oscillator { omega: 1.0 };
    let times = linspace(0.0, 100.0, 2);

    let result = solve_unobserved(
        &model,
        &OscillatorProblem,
        at_rest_displaced(),
        &times,
        &Config::new(1e-10, 1e-12, 5).unwrap(),
    );

    assert!(matches!(result, Err(Error::MaxStepsExceeded { max_steps: 5, .. })));
}

/// Model whose derivative blows up at the origin.
struct InverseSquare;

impl Model for InverseSquare {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Output, Infallible> {
        Ok(Output {
            d_position: input.velocity,
            d_velocity: -input.position / input.position.abs().powi(3),
        })
    }
}

#[test]
fn non_finite_derivative_is_an_error() {
    let origin = Input {
        time: 0.0,
        position: 0.0,
        velocity: 0.0,
    };

    let result = solve_unobserved(
        &InverseSquare,
        &OscillatorProblem,
        origin,
        &[0.0, 1.0],
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::NonFinite { time }) if time == 0.0));
}

#[derive(Debug, Error)]
#[error("position out of range: {0}")]
struct OutOfRange(f64);

/// Model that refuses positions below a floor.
struct Guarded;

impl Model for Guarded {
    type Input = Input;
    type Output = Output;
    type Error = OutOfRange;

    fn call(&self, input: &Input) -> Result<Output, OutOfRange> {
        if input.position < 0.5 {
            return Err(OutOfRange(input.position));
        }
        Ok(Output {
            d_position: input.velocity,
            d_velocity: -input.position,
        })
    }
}

#[test]
fn model_errors_propagate() {
    let times = linspace(0.0, 3.0, 4);

    let result = solve_unobserved(&Guarded, &OscillatorProblem, at_rest_displaced(), &times, &Config::default());

    let Err(Error::Model(source)) = result else {
        panic!("expected a model error");
    };
    assert!(source.to_string().starts_with("position out of range"));
}
