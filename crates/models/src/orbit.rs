//! Corrected inverse-square orbit around a fixed central mass.
//!
//! A body at `(x, y)` with `r = √(x² + y²)` accelerates as
//!
//! ```text
//! ax = −μ x / r³ · (1 + α / r²)
//! ay = −μ y / r³ · (1 + α / r²)
//! ```
//!
//! where `μ = G M` and `α` is a small additive correction. The model is
//! singular at the origin, where it produces non-finite derivatives.

use std::convert::Infallible;

use gravitas_core::{Model, OdeProblem};
use uom::si::{f64::Mass, mass::kilogram};

use crate::{
    body::BodyState,
    constants::{CORRECTION_FACTOR, GRAVITATIONAL_CONSTANT, SOLAR_MASS},
};

/// The acceleration field of a fixed central mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitModel {
    mu: f64,
    alpha: f64,
}

impl OrbitModel {
    /// Creates a model from a gravitational parameter `μ` (m³ s⁻²) and a
    /// correction `α` (m²).
    #[must_use]
    pub fn new(mu: f64, alpha: f64) -> Self {
        Self { mu, alpha }
    }

    /// Creates a model around a central mass.
    #[must_use]
    pub fn around(mass: Mass, alpha: f64) -> Self {
        Self::new(GRAVITATIONAL_CONSTANT * mass.get::<kilogram>(), alpha)
    }

    /// The Sun with the reference correction factor.
    #[must_use]
    pub fn sun() -> Self {
        Self::around(Mass::new::<kilogram>(SOLAR_MASS), CORRECTION_FACTOR)
    }

    #[must_use]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the time derivative of `state`.
    #[must_use]
    pub fn derivative(&self, state: &BodyState) -> BodyDerivative {
        let r = state.radius();
        let scale = -self.mu / r.powi(3) * (1.0 + self.alpha / r.powi(2));

        BodyDerivative {
            vx: state.vx,
            vy: state.vy,
            ax: scale * state.x,
            ay: scale * state.y,
        }
    }
}

impl Default for OrbitModel {
    fn default() -> Self {
        Self::sun()
    }
}

/// A body state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitInput {
    pub time: f64,
    pub state: BodyState,
}

impl OrbitInput {
    #[must_use]
    pub fn new(time: f64, state: BodyState) -> Self {
        Self { time, state }
    }
}

/// Time derivative of a [`BodyState`]: velocity and acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDerivative {
    pub vx: f64,
    pub vy: f64,
    pub ax: f64,
    pub ay: f64,
}

impl BodyDerivative {
    /// Returns the derivative in state order, `[ẋ, ẏ, v̇x, v̇y]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.vx, self.vy, self.ax, self.ay]
    }
}

impl Model for OrbitModel {
    type Input = OrbitInput;
    type Output = BodyDerivative;
    type Error = Infallible;

    fn call(&self, input: &OrbitInput) -> Result<BodyDerivative, Infallible> {
        Ok(self.derivative(&input.state))
    }
}

/// Maps [`OrbitModel`] inputs to the `[x, y, vx, vy]` ODE state.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitProblem;

impl OdeProblem<4> for OrbitProblem {
    type Input = OrbitInput;
    type Output = BodyDerivative;
    type Error = Infallible;

    fn state(&self, input: &OrbitInput) -> Result<[f64; 4], Infallible> {
        Ok(input.state.to_array())
    }

    fn derivative(&self, _input: &OrbitInput, output: &BodyDerivative) -> Result<[f64; 4], Infallible> {
        Ok(output.to_array())
    }

    fn build_input(&self, _base: &OrbitInput, time: f64, state: &[f64; 4]) -> Result<OrbitInput, Infallible> {
        Ok(OrbitInput::new(time, BodyState::from(*state)))
    }
}
