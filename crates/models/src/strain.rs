//! Closed-form gravitational-wave strain of a binary.
//!
//! The strain is modeled as a pure sinusoid with a one-second period,
//!
//! ```text
//! h(t) = (4 G² m₁ m₂ / (c⁴ d)) · sin(2π t)
//! ```
//!
//! which is a visualization placeholder rather than a physical waveform.

use std::{convert::Infallible, f64::consts::TAU};

use gravitas_core::Model;
use uom::si::{f64::Length, f64::Mass, length::meter, mass::kilogram};

use crate::constants::{GRAVITATIONAL_CONSTANT, SPEED_OF_LIGHT};

/// Two masses and the distance to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary {
    pub mass1: Mass,
    pub mass2: Mass,
    pub distance: Length,
}

impl Binary {
    /// Creates a binary from its two masses and its distance.
    #[must_use]
    pub fn new(mass1: Mass, mass2: Mass, distance: Length) -> Self {
        Self {
            mass1,
            mass2,
            distance,
        }
    }

    /// Creates a binary from masses in kilograms and a distance in meters.
    #[must_use]
    pub fn from_si(mass1: f64, mass2: f64, distance: f64) -> Self {
        Self::new(
            Mass::new::<kilogram>(mass1),
            Mass::new::<kilogram>(mass2),
            Length::new::<meter>(distance),
        )
    }

    /// Returns the peak strain `4 G² m₁ m₂ / (c⁴ d)`.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        let m1 = self.mass1.get::<kilogram>();
        let m2 = self.mass2.get::<kilogram>();
        let d = self.distance.get::<meter>();

        4.0 * GRAVITATIONAL_CONSTANT.powi(2) * m1 * m2 / (SPEED_OF_LIGHT.powi(4) * d)
    }
}

/// Strain as a function of time for a fixed binary.
///
/// As a [`Model`], the input is a time in seconds and the output is the
/// strain at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainModel {
    amplitude: f64,
}

impl StrainModel {
    #[must_use]
    pub fn new(binary: &Binary) -> Self {
        Self {
            amplitude: binary.amplitude(),
        }
    }

    /// Returns the peak strain.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Returns the strain at time `t` (s).
    ///
    /// The phase is reduced to a single period before taking the sine, so
    /// whole-second times give exactly zero.
    #[must_use]
    pub fn at(&self, t: f64) -> f64 {
        self.amplitude * (TAU * t.rem_euclid(1.0)).sin()
    }

    /// Returns the strain at each of `times`, in order.
    #[must_use]
    pub fn series(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.at(t)).collect()
    }
}

impl Model for StrainModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, time: &f64) -> Result<f64, Infallible> {
        Ok(self.at(*time))
    }
}

/// Returns the strain of `binary` at each of `times`.
#[must_use]
pub fn strain(binary: &Binary, times: &[f64]) -> Vec<f64> {
    StrainModel::new(binary).series(times)
}
