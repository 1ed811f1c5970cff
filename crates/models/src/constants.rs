//! Physical constants and reference parameters, in SI units.

/// Newtonian constant of gravitation (m³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Speed of light in vacuum (m s⁻¹).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Mass of the Sun (kg).
pub const SOLAR_MASS: f64 = 1.989e30;

/// Ad hoc correction factor on the inverse-square law (m²).
///
/// A placeholder standing in for relativistic effects, not a post-Newtonian
/// coefficient.
pub const CORRECTION_FACTOR: f64 = 1.1e-8;

/// Length of the simulated year (s).
pub const YEAR: f64 = 3.154e7;

/// Number of samples in each trajectory.
pub const SAMPLES: usize = 1000;
