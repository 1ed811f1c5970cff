//! Numerical solvers for gravitas models.
//!
//! Solvers are free functions that drive a [`Model`] through a problem trait
//! from `gravitas-core`, report progress to an [`Observer`], and return a
//! solution with a termination [`Status`](transient::dopri5::Status).
//!
//! # Modules
//!
//! - [`transient`] — time integration of [`OdeProblem`]s
//!
//! [`Model`]: gravitas_core::Model
//! [`Observer`]: gravitas_core::Observer
//! [`OdeProblem`]: gravitas_core::OdeProblem

pub mod transient;
