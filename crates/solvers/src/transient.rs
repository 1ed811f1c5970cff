//! Solvers for transient problems — integrating an ODE forward in time.
//!
//! An [`OdeProblem`] maps a model input to a state vector and the model output
//! to that state's time derivative. Solvers in this module advance the state
//! and report it at caller-chosen sample times.
//!
//! # Solvers
//!
//! - [`dopri5`] — adaptive Dormand–Prince 5(4) with dense output
//!
//! [`OdeProblem`]: gravitas_core::OdeProblem

pub mod dopri5;
