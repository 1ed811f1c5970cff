//! Core traits and types shared by the gravitas crates.
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts a model to a fixed-width state vector so generic
//!   ODE solvers can integrate it
//! - [`linspace`] — evenly spaced sample grids

mod grid;
mod model;
mod observer;
mod problems;

pub use grid::linspace;
pub use observer::Observer;
pub use problems::OdeProblem;
pub use {model::Model, model::Snapshot};
