//! Gravitational models and the orbit pipeline built on them.
//!
//! - [`strain`] — closed-form gravitational-wave strain of a binary
//! - [`orbit`] — corrected inverse-square orbit model and its ODE problem
//! - [`body`] — body states and the initial-condition table
//! - [`simulate`] — integrates one body over a sampled span
//! - [`trajectory`] — sampled trajectories and their CSV form
//! - [`batch`] — integrates and saves every body in a table
//!
//! Physical constants live in [`constants`]; everything is in SI units.

pub mod batch;
pub mod body;
pub mod constants;
pub mod orbit;
pub mod simulate;
pub mod strain;
pub mod trajectory;

pub use batch::{BatchError, BatchRecord, BatchRunner};
pub use body::{Body, BodyState, InitialConditions, TableError};
pub use orbit::{BodyDerivative, OrbitInput, OrbitModel, OrbitProblem};
pub use simulate::{SimulationConfig, SimulationConfigError, SimulationError, simulate, simulate_unobserved};
pub use strain::{Binary, StrainModel, strain};
pub use trajectory::{Row, Trajectory, TrajectoryError};
