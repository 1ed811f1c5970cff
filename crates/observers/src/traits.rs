//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and attached to any solver whose events and
//! actions implement them.
//!
//! # Example
//!
//! ```rust
//! use gravitas_core::Observer;
//! use gravitas_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops a transient solve once it passes a deadline.
//! struct Deadline(f64);
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() > self.0).then(A::stop_early)
//!     }
//! }
//! ```

use gravitas_solvers::transient::dopri5;

/// An event that refers to a point in simulated time.
pub trait HasTime {
    /// Returns the simulated time of this event.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasTime for dopri5::Event<'_, I, O> {
    fn time(&self) -> f64 {
        dopri5::Event::time(self)
    }
}

impl CanStopEarly for dopri5::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
