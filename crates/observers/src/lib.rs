//! Reusable observers for gravitas solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`CanStopEarly`])
//! - [`TraceObserver`] — forwards solver events to `tracing`
//!
//! # Features
//!
//! - `plot` — Enables [`Animation`] for replaying a series frame by frame in an
//!   egui window. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

#[cfg(feature = "plot")]
mod plot;

pub use trace::TraceObserver;

#[cfg(feature = "plot")]
pub use plot::{Animation, ShowConfig};
