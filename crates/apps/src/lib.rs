//! Command-line front ends for the gravitas models.
//!
//! - [`prompt`] — validated numeric input from an interactive terminal
//! - [`logging`] — `tracing` subscriber setup shared by the binaries
//!
//! The binaries are `gw-strain` (requires the `plot` feature), which animates
//! the strain of a user-described binary, and `planetary-motion`, which
//! integrates the solar-system table and writes one CSV per body.

pub mod logging;
pub mod prompt;
