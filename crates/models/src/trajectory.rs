//! Sampled trajectories and their CSV form.

use std::{fs::File, io::Write, path::Path};

use gravitas_solvers::transient::dopri5::Stats;
use serde::Serialize;
use thiserror::Error;

use crate::body::BodyState;

/// Column names of a trajectory CSV, in order.
pub const HEADER: [&str; 5] = ["time", "x", "y", "vx", "vy"];

/// One sampled point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// A body's states at strictly increasing sample times.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<BodyState>,
    stats: Stats,
}

/// Errors that can occur when writing a trajectory.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Trajectory {
    pub(crate) fn new(times: Vec<f64>, states: Vec<BodyState>, stats: Stats) -> Self {
        debug_assert_eq!(times.len(), states.len());
        Self {
            times,
            states,
            stats,
        }
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn states(&self) -> &[BodyState] {
        &self.states
    }

    /// Returns the solver work that produced this trajectory.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over the samples as flat rows.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.times.iter().zip(&self.states).map(|(&time, state)| Row {
            time,
            x: state.x,
            y: state.y,
            vx: state.vx,
            vy: state.vy,
        })
    }

    /// Writes the trajectory as CSV: a `time,x,y,vx,vy` header, then one row
    /// per sample.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TrajectoryError> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        // Written by hand so an empty trajectory still gets a header.
        wtr.write_record(HEADER)?;
        for row in self.rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Creates (or truncates) the file at `path` and writes the trajectory to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TrajectoryError> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}
