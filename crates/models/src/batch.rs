//! Integrates every body in a table and saves one CSV per body.

use std::path::{Path, PathBuf};

use gravitas_observers::TraceObserver;
use gravitas_solvers::transient::dopri5::Stats;
use thiserror::Error;

use crate::{
    body::{Body, InitialConditions},
    orbit::OrbitModel,
    simulate::{SimulationConfig, SimulationError, simulate},
    trajectory::TrajectoryError,
};

/// Returns the file name used for a body's trajectory, `<body>_motion.csv`.
#[must_use]
pub fn output_file_name(body: &str) -> String {
    format!("{body}_motion.csv")
}

/// A body whose trajectory was integrated and saved.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub body: String,
    pub path: PathBuf,
    pub samples: usize,
    pub stats: Stats,
}

/// Errors that halt a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to integrate {body}")]
    Simulation {
        body: String,
        #[source]
        source: SimulationError,
    },

    #[error("failed to write {body} to {}", .path.display())]
    Write {
        body: String,
        path: PathBuf,
        #[source]
        source: TrajectoryError,
    },
}

/// Runs the orbit integration for every body in a table.
///
/// Bodies are processed in table order. The first failure stops the batch;
/// files written for earlier bodies are left in place.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    output_dir: PathBuf,
    model: OrbitModel,
    config: SimulationConfig,
}

impl BatchRunner {
    /// Creates a runner that writes into `output_dir` using the Sun model and
    /// the default simulation config.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            model: OrbitModel::sun(),
            config: SimulationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: OrbitModel) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Runs the batch over `table`.
    ///
    /// # Errors
    ///
    /// Returns the first integration or write failure.
    pub fn run(&self, table: &InitialConditions) -> Result<Vec<BatchRecord>, BatchError> {
        self.run_with(table, |_| {})
    }

    /// Runs the batch, calling `on_complete` after each body's file is saved.
    ///
    /// # Errors
    ///
    /// Returns the first integration or write failure.
    pub fn run_with<F>(
        &self,
        table: &InitialConditions,
        mut on_complete: F,
    ) -> Result<Vec<BatchRecord>, BatchError>
    where
        F: FnMut(&BatchRecord),
    {
        let mut records = Vec::with_capacity(table.len());

        for body in table {
            let record = self.run_body(body).inspect_err(|err| {
                tracing::error!(body = body.name(), error = %err, "batch halted");
            })?;

            tracing::info!(
                body = %record.body,
                path = %record.path.display(),
                samples = record.samples,
                evaluations = record.stats.evaluations,
                accepted = record.stats.accepted,
                rejected = record.stats.rejected,
                "trajectory saved"
            );
            on_complete(&record);
            records.push(record);
        }

        Ok(records)
    }

    fn run_body(&self, body: &Body) -> Result<BatchRecord, BatchError> {
        let mut observer = TraceObserver::new(body.name());

        let trajectory = simulate(&self.model, *body.state(), &self.config, &mut observer)
            .map_err(|source| BatchError::Simulation {
                body: body.name().to_owned(),
                source,
            })?;
        tracing::debug!(body = body.name(), events = observer.events(), "integration finished");

        let path = self.output_dir.join(output_file_name(body.name()));
        trajectory.save(&path).map_err(|source| BatchError::Write {
            body: body.name().to_owned(),
            path: path.clone(),
            source,
        })?;

        Ok(BatchRecord {
            body: body.name().to_owned(),
            path,
            samples: trajectory.len(),
            stats: trajectory.stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_the_body() {
        assert_eq!(output_file_name("Earth"), "Earth_motion.csv");
        assert_eq!(output_file_name("Pluto"), "Pluto_motion.csv");
    }

    #[test]
    fn builder_overrides_defaults() {
        let model = OrbitModel::new(1.0, 0.0);
        let runner = BatchRunner::new("out").with_model(model);

        assert_eq!(runner.output_dir(), Path::new("out"));
        assert_eq!(runner.model, model);
        assert_eq!(runner.config, SimulationConfig::default());
    }
}
