//! Integrates one year of motion for each body in the solar-system table and
//! writes `<Body>_motion.csv` into the current directory.
//!
//! Set `RUST_LOG=debug` (or `trace` for every solver step) for more detail.

use std::error::Error;

use gravitas_apps::logging;
use gravitas_models::{BatchRunner, InitialConditions, batch::output_file_name};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let table = InitialConditions::solar_system();
    let records = BatchRunner::new(".").run_with(&table, |record| {
        println!(
            "Data saved for {} to '{}'.",
            record.body,
            output_file_name(&record.body)
        );
    })?;
    tracing::info!(bodies = records.len(), "batch complete");

    Ok(())
}
