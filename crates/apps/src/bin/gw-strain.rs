//! Animates the gravitational-wave strain of a user-described binary.
//!
//! # Usage
//!
//! ```text
//! cargo run -p gravitas-apps --features plot --bin gw-strain
//! ```
//!
//! The program asks for two masses, their distance, and an animation
//! duration, then plays the strain over 1000 evenly spaced times. Each frame
//! recomputes the strain over a longer prefix of the time grid.

use std::{error::Error, io};

use gravitas_apps::{logging, prompt};
use gravitas_core::linspace;
use gravitas_models::{StrainModel, constants::SAMPLES};
use gravitas_observers::{Animation, ShowConfig};
use uom::si::time::second;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let request = prompt::ask_strain_request(&mut io::stdin().lock(), &mut io::stdout())?;
    let duration = request.duration.get::<second>();
    let model = StrainModel::new(&request.binary);
    tracing::info!(amplitude = model.amplitude(), duration, "animating strain");

    let times = linspace(0.0, duration, SAMPLES);
    let animation = Animation::new(times, move |prefix: &[f64]| model.series(prefix));

    animation.show(
        ShowConfig::new()
            .title("Gravitational Wave Animation")
            .x_label("Time (s)")
            .y_label("Gravitational Wave Strain"),
    )?;

    Ok(())
}
