//! Validated numeric input from an interactive terminal.
//!
//! [`ask`] keeps prompting until the user enters a number inside the given
//! [`Bounds`], printing a diagnostic after each rejected line. Readers and
//! writers are generic so the loop can be driven from tests.

use std::io::{self, BufRead, Write};

use gravitas_models::Binary;
use uom::si::{
    f64::{Length, Mass, Time},
    length::meter,
    mass::kilogram,
    time::second,
};

/// A closed interval of accepted values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies in `[min, max]`.
    ///
    /// NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Accepted body masses (kg).
pub const MASS: Bounds = Bounds::new(1e22, 1e35);

/// Accepted distances between the bodies (m).
pub const DISTANCE: Bounds = Bounds::new(1e6, 1e22);

/// Accepted animation durations (s).
pub const DURATION: Bounds = Bounds::new(1.0, 100.0);

const INVALID_NUMBER: &str =
    "Invalid input. Please enter a numeric value in scientific notation (e.g., 2e10).";

/// Prints `prompt` and reads lines from `input` until one parses to a number
/// within `bounds`.
///
/// Surrounding whitespace is ignored. Lines that do not parse print a hint
/// about numeric notation; numbers outside `bounds` print the accepted range.
///
/// # Errors
///
/// Returns [`io::ErrorKind::UnexpectedEof`] if `input` ends before a valid
/// value is entered, or any error from reading or writing.
pub fn ask<R, W>(input: &mut R, output: &mut W, prompt: &str, bounds: Bounds) -> io::Result<f64>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid value was entered",
            ));
        }

        match line.trim().parse::<f64>() {
            Ok(value) if bounds.contains(value) => return Ok(value),
            Ok(_) => writeln!(
                output,
                "Value must be between {} and {}.",
                display(bounds.min),
                display(bounds.max)
            )?,
            Err(_) => writeln!(output, "{INVALID_NUMBER}")?,
        }
    }
}

/// The binary and animation length chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainRequest {
    pub binary: Binary,
    pub duration: Time,
}

/// Asks for both masses, the distance, and the animation duration, in that
/// order.
///
/// # Errors
///
/// Returns the first error from [`ask`].
pub fn ask_strain_request<R, W>(input: &mut R, output: &mut W) -> io::Result<StrainRequest>
where
    R: BufRead,
    W: Write,
{
    let mass1 = ask(
        input,
        output,
        "Enter the mass of the first body (in kg, e.g., 2e30): ",
        MASS,
    )?;
    let mass2 = ask(
        input,
        output,
        "Enter the mass of the second body (in kg, e.g., 2e30): ",
        MASS,
    )?;
    let distance = ask(
        input,
        output,
        "Enter the distance between the bodies (in meters, e.g., 1e11): ",
        DISTANCE,
    )?;
    let duration = ask(
        input,
        output,
        "Enter the duration of the animation (in seconds): ",
        DURATION,
    )?;

    Ok(StrainRequest {
        binary: Binary::new(
            Mass::new::<kilogram>(mass1),
            Mass::new::<kilogram>(mass2),
            Length::new::<meter>(distance),
        ),
        duration: Time::new::<second>(duration),
    })
}

/// Formats a bound plainly when it is of ordinary size and in scientific
/// notation otherwise.
fn display(value: f64) -> String {
    if value == 0.0 || (1e-3..1e6).contains(&value.abs()) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &str, bounds: Bounds) -> (io::Result<f64>, String) {
        let mut input = lines.as_bytes();
        let mut output = Vec::new();

        let result = ask(&mut input, &mut output, "> ", bounds);

        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reprompts_on_non_numeric_input() {
        let (result, output) = run("heavy\n\n2e30\n", MASS);

        assert_eq!(result.unwrap(), 2e30);
        assert_eq!(output.matches("> ").count(), 3);
        assert_eq!(output.matches(INVALID_NUMBER).count(), 2);
    }

    #[test]
    fn accepts_the_mass_limits() {
        assert_eq!(run("1e22\n", MASS).0.unwrap(), 1e22);
        assert_eq!(run("1e35\n", MASS).0.unwrap(), 1e35);
        assert_eq!(run("  3.5e31  \n", MASS).0.unwrap(), 3.5e31);
    }

    #[test]
    fn accepts_the_distance_and_duration_limits() {
        assert_eq!(run("1e6\n", DISTANCE).0.unwrap(), 1e6);
        assert_eq!(run("1e22\n", DISTANCE).0.unwrap(), 1e22);
        assert_eq!(run("1\n", DURATION).0.unwrap(), 1.0);
        assert_eq!(run("100\n", DURATION).0.unwrap(), 100.0);
    }

    #[test]
    fn distance_range_is_printed_in_scientific_notation() {
        let (result, output) = run("999999\n1.1e22\n1e11\n", DISTANCE);

        assert_eq!(result.unwrap(), 1e11);
        assert_eq!(output.matches("Value must be between 1e6 and 1e22.").count(), 2);
    }

    #[test]
    fn reprompts_outside_the_range() {
        let (result, output) = run("9e21\n2e35\nNaN\n5e30\n", MASS);

        assert_eq!(result.unwrap(), 5e30);
        assert_eq!(output.matches("Value must be between 1e22 and 1e35.").count(), 3);
    }

    #[test]
    fn duration_range_is_printed_plainly() {
        let (result, output) = run("0.5\n100\n", DURATION);

        assert_eq!(result.unwrap(), 100.0);
        assert!(output.contains("Value must be between 1 and 100."));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (result, _) = run("abc\n", MASS);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn strain_request_reads_four_values() {
        let mut input = "2e30\n2e30\n1e11\n10\n".as_bytes();
        let mut output = Vec::new();

        let request = ask_strain_request(&mut input, &mut output).unwrap();

        assert_eq!(request.binary, Binary::from_si(2e30, 2e30, 1e11));
        assert_eq!(request.duration.get::<second>(), 10.0);
    }
}
