//! Body states and the table of initial conditions.

use std::collections::HashSet;

use thiserror::Error;

/// Position and velocity of a body in the orbital plane (m, m/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl BodyState {
    #[must_use]
    pub const fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy }
    }

    /// Returns the distance from the origin.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the state as `[x, y, vx, vy]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.vx, self.vy]
    }
}

impl From<[f64; 4]> for BodyState {
    fn from([x, y, vx, vy]: [f64; 4]) -> Self {
        Self { x, y, vx, vy }
    }
}

impl From<BodyState> for [f64; 4] {
    fn from(state: BodyState) -> Self {
        state.to_array()
    }
}

/// A named body and its state at t = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    state: BodyState,
}

impl Body {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn state(&self) -> &BodyState {
        &self.state
    }
}

/// Errors that can occur when building an [`InitialConditions`] table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("invalid body name {0:?}: names must be non-empty and contain no path separators")]
    InvalidName(String),
}

/// Reference initial conditions `[x, y, vx, vy]` at perihelion-like positions
/// on the x axis.
const SOLAR_SYSTEM: [(&str, BodyState); 9] = [
    ("Mercury", BodyState::new(5.79e10, 0.0, 0.0, 4.79e4)),
    ("Venus", BodyState::new(1.082e11, 0.0, 0.0, 3.50e4)),
    ("Earth", BodyState::new(1.4710e11, 0.0, 0.0, 3.0287e4)),
    ("Mars", BodyState::new(2.279e11, 0.0, 0.0, 2.41e4)),
    ("Jupiter", BodyState::new(7.785e11, 0.0, 0.0, 1.307e4)),
    ("Saturn", BodyState::new(1.4335e12, 0.0, 0.0, 9.69e3)),
    ("Uranus", BodyState::new(2.8725e12, 0.0, 0.0, 6.81e3)),
    ("Neptune", BodyState::new(4.4951e12, 0.0, 0.0, 5.43e3)),
    ("Pluto", BodyState::new(5.9064e12, 0.0, 0.0, 4.74e3)),
];

/// An ordered, immutable table of named initial conditions.
///
/// Names are unique and usable as file name stems. Iteration follows the
/// order the bodies were given in.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialConditions {
    bodies: Vec<Body>,
}

impl InitialConditions {
    /// Builds a table from `(name, state)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a name repeats, is empty, or contains a path
    /// separator.
    pub fn new<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, BodyState)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut bodies = Vec::new();

        for (name, state) in entries {
            let name = name.into();
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(TableError::InvalidName(name));
            }
            if !seen.insert(name.clone()) {
                return Err(TableError::DuplicateName(name));
            }
            bodies.push(Body { name, state });
        }

        Ok(Self { bodies })
    }

    /// Returns the eight planets and Pluto around the Sun.
    #[must_use]
    pub fn solar_system() -> Self {
        Self {
            bodies: SOLAR_SYSTEM
                .iter()
                .map(|&(name, state)| Body {
                    name: name.to_owned(),
                    state,
                })
                .collect(),
        }
    }

    /// Iterates over the bodies in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Returns the state of the named body.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BodyState> {
        self.bodies
            .iter()
            .find(|body| body.name == name)
            .map(|body| &body.state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl<'a> IntoIterator for &'a InitialConditions {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
