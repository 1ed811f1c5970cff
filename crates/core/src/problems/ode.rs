/// Defines an ODE (ordinary differential equation) problem to be solved.
///
/// An ODE problem connects a [`Model`](crate::Model) to a solver that works
/// with plain state vectors. It extracts the `N` state variables from a model
/// input, reads their time derivatives from the model output, and rebuilds a
/// model input from a time and a state vector proposed by the solver.
///
/// The order of the state vector returned by [`state`](Self::state) must match
/// the order of the derivative vector returned by
/// [`derivative`](Self::derivative).
pub trait OdeProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state vector from model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<[f64; N], Self::Error>;

    /// Computes the time derivative of the state from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;

    /// Builds model input at `time` from a state vector.
    ///
    /// `base` is the input the solve started from. Fields that are not part
    /// of the state vector are carried over from it.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the state.
    fn build_input(
        &self,
        base: &Self::Input,
        time: f64,
        state: &[f64; N],
    ) -> Result<Self::Input, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    struct Input {
        time: f64,
        position: f64,
        velocity: f64,
        label: &'static str,
    }

    struct Motion;

    impl OdeProblem<2> for Motion {
        type Input = Input;
        type Output = f64;
        type Error = Infallible;

        fn state(&self, input: &Input) -> Result<[f64; 2], Infallible> {
            Ok([input.position, input.velocity])
        }

        fn derivative(&self, input: &Input, acceleration: &f64) -> Result<[f64; 2], Infallible> {
            Ok([input.velocity, *acceleration])
        }

        fn build_input(&self, base: &Input, time: f64, state: &[f64; 2]) -> Result<Input, Infallible> {
            Ok(Input {
                time,
                position: state[0],
                velocity: state[1],
                ..base.clone()
            })
        }
    }

    #[test]
    fn build_input_keeps_non_state_fields() {
        let base = Input {
            time: 0.0,
            position: 1.0,
            velocity: 2.0,
            label: "cart",
        };

        let rebuilt = Motion.build_input(&base, 5.0, &[3.0, 4.0]).unwrap();

        assert_eq!(rebuilt.label, "cart");
        assert_eq!(Motion.state(&rebuilt).unwrap(), [3.0, 4.0]);
        assert_eq!(Motion.derivative(&rebuilt, &-9.8).unwrap(), [4.0, -9.8]);
    }
}
