//! Dormand–Prince 5(4) coefficients, single-step evaluation, and dense output.
//!
//! The seventh stage is the derivative at the end of the step (FSAL), so an
//! accepted step hands its last stage to the next step as the first.

use super::Error;

/// Number of stages used to advance the solution.
const STAGES: usize = 6;

/// Nodes.
const C: [f64; STAGES] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0];

/// Runge–Kutta matrix, lower triangular.
const A: [[f64; STAGES - 1]; STAGES] = [
    [0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0],
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0],
    [
        19372.0 / 6561.0,
        -25360.0 / 2187.0,
        64448.0 / 6561.0,
        -212.0 / 729.0,
        0.0,
    ],
    [
        9017.0 / 3168.0,
        -355.0 / 33.0,
        46732.0 / 5247.0,
        49.0 / 176.0,
        -5103.0 / 18656.0,
    ],
];

/// Fifth-order weights.
const B: [f64; STAGES] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
];

/// Difference between the embedded fourth-order and the fifth-order weights.
const E: [f64; STAGES + 1] = [
    -71.0 / 57600.0,
    0.0,
    71.0 / 16695.0,
    -71.0 / 1920.0,
    17253.0 / 339_200.0,
    -22.0 / 525.0,
    1.0 / 40.0,
];

/// Continuous extension: row `i` holds the coefficients of `θ, θ², θ³, θ⁴`
/// applied to stage `i`.
const P: [[f64; 4]; STAGES + 1] = [
    [
        1.0,
        -8_048_581_381.0 / 2_820_520_608.0,
        8_663_915_743.0 / 2_820_520_608.0,
        -12_715_105_075.0 / 11_282_082_432.0,
    ],
    [0.0, 0.0, 0.0, 0.0],
    [
        0.0,
        131_558_114_200.0 / 32_700_410_799.0,
        -68_118_460_800.0 / 10_900_136_933.0,
        87_487_479_700.0 / 32_700_410_799.0,
    ],
    [
        0.0,
        -1_754_552_775.0 / 470_086_768.0,
        14_199_869_525.0 / 1_410_260_304.0,
        -10_690_763_975.0 / 1_880_347_072.0,
    ],
    [
        0.0,
        127_303_824_393.0 / 49_829_197_408.0,
        -318_862_633_887.0 / 49_829_197_408.0,
        701_980_252_875.0 / 199_316_789_632.0,
    ],
    [
        0.0,
        -282_668_133.0 / 205_662_961.0,
        2_019_193_451.0 / 616_988_883.0,
        -1_453_857_185.0 / 822_651_844.0,
    ],
    [
        0.0,
        40_617_522.0 / 29_380_423.0,
        -110_615_467.0 / 29_380_423.0,
        69_997_945.0 / 29_380_423.0,
    ],
];

/// Order of the embedded error estimator, used by the step-size controller.
pub(super) const ERROR_ORDER: i32 = 4;

/// A trial step and everything needed to accept it.
pub(super) struct Step<const N: usize> {
    /// Fifth-order solution at the end of the step.
    pub y: [f64; N],

    /// All seven stages; the last is the derivative at the end of the step.
    pub k: [[f64; N]; STAGES + 1],

    /// Local error estimate.
    pub error: [f64; N],
}

impl<const N: usize> Step<N> {
    /// Returns the derivative at the end of the step.
    pub fn end_derivative(&self) -> [f64; N] {
        self.k[STAGES]
    }
}

/// Takes one trial step of size `h` from `(t, y)` whose derivative is `f`.
///
/// `t_end` is the time at the end of the step. It is passed separately so the
/// final stage is evaluated at exactly the time the caller will record.
pub(super) fn step<const N: usize>(
    mut derivative: impl FnMut(f64, &[f64; N]) -> Result<[f64; N], Error>,
    t: f64,
    y: &[f64; N],
    f: &[f64; N],
    h: f64,
    t_end: f64,
) -> Result<Step<N>, Error> {
    let mut k = [[0.0; N]; STAGES + 1];
    k[0] = *f;

    for s in 1..STAGES {
        let mut y_stage = *y;
        for (i, value) in y_stage.iter_mut().enumerate() {
            let increment: f64 = (0..s).map(|j| A[s][j] * k[j][i]).sum();
            *value += h * increment;
        }
        k[s] = derivative(t + C[s] * h, &y_stage)?;
    }

    let mut y_new = *y;
    for (i, value) in y_new.iter_mut().enumerate() {
        let increment: f64 = (0..STAGES).map(|j| B[j] * k[j][i]).sum();
        *value += h * increment;
    }
    k[STAGES] = derivative(t_end, &y_new)?;

    let mut error = [0.0; N];
    for (i, value) in error.iter_mut().enumerate() {
        let weighted: f64 = (0..=STAGES).map(|j| E[j] * k[j][i]).sum();
        *value = h * weighted;
    }

    Ok(Step { y: y_new, k, error })
}

/// Evaluates the continuous extension of an accepted step at fraction
/// `theta` (0 at the start of the step, 1 at its end).
pub(super) fn interpolate<const N: usize>(
    y_old: &[f64; N],
    step: &Step<N>,
    h: f64,
    theta: f64,
) -> [f64; N] {
    let powers = [theta, theta.powi(2), theta.powi(3), theta.powi(4)];
    let weights: [f64; STAGES + 1] = std::array::from_fn(|j| {
        P[j].iter().zip(powers).map(|(p, power)| p * power).sum()
    });

    let mut y = *y_old;
    for (i, value) in y.iter_mut().enumerate() {
        let increment: f64 = weights.iter().zip(&step.k).map(|(w, k)| w * k[i]).sum();
        *value += h * increment;
    }
    y
}

/// Root-mean-square norm of a vector.
pub(super) fn rms_norm<const N: usize>(values: &[f64; N]) -> f64 {
    if N == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = N as f64;
    (values.iter().map(|v| v * v).sum::<f64>() / n).sqrt()
}
