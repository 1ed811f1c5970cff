/// Returns `count` evenly spaced values over the closed interval `[start, end]`.
///
/// The first value is exactly `start` and, for `count >= 2`, the last value is
/// exactly `end`, so sample grids span their interval without rounding drift
/// at the endpoint. A `count` of zero yields an empty grid and a `count` of
/// one yields `[start]`.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (count - 1) as f64;

            let mut values: Vec<f64> = (0..count)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    start + i * step
                })
                .collect();
            values[count - 1] = end;
            values
        }
    }
}
