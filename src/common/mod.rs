//! Common utilities shared across sumr modules.
//!
//! Grid generation and elementwise function evaluation used by both the
//! partition generator and the rendering path.

/// Generate `n` evenly spaced points from `start` to `end` inclusive.
///
/// For `n >= 2` the spacing is `(end - start) / (n - 1)` and the last point
/// is exactly `end`.
///
/// # Example
///
/// ```
/// use sumr::common::linspace;
///
/// let grid = linspace(0.0, 1.0, 5);
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // The last node must be exactly `end`.
            points[n - 1] = end;
            points
        }
    }
}

/// Apply a scalar function elementwise over a slice of points.
///
/// This is the vectorization contract the summation engine and the
/// rendering grid rely on: any `Fn(f64) -> f64` is mapped over an array of
/// evaluation points.
///
/// # Example
///
/// ```
/// use sumr::common::evaluate;
///
/// let heights = evaluate(|x| x * x, &[1.0, 2.0, 3.0]);
/// assert_eq!(heights, vec![1.0, 4.0, 9.0]);
/// ```
pub fn evaluate<F>(f: F, points: &[f64]) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    points.iter().map(|&x| f(x)).collect()
}
