//! Box-Muller transform for normal variates.

use std::f64::consts::TAU;

/// Standard normal variate from two independent uniforms in `[0, 1)`.
///
/// The inputs are remapped to `(0, 1]` via `1 - u` so the logarithm is
/// always finite:
/// ```text
/// z = sqrt(-2 ln(1 - u1)) * sin(2 pi (1 - u2))
/// ```
///
/// # Examples
/// ```
/// use entropy_core::sample::box_muller;
///
/// let z = box_muller(0.5, 0.25);
/// assert!(z.is_finite());
/// ```
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    let u1 = 1.0 - u1;
    let u2 = 1.0 - u2;
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).sin()
}
