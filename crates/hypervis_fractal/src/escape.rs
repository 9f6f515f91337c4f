//! Escape-time iteration for the hyperbulb power map
//!
//! The power map generalizes spherical power-raising to D dimensions: raise
//! the radius to the power `n` and multiply every hyperspherical angle by the
//! same `n`. The per-iteration step is `z -> pow_map(z, n) + c`.

use hypervis_math::{from_hyperspherical, to_hyperspherical, VecN};

/// Apply the hyperspherical power map `z -> z^power`
pub fn power_map(z: &VecN, power: f64) -> VecN {
    let mut h = to_hyperspherical(z);
    h.radius = h.radius.powf(power);
    for angle in &mut h.angles[..h.dim.saturating_sub(1)] {
        *angle *= power;
    }
    from_hyperspherical(&h)
}

/// Count iterations of `z -> z^power + c` until the norm exceeds
/// `escape_radius`, starting from z = 0
///
/// Bounded points return `max_iterations` exactly. The escape check runs
/// before each step; z starts at the origin, so the first check always
/// passes and a `c` already outside the radius escapes at 1.
pub fn escape_time(c: &VecN, power: f64, max_iterations: u32, escape_radius: f64) -> u32 {
    let escape_sq = escape_radius * escape_radius;
    let mut z = VecN::zeros(c.dim());
    for i in 0..max_iterations {
        if z.length_squared() > escape_sq {
            return i;
        }
        z = power_map(&z, power) + *c;
        if !z.is_finite() {
            return i;
        }
    }
    max_iterations
}

/// Smooth escape time with logarithmic correction for continuous coloring
///
/// Interpolates between the iteration counts around the escape using the
/// final norm, so adjacent samples color without banding. Bounded points
/// return `max_iterations` as an exact float; the result is always finite and
/// within `[0, max_iterations]`.
pub fn smooth_escape_time(c: &VecN, power: f64, max_iterations: u32, escape_radius: f64) -> f64 {
    let escape_sq = escape_radius * escape_radius;
    let mut z = VecN::zeros(c.dim());
    for i in 0..max_iterations {
        let norm_sq = z.length_squared();
        if norm_sq > escape_sq {
            // nu = log(log|z| / log R) / log n, subtracted from the count
            let norm = norm_sq.sqrt();
            let nu = (norm.ln() / escape_radius.ln()).ln() / power.ln();
            let smooth = i as f64 - nu + 1.0;
            if smooth.is_finite() {
                return smooth.clamp(0.0, max_iterations as f64);
            }
            return i as f64;
        }
        z = power_map(&z, power) + *c;
        if !z.is_finite() {
            return i as f64;
        }
    }
    max_iterations as f64
}
