//! Hyperspherical coordinates
//!
//! A D-dimensional vector is represented as one radius and D-1 angles. The
//! first D-2 angles lie in `[0, π]`; the last angle lies in `(-π, π]`. The
//! conversion round-trips within floating tolerance and preserves the
//! Euclidean norm, which the escape-time power map depends on.

use crate::vecn::{VecN, MAX_DIM, NEAR_ZERO};

/// A vector in hyperspherical form: radius plus D-1 angles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperspherical {
    /// Euclidean norm of the vector
    pub radius: f64,
    /// Angles; only the first `dim - 1` entries are live
    pub angles: [f64; MAX_DIM - 1],
    /// Cartesian dimension
    pub dim: usize,
}

impl Hyperspherical {
    /// The live angles as a slice
    #[inline]
    pub fn angles(&self) -> &[f64] {
        &self.angles[..self.dim.saturating_sub(1)]
    }
}

/// Convert a Cartesian vector to hyperspherical form
///
/// A near-zero vector maps to radius 0 with all angles 0, so the conversion
/// never produces NaN.
pub fn to_hyperspherical(v: &VecN) -> Hyperspherical {
    let dim = v.dim().min(MAX_DIM);
    let mut out = Hyperspherical {
        radius: v.length(),
        angles: [0.0; MAX_DIM - 1],
        dim,
    };
    if dim < 2 || out.radius <= NEAR_ZERO {
        return out;
    }

    // angles[k] = atan2(norm of the tail past k, component k); the final
    // angle uses the signed last component to cover the full circle.
    for k in 0..dim - 1 {
        if k < dim - 2 {
            let mut tail_sq = 0.0;
            for i in (k + 1)..dim {
                tail_sq += v.get(i) * v.get(i);
            }
            out.angles[k] = tail_sq.sqrt().atan2(v.get(k));
        } else {
            out.angles[k] = v.get(dim - 1).atan2(v.get(dim - 2));
        }
    }
    out
}

/// Convert hyperspherical form back to a Cartesian vector
pub fn from_hyperspherical(h: &Hyperspherical) -> VecN {
    let dim = h.dim.min(MAX_DIM);
    let mut v = VecN::zeros(dim);
    if dim == 0 {
        return v;
    }
    if dim == 1 {
        v.set(0, h.radius);
        return v;
    }

    let mut sin_product = h.radius;
    for k in 0..dim - 1 {
        v.set(k, sin_product * h.angles[k].cos());
        sin_product *= h.angles[k].sin();
    }
    v.set(dim - 1, sin_product);
    v
}
