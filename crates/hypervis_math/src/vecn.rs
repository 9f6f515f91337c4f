//! N-dimensional vector type
//!
//! A `VecN` holds up to [`MAX_DIM`] components in a fixed-size array with a
//! live `dim` prefix. Keeping the storage inline (no heap allocation) lets the
//! animation path rotate and project thousands of vertices per frame without
//! touching the allocator.

/// Largest supported dimension.
pub const MAX_DIM: usize = 11;

/// Smallest dimension accepted by the geometry generators.
/// The projector additionally tolerates 2D input (see `projection`).
pub const MIN_DIM: usize = 3;

/// Threshold below which a vector is treated as zero-length.
pub const NEAR_ZERO: f64 = 1e-10;

/// N-dimensional vector with inline storage
///
/// Components past `dim` are always zero, so operations over the full backing
/// array and over the live prefix agree. Binary operations on vectors of
/// different dimensions operate on the shared prefix and yield the smaller
/// dimension; mismatches come from transient UI states and must not panic.
#[derive(Clone, Copy, Debug)]
pub struct VecN {
    components: [f64; MAX_DIM],
    dim: usize,
}

impl VecN {
    /// Create a zero vector of the given dimension (clamped to [`MAX_DIM`])
    #[inline]
    pub fn zeros(dim: usize) -> Self {
        Self {
            components: [0.0; MAX_DIM],
            dim: dim.min(MAX_DIM),
        }
    }

    /// Create a vector from a slice (truncated to [`MAX_DIM`] components)
    pub fn from_slice(values: &[f64]) -> Self {
        let dim = values.len().min(MAX_DIM);
        let mut components = [0.0; MAX_DIM];
        components[..dim].copy_from_slice(&values[..dim]);
        Self { components, dim }
    }

    /// Create the unit vector along `axis` in the given dimension
    ///
    /// Returns a zero vector if `axis` is out of range.
    pub fn unit_axis(dim: usize, axis: usize) -> Self {
        let mut v = Self::zeros(dim);
        if axis < v.dim {
            v.components[axis] = 1.0;
        }
        v
    }

    /// The dimension (number of live components)
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The live components as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components[..self.dim]
    }

    /// Component at `index`, or 0.0 when out of range
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        if index < self.dim {
            self.components[index]
        } else {
            0.0
        }
    }

    /// Set component at `index` (ignored when out of range)
    #[inline]
    pub fn set(&mut self, index: usize, value: f64) {
        if index < self.dim {
            self.components[index] = value;
        }
    }

    /// Dot product over the shared prefix
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        let n = self.dim.min(other.dim);
        let mut sum = 0.0;
        for i in 0..n {
            sum += self.components[i] * other.components[i];
        }
        sum
    }

    /// Squared length (faster than `length`)
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length, returning a zero vector for near-zero input
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > NEAR_ZERO {
            *self * (1.0 / len)
        } else {
            Self::zeros(self.dim)
        }
    }

    /// Normalize to unit length, falling back to the unit vector along
    /// `fallback_axis` for near-zero input
    ///
    /// Guarantees a finite unit-length result, which the hull and root-system
    /// code relies on when normalizing nearly coincident difference vectors.
    pub fn normalized_or_axis(&self, fallback_axis: usize) -> Self {
        let len = self.length();
        if len > NEAR_ZERO {
            *self * (1.0 / len)
        } else {
            Self::unit_axis(self.dim, fallback_axis)
        }
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self * (1.0 - t) + *other * t
    }

    /// Squared Euclidean distance over the shared prefix
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let n = self.dim.min(other.dim);
        let mut sum = 0.0;
        for i in 0..n {
            let d = self.components[i] - other.components[i];
            sum += d * d;
        }
        sum
    }

    /// Euclidean distance over the shared prefix
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// The first three components (zero-padded below 3D)
    #[inline]
    pub fn xyz(&self) -> [f64; 3] {
        [self.get(0), self.get(1), self.get(2)]
    }

    /// Clamp every live component to `[min, max]`
    pub fn clamp_components(&self, min: f64, max: f64) -> Self {
        let mut out = *self;
        for i in 0..out.dim {
            out.components[i] = out.components[i].clamp(min, max);
        }
        out
    }

    /// True if every live component is finite
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|c| c.is_finite())
    }
}

impl PartialEq for VecN {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.as_slice() == other.as_slice()
    }
}

// Serialized as the live component list, so the wire form carries no padding
impl serde::Serialize for VecN {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de> serde::Deserialize<'de> for VecN {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = Vec::<f64>::deserialize(deserializer)?;
        Ok(VecN::from_slice(&components))
    }
}

// Operator overloads

impl std::ops::Add for VecN {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let dim = self.dim.min(other.dim);
        let mut out = Self::zeros(dim);
        for i in 0..dim {
            out.components[i] = self.components[i] + other.components[i];
        }
        out
    }
}

impl std::ops::AddAssign for VecN {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for VecN {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let dim = self.dim.min(other.dim);
        let mut out = Self::zeros(dim);
        for i in 0..dim {
            out.components[i] = self.components[i] - other.components[i];
        }
        out
    }
}

impl std::ops::SubAssign for VecN {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Mul<f64> for VecN {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        let mut out = self;
        for i in 0..out.dim {
            out.components[i] *= scalar;
        }
        out
    }
}

impl std::ops::MulAssign<f64> for VecN {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl std::ops::Div<f64> for VecN {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        let mut out = self;
        for i in 0..out.dim {
            out.components[i] /= scalar;
        }
        out
    }
}

impl std::ops::Neg for VecN {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl std::ops::Index<usize> for VecN {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl std::ops::IndexMut<usize> for VecN {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.components[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = VecN::zeros(5);
        assert_eq!(v.dim(), 5);
        assert!(v.as_slice().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_from_slice() {
        let v = VecN::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.dim(), 4);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_from_slice_truncates() {
        let long: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let v = VecN::from_slice(&long);
        assert_eq!(v.dim(), MAX_DIM);
    }

    #[test]
    fn test_unit_axis() {
        let v = VecN::unit_axis(4, 3);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0, 1.0]);

        let out_of_range = VecN::unit_axis(4, 7);
        assert_eq!(out_of_range.length(), 0.0);
    }

    #[test]
    fn test_dot() {
        let a = VecN::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let b = VecN::from_slice(&[5.0, 6.0, 7.0, 8.0]);
        assert_eq!(a.dot(&b), 70.0);
    }

    #[test]
    fn test_dot_mismatched_dims() {
        let a = VecN::from_slice(&[1.0, 2.0, 3.0]);
        let b = VecN::from_slice(&[4.0, 5.0]);
        // Shared prefix only: 1*4 + 2*5 = 14
        assert_eq!(a.dot(&b), 14.0);
    }

    #[test]
    fn test_length() {
        let v = VecN::from_slice(&[3.0, 4.0]);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_normalized() {
        let v = VecN::from_slice(&[3.0, 0.0, 0.0, 0.0]);
        let n = v.normalized();
        assert!((n.get(0) - 1.0).abs() < 1e-12);
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_near_zero_is_zero() {
        let v = VecN::from_slice(&[1e-15, 0.0, 0.0]);
        assert_eq!(v.normalized(), VecN::zeros(3));
    }

    #[test]
    fn test_normalized_or_axis_fallback() {
        let v = VecN::zeros(5);
        let n = v.normalized_or_axis(2);
        assert_eq!(n, VecN::unit_axis(5, 2));
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp() {
        let a = VecN::zeros(4);
        let b = VecN::from_slice(&[10.0, 10.0, 10.0, 10.0]);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.as_slice(), &[5.0, 5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_distance() {
        let a = VecN::from_slice(&[0.0, 0.0, 0.0]);
        let b = VecN::from_slice(&[3.0, 4.0, 0.0]);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_add_sub() {
        let a = VecN::from_slice(&[1.0, 2.0, 3.0]);
        let b = VecN::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!((a + b).as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!((b - a).as_slice(), &[3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_mul_div_neg() {
        let v = VecN::from_slice(&[1.0, -2.0, 3.0]);
        assert_eq!((v * 2.0).as_slice(), &[2.0, -4.0, 6.0]);
        assert_eq!((v / 2.0).as_slice(), &[0.5, -1.0, 1.5]);
        assert_eq!((-v).as_slice(), &[-1.0, 2.0, -3.0]);
    }

    #[test]
    fn test_xyz_pads_below_3d() {
        let v = VecN::from_slice(&[1.0, 2.0]);
        assert_eq!(v.xyz(), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_get_out_of_range() {
        let v = VecN::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.get(5), 0.0);
    }

    #[test]
    fn test_clamp_components() {
        let v = VecN::from_slice(&[-2.0, 0.5, 3.0]);
        let c = v.clamp_components(-1.0, 1.0);
        assert_eq!(c.as_slice(), &[-1.0, 0.5, 1.0]);
    }
}
