//! N-dimensional square matrix type
//!
//! Row-major D×D matrix with inline storage, used for rotation transforms.
//! Like [`VecN`](crate::VecN), the backing array is sized to [`MAX_DIM`] with
//! a live `dim` prefix so per-frame composition never allocates.

use crate::vecn::{VecN, MAX_DIM};

/// Square matrix with inline storage, row-major
#[derive(Clone, Copy, Debug)]
pub struct MatN {
    rows: [[f64; MAX_DIM]; MAX_DIM],
    dim: usize,
}

impl MatN {
    /// Create a zero matrix of the given dimension (clamped to [`MAX_DIM`])
    pub fn zeros(dim: usize) -> Self {
        Self {
            rows: [[0.0; MAX_DIM]; MAX_DIM],
            dim: dim.min(MAX_DIM),
        }
    }

    /// Create an identity matrix of the given dimension
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..m.dim {
            m.rows[i][i] = 1.0;
        }
        m
    }

    /// Create an elementary plane (Givens) rotation
    ///
    /// Identity except for the 2×2 rotation block on axes `i`, `j`:
    /// `M[i][i] = cos`, `M[i][j] = -sin`, `M[j][i] = sin`, `M[j][j] = cos`.
    /// Out-of-range axes yield plain identity.
    pub fn plane_rotation(dim: usize, i: usize, j: usize, angle: f64) -> Self {
        let mut m = Self::identity(dim);
        if i >= m.dim || j >= m.dim || i == j {
            return m;
        }
        let (sin, cos) = angle.sin_cos();
        m.rows[i][i] = cos;
        m.rows[i][j] = -sin;
        m.rows[j][i] = sin;
        m.rows[j][j] = cos;
        m
    }

    /// The dimension
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(row, col)`, or 0.0 when out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row < self.dim && col < self.dim {
            self.rows[row][col]
        } else {
            0.0
        }
    }

    /// Set element at `(row, col)` (ignored when out of range)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.dim && col < self.dim {
            self.rows[row][col] = value;
        }
    }

    /// Matrix product `self × other`
    ///
    /// Dimensions are reconciled to the smaller of the two.
    pub fn multiply(&self, other: &Self) -> Self {
        let dim = self.dim.min(other.dim);
        let mut out = Self::zeros(dim);
        for i in 0..dim {
            for j in 0..dim {
                let mut sum = 0.0;
                for k in 0..dim {
                    sum += self.rows[i][k] * other.rows[k][j];
                }
                out.rows[i][j] = sum;
            }
        }
        out
    }

    /// Matrix-vector product
    ///
    /// The vector keeps its own dimension; components beyond the matrix
    /// dimension pass through unchanged.
    pub fn mul_vec(&self, v: &VecN) -> VecN {
        let mut out = *v;
        let n = self.dim.min(v.dim());
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                sum += self.rows[i][j] * v.get(j);
            }
            out.set(i, sum);
        }
        out
    }

    /// Transposed matrix
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.dim);
        for i in 0..self.dim {
            for j in 0..self.dim {
                out.rows[i][j] = self.rows[j][i];
            }
        }
        out
    }

    /// Column `j` as a vector (the image of the j-th standard basis vector)
    pub fn column(&self, j: usize) -> VecN {
        let mut v = VecN::zeros(self.dim);
        if j < self.dim {
            for i in 0..self.dim {
                v.set(i, self.rows[i][j]);
            }
        }
        v
    }

    /// Check orthonormality: `Mᵗ·M ≈ I` within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let product = self.transpose().multiply(self);
        for i in 0..self.dim {
            for j in 0..self.dim {
                let expected = if i == j { 1.0 } else { 0.0 };
                if (product.rows[i][j] - expected).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Maximum absolute element-wise difference to another matrix
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        let dim = self.dim.min(other.dim);
        let mut max = 0.0f64;
        for i in 0..dim {
            for j in 0..dim {
                max = max.max((self.rows[i][j] - other.rows[i][j]).abs());
            }
        }
        max
    }
}
