//! Simultaneous plane-rotation composition
//!
//! In D dimensions, rotations happen in planes rather than around axes; a
//! D-dimensional space has D·(D-1)/2 rotation planes. The full rotation state
//! is a map from plane name ("XY", "XW", "A6A7", …) to an angle, and the
//! composed transform is the ordered product of the elementary plane
//! rotations.
//!
//! Composition is non-commutative, so the application order is fixed to
//! **ascending lexical order of plane names** (a `BTreeMap` traversal) to
//! keep results reproducible across runs. Planes that reference an axis
//! outside the current dimension are silently dropped: the dimension can
//! change before dependent rotation state resynchronizes, and a transient
//! mismatch must not interrupt the frame.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use crate::matn::MatN;
use crate::vecn::{VecN, MAX_DIM};

/// Single-letter labels for the first six axes; higher axes use "A6", "A7", …
const AXIS_NAMES: [char; 6] = ['X', 'Y', 'Z', 'W', 'V', 'U'];

/// Label for axis `index` ("X", "Y", …, "U", "A6", "A7", …)
pub fn axis_label(index: usize) -> String {
    if index < AXIS_NAMES.len() {
        AXIS_NAMES[index].to_string()
    } else {
        format!("A{}", index)
    }
}

/// Parse an axis label back to its index
fn parse_axis_label(name: &str) -> Option<usize> {
    if name.len() == 1 {
        let c = name.chars().next()?;
        return AXIS_NAMES.iter().position(|&axis| axis == c);
    }
    // "A6", "A7", ... for axes past the named six
    if let Some(rest) = name.strip_prefix('A') {
        if let Ok(index) = rest.parse::<usize>() {
            if index >= AXIS_NAMES.len() && index < MAX_DIM {
                return Some(index);
            }
        }
    }
    None
}

/// A rotation plane: an ordered pair of axis indices with `i < j`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RotationPlane {
    /// First axis of the plane
    pub i: usize,
    /// Second axis of the plane
    pub j: usize,
}

impl RotationPlane {
    /// Create a plane from two distinct axis indices (order-normalized)
    pub fn new(a: usize, b: usize) -> Option<Self> {
        if a == b || a >= MAX_DIM || b >= MAX_DIM {
            return None;
        }
        Some(if a < b {
            Self { i: a, j: b }
        } else {
            Self { i: b, j: a }
        })
    }

    /// Canonical plane name, e.g. "XY" or "A6A7"
    pub fn name(&self) -> String {
        format!("{}{}", axis_label(self.i), axis_label(self.j))
    }

    /// Parse a plane name such as "XW", "ZA6", or "A6A7"
    pub fn parse(name: &str) -> Option<Self> {
        // Split on uppercase boundaries: "ZA6" -> ["Z", "A6"]
        let mut parts: Vec<String> = Vec::new();
        let mut current = String::new();
        for c in name.chars() {
            if c.is_ascii_uppercase() && !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            parts.push(current);
        }
        if parts.len() != 2 {
            return None;
        }
        let a = parse_axis_label(&parts[0])?;
        let b = parse_axis_label(&parts[1])?;
        Self::new(a, b)
    }

    /// Whether both axes fit in the given dimension
    #[inline]
    pub fn is_valid_for(&self, dim: usize) -> bool {
        self.j < dim
    }
}

/// All rotation planes valid for a dimension, in ascending axis order
pub fn planes_for_dimension(dim: usize) -> Vec<RotationPlane> {
    let dim = dim.min(MAX_DIM);
    let mut planes = Vec::with_capacity(dim * dim.saturating_sub(1) / 2);
    for i in 0..dim {
        for j in (i + 1)..dim {
            planes.push(RotationPlane { i, j });
        }
    }
    planes
}

/// Normalize an angle to `[0, 2π)`
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Compose a set of named plane rotations into one matrix
///
/// Pure entry point: angles are normalized to `[0, 2π)`, planes are applied
/// in ascending lexical name order (the `BTreeMap` iteration order), and
/// planes invalid for `dim` are dropped.
pub fn compose_rotation(dim: usize, angles: &BTreeMap<String, f64>) -> MatN {
    let dim = dim.min(MAX_DIM);
    let mut result = MatN::identity(dim);
    for (name, &angle) in angles {
        let plane = match RotationPlane::parse(name) {
            Some(p) => p,
            None => {
                log::debug!("dropping unparsable rotation plane '{}'", name);
                continue;
            }
        };
        if !plane.is_valid_for(dim) {
            log::debug!(
                "dropping rotation plane '{}' (axis {} >= dimension {})",
                name,
                plane.j,
                dim
            );
            continue;
        }
        let elementary = MatN::plane_rotation(dim, plane.i, plane.j, normalize_angle(angle));
        result = result.multiply(&elementary);
    }
    result
}

/// Signature identifying one composed rotation state
type Signature = (usize, Vec<(String, f64)>);

fn signature_of(dim: usize, angles: &BTreeMap<String, f64>) -> Signature {
    let entries = angles
        .iter()
        .map(|(name, &angle)| (name.clone(), normalize_angle(angle)))
        .collect();
    (dim, entries)
}

/// Stateful rotation composer with a version-gated result cache
///
/// Recomputes the matrix and its first three basis images only when the
/// `(dimension, normalized angle set)` signature changes; the version counter
/// is the correctness mechanism callers key derived state on. Also caches the
/// plane enumeration per dimension.
pub struct RotationComposer {
    signature: Option<Signature>,
    matrix: MatN,
    basis: [VecN; 3],
    version: u64,
    plane_cache: BTreeMap<usize, Vec<RotationPlane>>,
}

impl Default for RotationComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationComposer {
    /// Create a composer with no cached state
    pub fn new() -> Self {
        let identity = MatN::identity(MAX_DIM);
        Self {
            signature: None,
            matrix: identity,
            basis: [
                identity.column(0),
                identity.column(1),
                identity.column(2),
            ],
            version: 0,
            plane_cache: BTreeMap::new(),
        }
    }

    /// Compose (or reuse) the rotation for the given state
    pub fn compose(&mut self, dim: usize, angles: &BTreeMap<String, f64>) -> &MatN {
        let signature = signature_of(dim.min(MAX_DIM), angles);
        if self.signature.as_ref() != Some(&signature) {
            self.matrix = compose_rotation(dim, angles);
            self.basis = [
                self.matrix.column(0),
                self.matrix.column(1),
                self.matrix.column(2),
            ];
            self.signature = Some(signature);
            self.version += 1;
        }
        &self.matrix
    }

    /// Images of the first three standard basis vectors under the last
    /// composed rotation
    pub fn basis(&self) -> &[VecN; 3] {
        &self.basis
    }

    /// Version counter, bumped once per recomputation
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Rotation planes valid for a dimension (cached per dimension)
    pub fn planes(&mut self, dim: usize) -> &[RotationPlane] {
        self.plane_cache
            .entry(dim.min(MAX_DIM))
            .or_insert_with(|| planes_for_dimension(dim))
    }
}
