//! Projection from N dimensions to 3D
//!
//! Perspective projection treats the first three coordinates as the spatial
//! position and derives a perspective scale from the aggregate of the extra
//! coordinates; orthographic projection passes the first three coordinates
//! through unchanged.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::vecn::VecN;

/// Default distance from the projection plane
pub const DEFAULT_PROJECTION_DISTANCE: f64 = 4.0;

/// Minimum safe distance from the projection plane to avoid blowups when a
/// vertex approaches the camera hyperplane
pub const MIN_SAFE_DISTANCE: f64 = 0.01;

/// Projection mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Perspective division by depth derived from the higher dimensions
    #[default]
    Perspective,
    /// Drop all coordinates past the third
    Orthographic,
}

/// Projection configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Projection mode
    pub mode: ProjectionMode,
    /// Distance from the projection plane (perspective only)
    pub distance: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            distance: DEFAULT_PROJECTION_DISTANCE,
        }
    }
}

/// A projected 3D position, laid out for zero-copy transfer
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Position3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    fn from_xyz(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0] as f32, xyz[1] as f32, xyz[2] as f32)
    }
}

/// Minimum input dimension for a projection mode
fn min_dimension(mode: ProjectionMode) -> usize {
    match mode {
        ProjectionMode::Perspective => 3,
        ProjectionMode::Orthographic => 2,
    }
}

/// Perspective scale factor for one vertex
///
/// The aggregate depth of the higher dimensions is their sum divided by
/// `sqrt(D - 3)`, so higher-dimensional slices do not inflate apparent size
/// as the dimension grows. The denominator is clamped away from zero.
fn perspective_scale(v: &VecN, distance: f64) -> f64 {
    let dim = v.dim();
    let higher = dim.saturating_sub(3);
    let mut depth = 0.0;
    if higher > 0 {
        for d in 3..dim {
            depth += v.get(d);
        }
        depth /= (higher as f64).sqrt();
    }
    let mut denominator = distance - depth;
    if denominator.abs() < MIN_SAFE_DISTANCE {
        denominator = if denominator >= 0.0 {
            MIN_SAFE_DISTANCE
        } else {
            -MIN_SAFE_DISTANCE
        };
    }
    1.0 / denominator
}

/// Project one vector to 3D
///
/// Returns `None` for input below the mode's minimum dimension. That case is
/// an upstream dimension mismatch during a transient state, so it is logged
/// as a contract violation rather than raised as a fault.
pub fn project(v: &VecN, projection: &Projection) -> Option<[f64; 3]> {
    if v.dim() < min_dimension(projection.mode) {
        log::warn!(
            "projection contract violation: dimension {} below minimum {}",
            v.dim(),
            min_dimension(projection.mode)
        );
        return None;
    }
    match projection.mode {
        ProjectionMode::Orthographic => Some(v.xyz()),
        ProjectionMode::Perspective => {
            let scale = perspective_scale(v, projection.distance);
            let [x, y, z] = v.xyz();
            Some([x * scale, y * scale, z * scale])
        }
    }
}

/// Project a vertex set to render-ready 3D positions
///
/// Returns an empty buffer (with one warning) when the vertex dimension is
/// below the mode's minimum.
pub fn project_vertices(vertices: &[VecN], projection: &Projection) -> Vec<Position3> {
    let Some(first) = vertices.first() else {
        return Vec::new();
    };
    if first.dim() < min_dimension(projection.mode) {
        log::warn!(
            "projection contract violation: dimension {} below minimum {}; emitting empty buffer",
            first.dim(),
            min_dimension(projection.mode)
        );
        return Vec::new();
    }
    vertices
        .iter()
        .map(|v| match projection.mode {
            ProjectionMode::Orthographic => Position3::from_xyz(v.xyz()),
            ProjectionMode::Perspective => {
                let scale = perspective_scale(v, projection.distance);
                let [x, y, z] = v.xyz();
                Position3::from_xyz([x * scale, y * scale, z * scale])
            }
        })
        .collect()
}

/// Project edge endpoints into line-segment position pairs
///
/// Each edge contributes two consecutive [`Position3`] entries. Edges with
/// out-of-bounds indices contribute zeroed segments rather than truncating
/// the buffer, so segment i always starts at slot 2i.
pub fn project_edges(
    vertices: &[VecN],
    edges: &[[usize; 2]],
    projection: &Projection,
) -> Vec<Position3> {
    let projected = project_vertices(vertices, projection);
    if projected.is_empty() {
        return Vec::new();
    }
    let mut segments = Vec::with_capacity(edges.len() * 2);
    for edge in edges {
        let [a, b] = *edge;
        if a >= projected.len() || b >= projected.len() {
            segments.push(Position3::default());
            segments.push(Position3::default());
            continue;
        }
        segments.push(projected[a]);
        segments.push(projected[b]);
    }
    segments
}
