//! Hyperplane cross-sections of polytope edge graphs
//!
//! Slices a geometry's edges against the hyperplane `axis = value`, producing
//! interpolated points with the sliced coordinate pinned exactly, and
//! reconnects those points along the source polytope's 2-face adjacency.

use std::collections::{HashMap, HashSet};

use hypervis_math::VecN;
use log::debug;

use crate::geometry::NdGeometry;

/// Quantization scale for merging interpolated points that coincide
const MERGE_SCALE: f64 = 1e9;

/// Result of slicing a geometry with a hyperplane
#[derive(Clone, Debug, Default)]
pub struct CrossSectionResult {
    /// Interpolated points, full dimension, sliced axis pinned to the value
    pub points: Vec<VecN>,
    /// Connectivity between interpolated points
    pub edges: Vec<[usize; 2]>,
    /// False when the hyperplane misses the geometry entirely
    pub has_intersection: bool,
}

impl CrossSectionResult {
    fn empty() -> Self {
        Self::default()
    }
}

/// Quantized lookup key so points produced by different edges merge
fn merge_key(point: &VecN) -> Vec<i64> {
    (0..point.dim())
        .map(|i| (point.get(i) * MERGE_SCALE).round() as i64)
        .collect()
}

/// Intersect a geometry's edges with the hyperplane `axis = value`
///
/// Each edge whose endpoints straddle the slice value (endpoints exactly on
/// the plane included) contributes an interpolated point; an edge lying
/// entirely in the plane contributes both endpoints and survives as an
/// output edge. Output edges otherwise connect crossing points whose source
/// edges bound a common 2-face. Dimension below 4, an
/// invalid axis, or a plane that misses the geometry all yield an empty
/// result with `has_intersection = false`.
pub fn cross_section(geometry: &NdGeometry, axis: usize, value: f64) -> CrossSectionResult {
    if geometry.dimension < 4 {
        debug!(
            "cross-section skipped: dimension {} below 4",
            geometry.dimension
        );
        return CrossSectionResult::empty();
    }
    if axis >= geometry.dimension {
        debug!(
            "cross-section skipped: axis {} invalid for dimension {}",
            axis, geometry.dimension
        );
        return CrossSectionResult::empty();
    }

    let mut points: Vec<VecN> = Vec::new();
    let mut merged: HashMap<Vec<i64>, usize> = HashMap::new();
    // Point indices contributed by each source edge
    let mut edge_points: Vec<Vec<usize>> = vec![Vec::new(); geometry.edges.len()];

    let mut push_point = |points: &mut Vec<VecN>, mut p: VecN| -> usize {
        p.set(axis, value);
        let key = merge_key(&p);
        *merged.entry(key).or_insert_with(|| {
            points.push(p);
            points.len() - 1
        })
    };

    for (edge_idx, &[ia, ib]) in geometry.edges.iter().enumerate() {
        let a = geometry.vertices[ia];
        let b = geometry.vertices[ib];
        let fa = a.get(axis) - value;
        let fb = b.get(axis) - value;

        if fa == 0.0 && fb == 0.0 {
            // Edge lies in the slice plane: keep both endpoints
            let pa = push_point(&mut points, a);
            let pb = push_point(&mut points, b);
            edge_points[edge_idx].push(pa);
            edge_points[edge_idx].push(pb);
            continue;
        }
        if fa * fb > 0.0 {
            continue;
        }

        let t = (fa / (fa - fb)).clamp(0.0, 1.0);
        let p = a.lerp(&b, t);
        let idx = push_point(&mut points, p);
        edge_points[edge_idx].push(idx);
    }

    if points.is_empty() {
        return CrossSectionResult::empty();
    }

    let mut seen: HashSet<[usize; 2]> = HashSet::new();
    let mut edges: Vec<[usize; 2]> = Vec::new();
    let mut push_edge = |edges: &mut Vec<[usize; 2]>, a: usize, b: usize| {
        if a == b {
            return;
        }
        let pair = if a < b { [a, b] } else { [b, a] };
        if seen.insert(pair) {
            edges.push(pair);
        }
    };

    // An edge lying in the plane survives as-is
    for contributed in &edge_points {
        if let [pa, pb] = contributed[..] {
            push_edge(&mut edges, pa, pb);
        }
    }

    // Reconnect along 2-face adjacency. Only crossing points (edges that
    // contributed a single point) are joined pairwise; points from in-plane
    // edges already carry their own edge, and joining them across a fully
    // in-plane face would add its diagonals.
    for coface in &geometry.cofaces {
        let mut face_points: Vec<usize> = coface
            .iter()
            .filter(|&&e| edge_points[e].len() == 1)
            .map(|&e| edge_points[e][0])
            .collect();
        face_points.sort_unstable();
        face_points.dedup();
        for i in 0..face_points.len() {
            for j in (i + 1)..face_points.len() {
                push_edge(&mut edges, face_points[i], face_points[j]);
            }
        }
    }

    CrossSectionResult {
        points,
        edges,
        has_intersection: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polytope::generate_hypercube;

    #[test]
    fn test_tesseract_center_slice_is_cube() {
        let tesseract = generate_hypercube(4, 1.0).unwrap();
        let result = cross_section(&tesseract, 3, 0.0);
        assert!(result.has_intersection);
        // Slicing at w=0 crosses the 8 w-edges, yielding a cube's corners
        assert_eq!(result.points.len(), 8);
        for p in &result.points {
            assert_eq!(p.get(3), 0.0);
        }
        assert_eq!(result.edges.len(), 12);
    }

    #[test]
    fn test_tesseract_slice_pins_axis_exactly() {
        let tesseract = generate_hypercube(4, 1.0).unwrap();
        let result = cross_section(&tesseract, 3, 0.37);
        assert!(result.has_intersection);
        for p in &result.points {
            assert_eq!(p.get(3), 0.37);
        }
    }

    #[test]
    fn test_slice_outside_misses() {
        let tesseract = generate_hypercube(4, 1.0).unwrap();
        let result = cross_section(&tesseract, 3, 1.5);
        assert!(!result.has_intersection);
        assert!(result.points.is_empty());
        assert!(result.edges.is_empty());
    }

    #[test]
    fn test_center_slice_at_least_as_rich_as_edge_slice() {
        let tesseract = generate_hypercube(4, 1.0).unwrap();
        let center = cross_section(&tesseract, 3, 0.0);
        let near_edge = cross_section(&tesseract, 3, 0.9);
        assert!(center.points.len() >= near_edge.points.len());
    }

    #[test]
    fn test_three_dimensional_input_degrades() {
        let cube = generate_hypercube(3, 1.0).unwrap();
        let result = cross_section(&cube, 2, 0.0);
        assert!(!result.has_intersection);
        assert!(result.points.is_empty());
    }

    #[test]
    fn test_invalid_axis_degrades() {
        let tesseract = generate_hypercube(4, 1.0).unwrap();
        let result = cross_section(&tesseract, 7, 0.0);
        assert!(!result.has_intersection);
    }

    #[test]
    fn test_vertex_touching_slice() {
        // Plane through the +w corner layer: vertices lie exactly on it
        let tesseract = generate_hypercube(4, 1.0).unwrap();
        let result = cross_section(&tesseract, 3, 1.0);
        assert!(result.has_intersection);
        // The w=+1 cell of the tesseract has 8 vertices
        assert_eq!(result.points.len(), 8);
        for p in &result.points {
            assert_eq!(p.get(3), 1.0);
        }
        // The slice is that cell's own wireframe: 12 axis-aligned edges,
        // no face diagonals
        assert_eq!(result.edges.len(), 12);
        for &[a, b] in &result.edges {
            let pa = result.points[a];
            let pb = result.points[b];
            let differing = (0..3).filter(|&i| pa.get(i) != pb.get(i)).count();
            assert_eq!(differing, 1, "diagonal edge {:?} {:?}", pa, pb);
        }
    }
}
