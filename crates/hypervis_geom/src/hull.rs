//! Convex-hull boundary triangulation
//!
//! Extracts renderable triangular faces from an arbitrary point set in up to
//! 11 dimensions. The point set may live in a lower-dimensional affine
//! subspace (root systems whose roots sum to zero), so the hull is computed
//! in the effective dimension after projecting onto the affine hull.

use std::collections::{HashMap, HashSet};

use nalgebra::{DMatrix, DVector};

use hypervis_math::VecN;
use log::{debug, warn};

use crate::geometry::Face;

/// Independence threshold for Gram-Schmidt and facet visibility
const EPSILON: f64 = 1e-9;

/// Affine-hull projection of a point set
///
/// `points` are the coordinates in the orthonormal affine basis, `dim` is the
/// effective dimension, and `independent` holds indices of affinely
/// independent input points spanning the hull (always `dim + 1` of them when
/// `dim > 0`, starting with point 0).
struct AffineHull {
    points: Vec<DVector<f64>>,
    dim: usize,
    independent: Vec<usize>,
}

fn project_to_affine_hull(vertices: &[VecN]) -> AffineHull {
    let n = vertices.len();
    let ambient = vertices.first().map_or(0, |v| v.dim());
    let origin = DVector::from_fn(ambient, |i, _| vertices[0].get(i));

    let mut basis: Vec<DVector<f64>> = Vec::new();
    let mut independent = vec![0usize];
    for (i, vertex) in vertices.iter().enumerate().skip(1) {
        let v = DVector::from_fn(ambient, |k, _| vertex.get(k));
        let mut diff = &v - &origin;
        for b in &basis {
            let dot = diff.dot(b);
            diff -= b * dot;
        }
        let norm = diff.norm();
        if norm > EPSILON {
            basis.push(diff / norm);
            independent.push(i);
        }
        if basis.len() >= ambient {
            break;
        }
    }

    let dim = basis.len();
    let mut points = Vec::with_capacity(n);
    for vertex in vertices {
        let v = DVector::from_fn(ambient, |k, _| vertex.get(k));
        let centered = &v - &origin;
        points.push(DVector::from_fn(dim, |k, _| centered.dot(&basis[k])));
    }

    AffineHull {
        points,
        dim,
        independent,
    }
}

/// A hull facet: a (d-1)-simplex with an outward unit normal
struct Facet {
    vertices: Vec<usize>,
    normal: DVector<f64>,
    offset: f64,
}

impl Facet {
    /// Build a facet from `dim` vertex indices, oriented away from `interior`
    ///
    /// The normal is the null space of the edge matrix, found via SVD.
    /// `interior` must be a point strictly inside the hull.
    fn new(vertex_indices: &[usize], points: &[DVector<f64>], interior: &DVector<f64>) -> Option<Self> {
        let dim = points.first()?.len();
        if vertex_indices.len() != dim {
            return None;
        }

        let p0 = &points[vertex_indices[0]];
        // Edge matrix padded to square with a zero row, so the SVD yields a
        // full V^T whose last row spans the null space
        let mut rows = Vec::with_capacity(dim * dim);
        for &vi in &vertex_indices[1..] {
            let diff = &points[vi] - p0;
            rows.extend(diff.iter().copied());
        }
        rows.extend(std::iter::repeat(0.0).take(dim));
        let mat = DMatrix::from_row_slice(dim, dim, &rows);

        let svd = mat.try_svd(false, true, 1e-8, 200)?;
        let v_t = svd.v_t?;
        let mut normal = v_t.row(dim - 1).transpose();

        let to_interior = interior - p0;
        if to_interior.dot(&normal) > 0.0 {
            normal = -normal;
        }
        let offset = normal.dot(p0);

        Some(Facet {
            vertices: vertex_indices.to_vec(),
            normal,
            offset,
        })
    }

    fn is_visible(&self, point: &DVector<f64>) -> bool {
        self.normal.dot(point) - self.offset > EPSILON
    }
}

/// Incremental convex hull in the effective dimension
///
/// Seeds the hull with the affinely independent simplex found during the
/// basis computation, then inserts remaining points one at a time, replacing
/// the visible facet patch with a cone from the horizon ridges.
fn incremental_hull(hull: &AffineHull) -> Vec<Facet> {
    let points = &hull.points;
    let dim = hull.dim;
    let n = points.len();

    // Orientation reference: the seed simplex centroid. It is interior to
    // the seed and stays interior as the hull only ever grows, whereas the
    // whole-set centroid can fall outside the seed (a cube's seed
    // tetrahedron sits in one corner) and would flip the seed facets inward.
    let mut interior = DVector::zeros(dim);
    for &idx in &hull.independent {
        interior += &points[idx];
    }
    interior /= hull.independent.len() as f64;

    let seed: HashSet<usize> = hull.independent.iter().copied().collect();
    let mut facets: Vec<Facet> = Vec::new();
    for skip in 0..hull.independent.len() {
        let face_indices: Vec<usize> = hull
            .independent
            .iter()
            .enumerate()
            .filter(|(pos, _)| *pos != skip)
            .map(|(_, &idx)| idx)
            .collect();
        if let Some(facet) = Facet::new(&face_indices, points, &interior) {
            facets.push(facet);
        }
    }

    for i in 0..n {
        if seed.contains(&i) {
            continue;
        }
        let point = &points[i];

        let visible: Vec<usize> = facets
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_visible(point))
            .map(|(idx, _)| idx)
            .collect();
        if visible.is_empty() {
            continue;
        }

        // Horizon ridges appear in exactly one visible facet; ridges shared
        // by two visible facets are interior to the patch being removed
        let mut ridge_counts: HashMap<Vec<usize>, usize> = HashMap::new();
        for &fi in &visible {
            let facet = &facets[fi];
            for skip in 0..dim {
                let mut ridge: Vec<usize> = facet
                    .vertices
                    .iter()
                    .enumerate()
                    .filter(|(pos, _)| *pos != skip)
                    .map(|(_, &v)| v)
                    .collect();
                ridge.sort_unstable();
                *ridge_counts.entry(ridge).or_insert(0) += 1;
            }
        }
        let horizon: Vec<Vec<usize>> = ridge_counts
            .into_iter()
            .filter(|(_, count)| *count == 1)
            .map(|(ridge, _)| ridge)
            .collect();

        let visible_set: HashSet<usize> = visible.into_iter().collect();
        facets = facets
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !visible_set.contains(idx))
            .map(|(_, f)| f)
            .collect();

        for mut ridge in horizon {
            ridge.push(i);
            if let Some(facet) = Facet::new(&ridge, points, &interior) {
                facets.push(facet);
            }
        }
    }

    facets
}

fn cross3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Orient a triangle outward relative to the 3D-projected point-set centroid
fn orient_outward(vertices: &[VecN], centroid3: [f64; 3], tri: [usize; 3]) -> Face {
    let p: Vec<[f64; 3]> = tri.iter().map(|&i| vertices[i].xyz()).collect();
    let u = [p[1][0] - p[0][0], p[1][1] - p[0][1], p[1][2] - p[0][2]];
    let v = [p[2][0] - p[0][0], p[2][1] - p[0][1], p[2][2] - p[0][2]];
    let normal = cross3(u, v);
    let center = [
        (p[0][0] + p[1][0] + p[2][0]) / 3.0 - centroid3[0],
        (p[0][1] + p[1][1] + p[2][1]) / 3.0 - centroid3[1],
        (p[0][2] + p[1][2] + p[2][2]) / 3.0 - centroid3[2],
    ];
    let dot = normal[0] * center[0] + normal[1] * center[1] + normal[2] * center[2];
    if dot >= 0.0 {
        Face::new(tri)
    } else {
        Face::new([tri[0], tri[2], tri[1]])
    }
}

/// Extract deduplicated boundary triangles of a point set's convex hull
///
/// Fewer than 4 points, or a point set whose affine hull has dimension below
/// 3, yields an empty face list. Hull facets in dimension 3 are already
/// triangles; in higher dimensions each facet simplex contributes all its
/// vertex triples, deduplicated across adjacent facets by canonical key.
pub fn extract_hull_faces(vertices: &[VecN]) -> Vec<Face> {
    if vertices.len() < 4 {
        return Vec::new();
    }

    let hull = project_to_affine_hull(vertices);
    if hull.dim < 3 {
        debug!(
            "hull extraction skipped: effective dimension {} below 3",
            hull.dim
        );
        return Vec::new();
    }

    let facets = incremental_hull(&hull);

    let mut centroid3 = [0.0f64; 3];
    for v in vertices {
        let xyz = v.xyz();
        centroid3[0] += xyz[0];
        centroid3[1] += xyz[1];
        centroid3[2] += xyz[2];
    }
    let count = vertices.len() as f64;
    centroid3 = [centroid3[0] / count, centroid3[1] / count, centroid3[2] / count];

    let mut seen: HashSet<[usize; 3]> = HashSet::new();
    let mut faces = Vec::new();
    for facet in &facets {
        let fv = &facet.vertices;
        for i in 0..fv.len() {
            for j in (i + 1)..fv.len() {
                for k in (j + 1)..fv.len() {
                    let mut key = [fv[i], fv[j], fv[k]];
                    key.sort_unstable();
                    if seen.insert(key) {
                        faces.push(orient_outward(vertices, centroid3, key));
                    }
                }
            }
        }
    }

    let mut covered = vec![false; vertices.len()];
    for face in &faces {
        for &i in &face.indices {
            covered[i] = true;
        }
    }
    let uncovered = covered.iter().filter(|&&c| !c).count();
    if uncovered > 0 {
        warn!("{} of {} hull input points belong to no face", uncovered, vertices.len());
    }

    faces
}
