//! Analytic polytope generators
//!
//! Hypercube, regular simplex, and cross-polytope in any supported dimension.
//! All three are centered at the origin. Each generator also emits the 2-face
//! adjacency (`cofaces`) the cross-section engine needs to reconnect
//! interpolated points, expressed as edge-index lists per 2-face.

use std::collections::HashMap;

use hypervis_math::{VecN, MAX_DIM, MIN_DIM};
use itertools::Itertools;

use crate::error::GeometryError;
use crate::faces::triangles_from_edges;
use crate::geometry::{Face, GeometryKind, GeometryMetadata, NdGeometry};

fn check_dimension(dimension: usize) -> Result<(), GeometryError> {
    if dimension < MIN_DIM || dimension > MAX_DIM {
        return Err(GeometryError::DimensionOutOfRange {
            dimension,
            min: MIN_DIM,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// Lookup table from canonical vertex pair to edge index
fn edge_index_map(edges: &[[usize; 2]]) -> HashMap<[usize; 2], usize> {
    edges
        .iter()
        .enumerate()
        .map(|(idx, &[a, b])| (if a < b { [a, b] } else { [b, a] }, idx))
        .collect()
}

fn lookup_edge(map: &HashMap<[usize; 2], usize>, a: usize, b: usize) -> Option<usize> {
    map.get(&if a < b { [a, b] } else { [b, a] }).copied()
}

/// Edge-index cofaces for a list of triangular 2-faces
fn triangle_cofaces(faces: &[Face], edge_map: &HashMap<[usize; 2], usize>) -> Vec<Vec<usize>> {
    faces
        .iter()
        .filter_map(|face| {
            let [a, b, c] = face.indices;
            let e1 = lookup_edge(edge_map, a, b)?;
            let e2 = lookup_edge(edge_map, b, c)?;
            let e3 = lookup_edge(edge_map, a, c)?;
            Some(vec![e1, e2, e3])
        })
        .collect()
}

/// Generate the hypercube with vertices at all sign combinations of `scale`
///
/// Vertex `i` has coordinate `+scale` on axis `j` exactly when bit `j` of `i`
/// is set; edges connect vertices at Hamming distance 1. The square 2-faces
/// become cofaces of their four bounding edges.
pub fn generate_hypercube(dimension: usize, scale: f64) -> Result<NdGeometry, GeometryError> {
    check_dimension(dimension)?;

    let num_vertices = 1usize << dimension;
    let mut vertices = Vec::with_capacity(num_vertices);
    for i in 0..num_vertices {
        let mut v = VecN::zeros(dimension);
        for j in 0..dimension {
            v.set(j, if (i >> j) & 1 == 1 { scale } else { -scale });
        }
        vertices.push(v);
    }

    let mut edges = Vec::new();
    for i in 0..num_vertices {
        for j in 0..dimension {
            let neighbor = i ^ (1 << j);
            if neighbor > i {
                edges.push([i, neighbor]);
            }
        }
    }
    let edge_map = edge_index_map(&edges);

    // Square 2-faces: pick a pair of free axes, fix the remaining bits
    let mut cofaces = Vec::new();
    for (a, b) in (0..dimension).tuple_combinations() {
        let bit_a = 1usize << a;
        let bit_b = 1usize << b;
        let free = bit_a | bit_b;
        for fixed in 0..num_vertices {
            if fixed & free != 0 {
                continue;
            }
            let v00 = fixed;
            let v10 = fixed | bit_a;
            let v01 = fixed | bit_b;
            let v11 = fixed | free;
            let square: Option<Vec<usize>> = [
                lookup_edge(&edge_map, v00, v10),
                lookup_edge(&edge_map, v00, v01),
                lookup_edge(&edge_map, v10, v11),
                lookup_edge(&edge_map, v01, v11),
            ]
            .into_iter()
            .collect();
            if let Some(square) = square {
                cofaces.push(square);
            }
        }
    }

    let geometry = NdGeometry {
        vertices,
        edges,
        dimension,
        kind: GeometryKind::Hypercube,
        faces: None,
        cofaces,
        is_point_cloud: false,
        metadata: GeometryMetadata::new(
            format!("{}-cube", dimension),
            "2^n vertices, n*2^(n-1) edges",
        )
        .with_property("dimension", dimension.to_string()),
    };
    geometry.validate()?;
    Ok(geometry)
}

/// Generate the regular simplex: n+1 unit vectors with pairwise dot -1/n
///
/// Built by the iterative Cholesky-style fill of the Gram matrix. The vertex
/// sum is zero, so the simplex is centered at the origin.
pub fn generate_simplex(dimension: usize, scale: f64) -> Result<NdGeometry, GeometryError> {
    check_dimension(dimension)?;

    let n = dimension;
    let target_dot = -1.0 / n as f64;
    let mut coords = vec![vec![0.0f64; n]; n + 1];
    for i in 0..n {
        let mut sq = 0.0;
        for k in 0..i {
            sq += coords[i][k] * coords[i][k];
        }
        let diag = (1.0 - sq).max(0.0).sqrt();
        coords[i][i] = diag;
        for j in (i + 1)..=n {
            let mut dot = 0.0;
            for k in 0..i {
                dot += coords[i][k] * coords[j][k];
            }
            coords[j][i] = (target_dot - dot) / diag;
        }
    }

    let vertices: Vec<VecN> = coords
        .iter()
        .map(|c| VecN::from_slice(c) * scale)
        .collect();

    // Complete graph: every vertex pair is an edge
    let mut edges = Vec::new();
    for i in 0..=n {
        for j in (i + 1)..=n {
            edges.push([i, j]);
        }
    }
    let edge_map = edge_index_map(&edges);

    // Every vertex triple is a triangular 2-face
    let faces = triangles_from_edges(&vertices, &edges);
    let cofaces = triangle_cofaces(&faces, &edge_map);

    let geometry = NdGeometry {
        vertices,
        edges,
        dimension,
        kind: GeometryKind::Simplex,
        faces: Some(faces),
        cofaces,
        is_point_cloud: false,
        metadata: GeometryMetadata::new(
            format!("{}-simplex", dimension),
            "n+1 vertices, C(n+1,2) edges",
        )
        .with_property("dimension", dimension.to_string()),
    };
    geometry.validate()?;
    Ok(geometry)
}

/// Generate the cross-polytope with vertices at ±scale on each axis
///
/// Vertices `2i` and `2i+1` are the positive and negative poles of axis `i`;
/// every non-antipodal pair is an edge and every triple on distinct axes is a
/// triangular 2-face.
pub fn generate_cross_polytope(dimension: usize, scale: f64) -> Result<NdGeometry, GeometryError> {
    check_dimension(dimension)?;

    let mut vertices = Vec::with_capacity(2 * dimension);
    for i in 0..dimension {
        let mut pos = VecN::zeros(dimension);
        pos.set(i, scale);
        vertices.push(pos);
        let mut neg = VecN::zeros(dimension);
        neg.set(i, -scale);
        vertices.push(neg);
    }

    let n = vertices.len();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if i / 2 != j / 2 {
                edges.push([i, j]);
            }
        }
    }
    let edge_map = edge_index_map(&edges);

    let faces = triangles_from_edges(&vertices, &edges);
    let cofaces = triangle_cofaces(&faces, &edge_map);

    let geometry = NdGeometry {
        vertices,
        edges,
        dimension,
        kind: GeometryKind::CrossPolytope,
        faces: Some(faces),
        cofaces,
        is_point_cloud: false,
        metadata: GeometryMetadata::new(
            format!("{}-orthoplex", dimension),
            "2n vertices, 2n(n-1) edges",
        )
        .with_property("dimension", dimension.to_string()),
    };
    geometry.validate()?;
    Ok(geometry)
}
