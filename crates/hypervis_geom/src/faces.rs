//! Triangular faces from an edge graph
//!
//! Root systems and other structured point sets get their renderable faces
//! from the 3-cliques of their edge graph. Winding is chosen so triangle
//! normals (in the first three coordinates) point away from the origin, which
//! is the centroid for every centered point set this kernel produces.

use hypervis_math::VecN;

use crate::geometry::Face;

/// Sorted adjacency lists from an undirected edge set
fn build_adjacency(vertex_count: usize, edges: &[[usize; 2]]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for &[u, v] in edges {
        if u < vertex_count && v < vertex_count && u != v {
            if !adjacency[u].contains(&v) {
                adjacency[u].push(v);
            }
            if !adjacency[v].contains(&u) {
                adjacency[v].push(u);
            }
        }
    }
    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
    }
    adjacency
}

fn cross3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot3(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Orient a triangle so its 3D-projected normal points away from the origin
fn oriented(vertices: &[VecN], v1: usize, v2: usize, v3: usize) -> Face {
    let p1 = vertices[v1].xyz();
    let p2 = vertices[v2].xyz();
    let p3 = vertices[v3].xyz();

    let u = [p2[0] - p1[0], p2[1] - p1[1], p2[2] - p1[2]];
    let v = [p3[0] - p1[0], p3[1] - p1[1], p3[2] - p1[2]];
    let normal = cross3(u, v);
    let center = [
        (p1[0] + p2[0] + p3[0]) / 3.0,
        (p1[1] + p2[1] + p3[1]) / 3.0,
        (p1[2] + p2[2] + p3[2]) / 3.0,
    ];

    if dot3(normal, center) >= 0.0 {
        Face::new([v1, v2, v3])
    } else {
        Face::new([v1, v3, v2])
    }
}

/// Find all triangles (3-cliques) of an edge graph
///
/// Enumerates each triangle exactly once by enforcing `v1 < v2 < v3` during
/// the search, so no post-hoc deduplication is needed.
pub fn triangles_from_edges(vertices: &[VecN], edges: &[[usize; 2]]) -> Vec<Face> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }

    let adjacency = build_adjacency(n, edges);
    let mut faces = Vec::new();

    for v1 in 0..n {
        let neighbors = &adjacency[v1];
        if neighbors.len() < 2 {
            continue;
        }
        for (a, &v2) in neighbors.iter().enumerate() {
            if v2 <= v1 {
                continue;
            }
            for &v3 in &neighbors[a + 1..] {
                if v3 <= v2 {
                    continue;
                }
                if adjacency[v2].binary_search(&v3).is_ok() {
                    faces.push(oriented(vertices, v1, v2, v3));
                }
            }
        }
    }
    faces
}
