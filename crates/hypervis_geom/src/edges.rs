//! Edge builders for structured point sets
//!
//! Two strategies:
//! - short edges: connect vertices in the minimal nonzero distance class,
//!   revealing the natural connectivity of root systems
//! - k-nearest-neighbor edges: wireframe structure for arbitrary point clouds

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use hypervis_math::VecN;

/// Squared distances below this are treated as coincident points
const COINCIDENT_SQ: f64 = 1e-9;

/// Connect all vertex pairs whose distance lies in the minimal nonzero class
///
/// Finds the minimum nonzero pairwise distance, then connects every pair
/// within `min_dist * (1 + epsilon_factor)`. Fewer than two points, or a set
/// of fully coincident points, yields no edges.
pub fn build_short_edges(vertices: &[VecN], epsilon_factor: f64) -> Vec<[usize; 2]> {
    let n = vertices.len();
    if n < 2 {
        return Vec::new();
    }

    let mut min_dist_sq = f64::MAX;
    for i in 0..n {
        for j in (i + 1)..n {
            let d2 = vertices[i].distance_squared(&vertices[j]);
            if d2 > COINCIDENT_SQ && d2 < min_dist_sq {
                min_dist_sq = d2;
            }
        }
    }
    if min_dist_sq == f64::MAX {
        return Vec::new();
    }

    let threshold = min_dist_sq.sqrt() * (1.0 + epsilon_factor);
    let threshold_sq = threshold * threshold;

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if vertices[i].distance_squared(&vertices[j]) <= threshold_sq {
                edges.push([i, j]);
            }
        }
    }
    edges
}

/// Max-heap entry keeping the k smallest distances
#[derive(PartialEq)]
struct DistEntry {
    index: usize,
    dist_sq: f64,
}

impl Eq for DistEntry {}

impl PartialOrd for DistEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .partial_cmp(&other.dist_sq)
            .unwrap_or(Ordering::Equal)
    }
}

/// Connect each point to its k nearest neighbors
///
/// Maintains a bounded max-heap per point (O(n² log k)) and deduplicates the
/// resulting undirected pairs.
pub fn build_knn_edges(vertices: &[VecN], k: usize) -> Vec<[usize; 2]> {
    let n = vertices.len();
    if n < 2 || k == 0 {
        return Vec::new();
    }
    let effective_k = k.min(n - 1);

    let mut edge_set: HashSet<[usize; 2]> = HashSet::new();
    for i in 0..n {
        let mut heap: BinaryHeap<DistEntry> = BinaryHeap::with_capacity(effective_k + 1);
        for j in 0..n {
            if j == i {
                continue;
            }
            let d2 = vertices[i].distance_squared(&vertices[j]);
            if heap.len() < effective_k {
                heap.push(DistEntry { index: j, dist_sq: d2 });
            } else if let Some(top) = heap.peek() {
                if d2 < top.dist_sq {
                    heap.pop();
                    heap.push(DistEntry { index: j, dist_sq: d2 });
                }
            }
        }
        for entry in heap {
            let j = entry.index;
            edge_set.insert(if i < j { [i, j] } else { [j, i] });
        }
    }

    let mut edges: Vec<[usize; 2]> = edge_set.into_iter().collect();
    edges.sort_unstable();
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_2d() -> Vec<VecN> {
        vec![
            VecN::from_slice(&[0.0, 0.0]),
            VecN::from_slice(&[1.0, 0.0]),
            VecN::from_slice(&[1.0, 1.0]),
            VecN::from_slice(&[0.0, 1.0]),
        ]
    }

    #[test]
    fn test_short_edges_square() {
        // Sides are length 1, diagonals sqrt(2); 1% tolerance keeps sides only
        let edges = build_short_edges(&square_2d(), 0.01);
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn test_short_edges_empty_and_single() {
        assert!(build_short_edges(&[], 0.01).is_empty());
        assert!(build_short_edges(&[VecN::from_slice(&[1.0, 2.0, 3.0])], 0.01).is_empty());
    }

    #[test]
    fn test_short_edges_coincident_points() {
        let p = VecN::from_slice(&[1.0, 1.0, 1.0]);
        assert!(build_short_edges(&[p, p, p], 0.01).is_empty());
    }

    #[test]
    fn test_short_edges_equilateral() {
        let triangle = vec![
            VecN::from_slice(&[0.0, 0.0]),
            VecN::from_slice(&[1.0, 0.0]),
            VecN::from_slice(&[0.5, 0.866025403784]),
        ];
        assert_eq!(build_short_edges(&triangle, 0.01).len(), 3);
    }

    #[test]
    fn test_knn_edges_square() {
        let edges = build_knn_edges(&square_2d(), 2);
        // Each corner's 2 nearest are the adjacent corners: the 4 sides
        assert_eq!(edges.len(), 4);
        for [a, b] in &edges {
            assert!(a < b);
        }
    }

    #[test]
    fn test_knn_edges_k_capped() {
        let triangle = vec![
            VecN::from_slice(&[0.0, 0.0]),
            VecN::from_slice(&[1.0, 0.0]),
            VecN::from_slice(&[0.5, 0.866]),
        ];
        let edges = build_knn_edges(&triangle, 10);
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_knn_edges_degenerate() {
        assert!(build_knn_edges(&[], 4).is_empty());
        assert!(build_knn_edges(&square_2d(), 0).is_empty());
    }
}
