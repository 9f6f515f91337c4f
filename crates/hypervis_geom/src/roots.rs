//! Classical root-system generators
//!
//! Three families with closed-form cardinalities used as correctness oracles:
//! - type A_{n-1} in R^n: e_i - e_j for i != j, n(n-1) roots
//! - type D_n: ±e_i ± e_j for i < j, 2n(n-1) roots, n >= 4
//! - type E8: the 240 roots of the E8 lattice, fixed to dimension 8
//!
//! All roots have length sqrt(2) before normalization; they are rescaled to a
//! uniform target length of `scale`. Edges connect each root to its nearest
//! neighbors and faces are the triangles of that edge graph.

use std::fmt;

use hypervis_math::{VecN, MAX_DIM, MIN_DIM};
use serde::{Deserialize, Serialize};

use crate::edges::build_short_edges;
use crate::error::GeometryError;
use crate::faces::triangles_from_edges;
use crate::geometry::{GeometryKind, GeometryMetadata, NdGeometry};

/// Distance tolerance for the minimal nonzero edge class
const SHORT_EDGE_EPSILON: f64 = 0.01;

/// The supported root-system families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RootType {
    A,
    D,
    E8,
}

impl fmt::Display for RootType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootType::A => write!(f, "A"),
            RootType::D => write!(f, "D"),
            RootType::E8 => write!(f, "E8"),
        }
    }
}

/// Generator configuration for a root system
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RootSystemConfig {
    pub root_type: RootType,
    /// Uniform target length for all roots
    pub scale: f64,
}

impl Default for RootSystemConfig {
    fn default() -> Self {
        Self {
            root_type: RootType::A,
            scale: 1.0,
        }
    }
}

fn check_root_dimension(root_type: RootType, dimension: usize) -> Result<(), GeometryError> {
    if dimension < MIN_DIM || dimension > MAX_DIM {
        return Err(GeometryError::DimensionOutOfRange {
            dimension,
            min: MIN_DIM,
            max: MAX_DIM,
        });
    }
    let valid = match root_type {
        RootType::A => true,
        RootType::D => dimension >= 4,
        RootType::E8 => dimension == 8,
    };
    if valid {
        Ok(())
    } else {
        Err(GeometryError::RootSystemDimension {
            root_type,
            dimension,
        })
    }
}

/// Closed-form root count for a (type, dimension) pair
pub fn root_count(root_type: RootType, dimension: usize) -> Result<usize, GeometryError> {
    check_root_dimension(root_type, dimension)?;
    Ok(match root_type {
        RootType::A => dimension * (dimension - 1),
        RootType::D => 2 * dimension * (dimension - 1),
        RootType::E8 => 240,
    })
}

/// A_{n-1} roots: e_i - e_j for all ordered pairs i != j
fn generate_a_roots(dimension: usize, scale: f64) -> Vec<VecN> {
    let normalizer = 2.0f64.sqrt();
    let mut roots = Vec::with_capacity(dimension * (dimension - 1));
    for i in 0..dimension {
        for j in 0..dimension {
            if i == j {
                continue;
            }
            let mut v = VecN::zeros(dimension);
            v.set(i, scale / normalizer);
            v.set(j, -scale / normalizer);
            roots.push(v);
        }
    }
    roots
}

const SIGN_PAIRS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];

/// D_n roots: ±e_i ± e_j for i < j
fn generate_d_roots(dimension: usize, scale: f64) -> Vec<VecN> {
    let normalizer = 2.0f64.sqrt();
    let mut roots = Vec::with_capacity(2 * dimension * (dimension - 1));
    for i in 0..dimension {
        for j in (i + 1)..dimension {
            for (si, sj) in SIGN_PAIRS {
                let mut v = VecN::zeros(dimension);
                v.set(i, si * scale / normalizer);
                v.set(j, sj * scale / normalizer);
                roots.push(v);
            }
        }
    }
    roots
}

/// E8 roots: 112 D8-style integer roots plus 128 half-integer roots
/// with an even number of minus signs
fn generate_e8_roots(scale: f64) -> Vec<VecN> {
    const DIM: usize = 8;
    // Both families have raw length sqrt(2): sqrt(8 * 0.25) = sqrt(2)
    let normalizer = 2.0f64.sqrt();
    let mut roots = Vec::with_capacity(240);

    for i in 0..DIM {
        for j in (i + 1)..DIM {
            for (si, sj) in SIGN_PAIRS {
                let mut v = VecN::zeros(DIM);
                v.set(i, si * scale / normalizer);
                v.set(j, sj * scale / normalizer);
                roots.push(v);
            }
        }
    }

    for mask in 0u32..256 {
        if mask.count_ones() % 2 != 0 {
            continue;
        }
        let mut v = VecN::zeros(DIM);
        for i in 0..DIM {
            let sign = if mask & (1 << i) != 0 { -1.0 } else { 1.0 };
            v.set(i, sign * 0.5 * scale / normalizer);
        }
        roots.push(v);
    }

    roots
}

/// Generate a complete root-system geometry: roots, short edges, triangles
///
/// Invalid (type, dimension) pairs fail loudly; they indicate a caller bug,
/// not a data condition.
pub fn generate_root_system(
    dimension: usize,
    config: &RootSystemConfig,
) -> Result<NdGeometry, GeometryError> {
    check_root_dimension(config.root_type, dimension)?;

    let (vertices, name, formula) = match config.root_type {
        RootType::A => (
            generate_a_roots(dimension, config.scale),
            format!("A{} root system", dimension - 1),
            "n(n-1) roots".to_string(),
        ),
        RootType::D => (
            generate_d_roots(dimension, config.scale),
            format!("D{} root system", dimension),
            "2n(n-1) roots".to_string(),
        ),
        RootType::E8 => (
            generate_e8_roots(config.scale),
            "E8 root system".to_string(),
            "240 roots".to_string(),
        ),
    };

    let edges = build_short_edges(&vertices, SHORT_EDGE_EPSILON);
    let faces = triangles_from_edges(&vertices, &edges);

    let geometry = NdGeometry {
        vertices,
        edges,
        dimension,
        kind: GeometryKind::RootSystem,
        faces: Some(faces),
        cofaces: Vec::new(),
        is_point_cloud: false,
        metadata: GeometryMetadata::new(name, formula)
            .with_property("root_type", config.root_type.to_string())
            .with_property("dimension", dimension.to_string()),
    };
    geometry.validate()?;
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_root_counts() {
        assert_eq!(root_count(RootType::A, 4).unwrap(), 12);
        assert_eq!(root_count(RootType::D, 4).unwrap(), 24);
        assert_eq!(root_count(RootType::D, 6).unwrap(), 60);
        assert_eq!(root_count(RootType::E8, 8).unwrap(), 240);
    }

    #[test]
    fn test_invalid_pairs_rejected() {
        assert!(matches!(
            root_count(RootType::D, 3),
            Err(GeometryError::RootSystemDimension { .. })
        ));
        assert!(matches!(
            root_count(RootType::E8, 7),
            Err(GeometryError::RootSystemDimension { .. })
        ));
        assert!(root_count(RootType::A, 12).is_err());
    }

    #[test]
    fn test_generated_counts_match_formulas() {
        for (root_type, dim) in [(RootType::A, 5), (RootType::D, 4), (RootType::E8, 8)] {
            let config = RootSystemConfig {
                root_type,
                scale: 1.0,
            };
            let g = generate_root_system(dim, &config).unwrap();
            assert_eq!(g.vertex_count(), root_count(root_type, dim).unwrap());
        }
    }

    #[test]
    fn test_all_roots_uniform_length() {
        for (root_type, dim) in [(RootType::A, 6), (RootType::D, 5), (RootType::E8, 8)] {
            let config = RootSystemConfig {
                root_type,
                scale: 2.5,
            };
            let g = generate_root_system(dim, &config).unwrap();
            for v in &g.vertices {
                assert_relative_eq!(v.length(), 2.5, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_e8_family_partition() {
        let roots = generate_e8_roots(1.0);
        assert_eq!(roots.len(), 240);
        // Integer family: exactly two nonzero components
        let integer = roots
            .iter()
            .filter(|v| (0..8).filter(|&i| v.get(i) != 0.0).count() == 2)
            .count();
        assert_eq!(integer, 112);
        // Half-integer family: all components nonzero
        let half = roots
            .iter()
            .filter(|v| (0..8).all(|i| v.get(i) != 0.0))
            .count();
        assert_eq!(half, 128);
    }

    #[test]
    fn test_root_system_has_edges_and_faces() {
        let config = RootSystemConfig {
            root_type: RootType::A,
            scale: 1.0,
        };
        let g = generate_root_system(4, &config).unwrap();
        assert!(g.edge_count() > 0);
        assert!(g.face_count() > 0);
    }

    #[test]
    fn test_d4_edge_regularity() {
        // D4 root polytope is the 24-cell: every root has 8 nearest neighbors
        let config = RootSystemConfig {
            root_type: RootType::D,
            scale: 1.0,
        };
        let g = generate_root_system(4, &config).unwrap();
        let mut degree = vec![0usize; g.vertex_count()];
        for &[a, b] in &g.edges {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 8));
    }
}
