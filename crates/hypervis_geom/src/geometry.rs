//! The N-dimensional geometry record
//!
//! Every generator produces an [`NdGeometry`]: an immutable snapshot of
//! vertices, edge connectivity, optional triangular faces, and descriptive
//! metadata. Parameter changes produce a new record rather than mutating an
//! existing one; scratch buffers stay inside the generators.

use std::collections::BTreeMap;

use hypervis_math::{VecN, MAX_DIM, MIN_DIM};

use crate::error::GeometryError;

/// A triangular face, three vertex indices
///
/// Used uniformly regardless of source algorithm (hull extraction,
/// root-system triangulation, or analytic generation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    /// Indices into the parent geometry's vertex array
    pub indices: [usize; 3],
}

impl Face {
    /// Create a face with the given vertex indices
    #[inline]
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// Create a face with sorted vertex indices (canonical form)
    pub fn new_canonical(mut indices: [usize; 3]) -> Self {
        indices.sort_unstable();
        Self { indices }
    }

    /// The indices as a sorted array (canonical form, for deduplication)
    pub fn canonical(&self) -> [usize; 3] {
        let mut sorted = self.indices;
        sorted.sort_unstable();
        sorted
    }
}

/// Tag identifying the generator family that produced a geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    Hypercube,
    Simplex,
    CrossPolytope,
    RootSystem,
    Hyperbulb,
}

/// Descriptive metadata attached to a geometry record
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryMetadata {
    /// Human-readable name, e.g. "D4 root system"
    pub name: String,
    /// Closed-form description, e.g. "2n(n-1) roots"
    pub formula: String,
    /// Free-form properties for the UI layer
    pub properties: BTreeMap<String, String>,
}

impl GeometryMetadata {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add one property (builder style)
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// An immutable N-dimensional geometry snapshot
#[derive(Clone, Debug)]
pub struct NdGeometry {
    /// Vertex positions, all of dimension `dimension`
    pub vertices: Vec<VecN>,
    /// Edges as vertex index pairs
    pub edges: Vec<[usize; 2]>,
    /// Ambient dimension, 3 ..= 11
    pub dimension: usize,
    /// Generator family tag
    pub kind: GeometryKind,
    /// Triangular faces, when the generator derives them
    pub faces: Option<Vec<Face>>,
    /// 2-face adjacency: for each 2-face of the polytope, the indices (into
    /// `edges`) of its bounding edges. Used by the cross-section engine to
    /// reconnect interpolated points; empty for point clouds and root systems.
    pub cofaces: Vec<Vec<usize>>,
    /// True for sampled point clouds: implies `edges` is empty and no
    /// implicit adjacency exists
    pub is_point_cloud: bool,
    /// Descriptive metadata
    pub metadata: GeometryMetadata,
}

impl NdGeometry {
    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces (0 when none were derived)
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.as_ref().map_or(0, |f| f.len())
    }

    /// Check the record's structural invariants
    ///
    /// Every generator calls this before handing the record out.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.dimension < MIN_DIM || self.dimension > MAX_DIM {
            return Err(GeometryError::DimensionOutOfRange {
                dimension: self.dimension,
                min: MIN_DIM,
                max: MAX_DIM,
            });
        }
        for v in &self.vertices {
            if v.dim() != self.dimension {
                return Err(GeometryError::InvalidGeometry(format!(
                    "vertex dimension {} does not match geometry dimension {}",
                    v.dim(),
                    self.dimension
                )));
            }
            if !v.is_finite() {
                return Err(GeometryError::InvalidGeometry(
                    "non-finite vertex component".to_string(),
                ));
            }
        }
        let n = self.vertices.len();
        for edge in &self.edges {
            if edge[0] >= n || edge[1] >= n {
                return Err(GeometryError::InvalidGeometry(format!(
                    "edge ({}, {}) out of bounds for {} vertices",
                    edge[0], edge[1], n
                )));
            }
        }
        if let Some(faces) = &self.faces {
            for face in faces {
                if face.indices.iter().any(|&i| i >= n) {
                    return Err(GeometryError::InvalidGeometry(format!(
                        "face {:?} out of bounds for {} vertices",
                        face.indices, n
                    )));
                }
            }
        }
        for coface in &self.cofaces {
            if coface.iter().any(|&e| e >= self.edges.len()) {
                return Err(GeometryError::InvalidGeometry(
                    "coface references edge out of bounds".to_string(),
                ));
            }
        }
        if self.is_point_cloud && !self.edges.is_empty() {
            return Err(GeometryError::InvalidGeometry(
                "point cloud must have no edges".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_geometry() -> NdGeometry {
        NdGeometry {
            vertices: vec![
                VecN::from_slice(&[0.0, 0.0, 0.0, 0.0]),
                VecN::from_slice(&[1.0, 0.0, 0.0, 0.0]),
            ],
            edges: vec![[0, 1]],
            dimension: 4,
            kind: GeometryKind::Hypercube,
            faces: None,
            cofaces: Vec::new(),
            is_point_cloud: false,
            metadata: GeometryMetadata::new("test", ""),
        }
    }

    #[test]
    fn test_face_canonical() {
        let face = Face::new([3, 1, 2]);
        assert_eq!(face.canonical(), [1, 2, 3]);
        assert_eq!(Face::new_canonical([3, 1, 2]).indices, [1, 2, 3]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(minimal_geometry().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_dimension() {
        let mut g = minimal_geometry();
        g.dimension = 12;
        assert!(matches!(
            g.validate(),
            Err(GeometryError::DimensionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_edge() {
        let mut g = minimal_geometry();
        g.edges.push([0, 9]);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_point_cloud_with_edges() {
        let mut g = minimal_geometry();
        g.is_point_cloud = true;
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_mismatched_vertex_dim() {
        let mut g = minimal_geometry();
        g.vertices.push(VecN::from_slice(&[0.0, 0.0, 0.0]));
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_metadata_builder() {
        let m = GeometryMetadata::new("Hypercube", "2^n vertices")
            .with_property("dimension", "4");
        assert_eq!(m.properties.get("dimension").unwrap(), "4");
    }
}
