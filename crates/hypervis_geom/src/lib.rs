//! N-dimensional geometry generation and boundary extraction
//!
//! This crate builds the geometry records the visualization pipeline
//! consumes: analytic polytopes, classical root systems, hyperplane
//! cross-sections, and convex-hull face triangulations. Everything operates
//! on [`hypervis_math::VecN`] vertices in 3 to 11 dimensions.

pub mod cross_section;
pub mod edges;
pub mod error;
pub mod faces;
pub mod geometry;
pub mod hull;
pub mod polytope;
pub mod roots;

pub use cross_section::{cross_section, CrossSectionResult};
pub use edges::{build_knn_edges, build_short_edges};
pub use error::GeometryError;
pub use faces::triangles_from_edges;
pub use geometry::{Face, GeometryKind, GeometryMetadata, NdGeometry};
pub use hull::extract_hull_faces;
pub use polytope::{generate_cross_polytope, generate_hypercube, generate_simplex};
pub use roots::{generate_root_system, root_count, RootSystemConfig, RootType};
