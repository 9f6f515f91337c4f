//! Dimension-generic math for the hypervis kernel
//!
//! This crate provides the numeric core shared by every geometry generator:
//!
//! ## Core Types
//!
//! - [`VecN`] - N-dimensional vector with inline storage (3 ≤ D ≤ 11)
//! - [`MatN`] - N×N row-major matrix for rotation transforms
//! - [`RotationComposer`] - version-gated composition of named plane rotations
//! - [`Projection`] / [`Position3`] - perspective/orthographic projection to 3D
//! - [`Hyperspherical`] - radius + (D-1)-angle representation

mod vecn;
mod matn;
pub mod rotation;
pub mod projection;
pub mod hypersphere;

pub use vecn::{VecN, MAX_DIM, MIN_DIM, NEAR_ZERO};
pub use matn::MatN;
pub use rotation::{
    axis_label, compose_rotation, normalize_angle, planes_for_dimension, RotationComposer,
    RotationPlane,
};
pub use projection::{
    project, project_edges, project_vertices, Position3, Projection, ProjectionMode,
    DEFAULT_PROJECTION_DISTANCE, MIN_SAFE_DISTANCE,
};
pub use hypersphere::{from_hyperspherical, to_hyperspherical, Hyperspherical};
