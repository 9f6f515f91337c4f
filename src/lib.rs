//! hypervis - N-dimensional geometry visualization kernel
//!
//! Generates polytopes, root systems, and escape-time fractals in 3 to 11
//! dimensions, then rotates, projects, and slices them into render-ready 3D
//! data. The heavy lifting lives in the member crates:
//!
//! - `hypervis_math`: vectors, rotation composition, projection,
//!   hyperspherical coordinates
//! - `hypervis_geom`: geometry records, polytope and root-system generators,
//!   cross-sections, convex-hull face extraction
//! - `hypervis_fractal`: hyperbulb escape-time sampling
//!
//! This crate adds the configuration layer and the flat-buffer transfer
//! boundary used when face extraction is dispatched to a worker.

pub mod config;
pub mod transfer;

pub use config::{AppConfig, ConfigError};
pub use transfer::{
    extract_faces_job, flatten_edges, flatten_faces, flatten_vertices, inflate_edges,
    inflate_vertices, position_bytes, FaceRequest, FaceResponse, FaceSource, RequestId,
};

pub use hypervis_fractal as fractal;
pub use hypervis_geom as geom;
pub use hypervis_math as math;
