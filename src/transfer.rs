//! Flat-buffer transfer boundary
//!
//! Face extraction may be dispatched to a background worker for
//! responsiveness. The kernel side of that contract is kept simple: vertex
//! and edge arrays flatten into contiguous numeric buffers for zero-copy
//! transfer, calls are idempotent and side-effect-free, and every job carries
//! a request identifier so the caller can discard superseded results.

use hypervis_geom::{extract_hull_faces, triangles_from_edges, Face};
use hypervis_math::{Position3, VecN};

/// Monotonic identifier for face-extraction jobs
///
/// The kernel makes no ordering guarantee; the caller compares identifiers
/// and drops any result older than the latest request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Flatten vertices into one D-strided float buffer
pub fn flatten_vertices(vertices: &[VecN], dimension: usize) -> Vec<f64> {
    let mut flat = Vec::with_capacity(vertices.len() * dimension);
    for v in vertices {
        for i in 0..dimension {
            flat.push(v.get(i));
        }
    }
    flat
}

/// Rebuild vertices from a D-strided float buffer
///
/// A trailing partial stride is dropped rather than padded.
pub fn inflate_vertices(flat: &[f64], dimension: usize) -> Vec<VecN> {
    if dimension == 0 {
        return Vec::new();
    }
    flat.chunks_exact(dimension).map(VecN::from_slice).collect()
}

/// Flatten index pairs into one contiguous index buffer
pub fn flatten_edges(edges: &[[usize; 2]]) -> Vec<u32> {
    let mut flat = Vec::with_capacity(edges.len() * 2);
    for &[a, b] in edges {
        flat.push(a as u32);
        flat.push(b as u32);
    }
    flat
}

/// Rebuild index pairs from a contiguous index buffer
pub fn inflate_edges(flat: &[u32]) -> Vec<[usize; 2]> {
    flat.chunks_exact(2)
        .map(|pair| [pair[0] as usize, pair[1] as usize])
        .collect()
}

/// Flatten faces into one contiguous index buffer
pub fn flatten_faces(faces: &[Face]) -> Vec<u32> {
    let mut flat = Vec::with_capacity(faces.len() * 3);
    for face in faces {
        for &i in &face.indices {
            flat.push(i as u32);
        }
    }
    flat
}

/// View projected positions as raw bytes for upload or transfer
pub fn position_bytes(positions: &[Position3]) -> &[u8] {
    bytemuck::cast_slice(positions)
}

/// Source connectivity for a face-extraction job
#[derive(Clone, Debug)]
pub enum FaceSource {
    /// Triangulate the convex hull boundary of the vertex set
    ConvexHull,
    /// Take the 3-cliques of an explicit edge graph
    EdgeGraph(Vec<[usize; 2]>),
}

/// A face-extraction job in transfer form
#[derive(Clone, Debug)]
pub struct FaceRequest {
    pub id: RequestId,
    /// D-strided vertex buffer
    pub vertices: Vec<f64>,
    pub dimension: usize,
    pub source: FaceSource,
}

/// The result of a face-extraction job, in transfer form
#[derive(Clone, Debug)]
pub struct FaceResponse {
    pub id: RequestId,
    /// Triangle index triples, flattened
    pub faces: Vec<u32>,
}

/// Run one face-extraction job
///
/// Pure function of the request, so jobs can be cancelled and reissued
/// freely by the dispatch layer.
pub fn extract_faces_job(request: &FaceRequest) -> FaceResponse {
    let vertices = inflate_vertices(&request.vertices, request.dimension);
    let faces = match &request.source {
        FaceSource::ConvexHull => extract_hull_faces(&vertices),
        FaceSource::EdgeGraph(edges) => triangles_from_edges(&vertices, edges),
    };
    FaceResponse {
        id: request.id,
        faces: flatten_faces(&faces),
    }
}
