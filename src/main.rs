//! hypervis - N-dimensional geometry pipeline
//!
//! Generates the configured geometry, applies the active rotations, projects
//! to 3D, and optionally slices 4D+ shapes, logging the stage statistics.

use hypervis::config::AppConfig;
use hypervis::transfer::{extract_faces_job, flatten_vertices, FaceRequest, FaceSource, RequestId};

use hypervis_fractal::{generate_hyperbulb, HyperbulbConfig};
use hypervis_geom::{
    cross_section, generate_cross_polytope, generate_hypercube, generate_root_system,
    generate_simplex, GeometryError, NdGeometry, RootSystemConfig,
};
use hypervis_math::{project_vertices, Projection, RotationComposer};

fn generate_geometry(config: &AppConfig) -> Result<NdGeometry, GeometryError> {
    let geometry = &config.geometry;
    match geometry.shape.as_str() {
        "simplex" => generate_simplex(geometry.dimension, geometry.scale),
        "cross-polytope" => generate_cross_polytope(geometry.dimension, geometry.scale),
        "roots" => generate_root_system(
            geometry.dimension,
            &RootSystemConfig {
                root_type: geometry.root_type,
                scale: geometry.scale,
            },
        ),
        "hyperbulb" => {
            let bulb_config = HyperbulbConfig {
                power: config.fractal.power,
                max_iterations: config.fractal.max_iterations,
                escape_radius: config.fractal.escape_radius,
                resolution: config.fractal.resolution,
                extent: config.fractal.extent,
                center: hypervis_math::VecN::zeros(geometry.dimension),
                color_mode: config.fractal.color_mode,
                boundary_threshold: config.fractal.boundary_threshold,
                ..HyperbulbConfig::default()
            };
            generate_hyperbulb(geometry.dimension, &bulb_config).map(|bulb| bulb.geometry)
        }
        "hypercube" => generate_hypercube(geometry.dimension, geometry.scale),
        other => Err(GeometryError::InvalidConfig(format!(
            "unknown shape '{}'",
            other
        ))),
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let geometry = generate_geometry(config)?;
    log::info!(
        "Generated {}: {} vertices, {} edges, {} faces",
        geometry.metadata.name,
        geometry.vertex_count(),
        geometry.edge_count(),
        geometry.face_count()
    );

    // Rotate
    let mut composer = RotationComposer::new();
    let matrix = composer.compose(geometry.dimension, &config.rotation.angles);
    let rotated: Vec<_> = geometry.vertices.iter().map(|v| matrix.mul_vec(v)).collect();

    // Project to 3D
    let projection = Projection {
        mode: config.projection.mode,
        distance: config.projection.distance,
    };
    let positions = project_vertices(&rotated, &projection);
    log::info!("Projected {} positions (version {})", positions.len(), composer.version());

    // Slice
    if config.slice.enabled {
        let axis = config.slice.axis.unwrap_or(geometry.dimension - 1);
        let section = cross_section(&geometry, axis, config.slice.value);
        if section.has_intersection {
            log::info!(
                "Slice at axis {} = {}: {} points, {} edges",
                axis,
                config.slice.value,
                section.points.len(),
                section.edges.len()
            );
        } else {
            log::info!("Slice at axis {} = {} misses the geometry", axis, config.slice.value);
        }
    }

    // Boundary faces for point sets without precomputed faces
    if geometry.faces.is_none() && !geometry.is_point_cloud {
        let request = FaceRequest {
            id: RequestId(composer.version()),
            vertices: flatten_vertices(&geometry.vertices, geometry.dimension),
            dimension: geometry.dimension,
            source: FaceSource::ConvexHull,
        };
        let response = extract_faces_job(&request);
        log::info!("Hull triangulation: {} triangles", response.faces.len() / 3);
    }

    if config.debug.log_stats {
        for (key, value) in &geometry.metadata.properties {
            log::info!("  {}: {}", key, value);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting hypervis");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("Pipeline failed: {}", e);
        std::process::exit(1);
    }
}
