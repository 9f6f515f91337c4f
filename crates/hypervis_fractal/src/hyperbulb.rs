//! Hyperbulb point-cloud generation
//!
//! Walks a regular grid over three visualized axes of a D-dimensional space
//! (the remaining axes pinned to supplied parameter values), computes
//! escape times for every grid point, and filters the samples by the
//! configured coloring policy. Every policy is a pure filter over the same
//! sample set, not a different generation path.

use std::collections::BTreeMap;

use hypervis_geom::{GeometryError, GeometryKind, GeometryMetadata, NdGeometry};
use hypervis_math::{VecN, MAX_DIM, MIN_DIM};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::escape::{escape_time, smooth_escape_time};

/// Sample filtering and coloring policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Keep all samples, color by integer escape time
    #[default]
    Raw,
    /// Keep all samples, color by smooth escape time
    Smooth,
    /// Keep only bounded points
    Interior,
    /// Keep only points whose escape-time fraction lies in the threshold band
    Boundary,
}

/// Generator configuration for the hyperbulb
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HyperbulbConfig {
    /// Exponent of the power map
    pub power: f64,
    pub max_iterations: u32,
    pub escape_radius: f64,
    /// Grid points per visualized axis
    pub resolution: usize,
    /// Grid center in the full D-dimensional space
    pub center: VecN,
    /// Half-width of the grid along each visualized axis
    pub extent: f64,
    /// The three axes swept by the grid
    pub visualization_axes: [usize; 3],
    /// Pinned coordinates for axes outside `visualization_axes`
    pub parameter_values: BTreeMap<usize, f64>,
    pub color_mode: ColorMode,
    /// Escape-time fraction band `[lo, hi]` for `ColorMode::Boundary`
    pub boundary_threshold: [f64; 2],
}

impl Default for HyperbulbConfig {
    fn default() -> Self {
        Self {
            power: 8.0,
            max_iterations: 32,
            escape_radius: 2.0,
            resolution: 24,
            center: VecN::zeros(4),
            extent: 1.2,
            visualization_axes: [0, 1, 2],
            parameter_values: BTreeMap::new(),
            color_mode: ColorMode::Raw,
            boundary_threshold: [0.2, 0.95],
        }
    }
}

impl HyperbulbConfig {
    fn validate(&self, dimension: usize) -> Result<(), GeometryError> {
        if dimension < MIN_DIM || dimension > MAX_DIM {
            return Err(GeometryError::DimensionOutOfRange {
                dimension,
                min: MIN_DIM,
                max: MAX_DIM,
            });
        }
        let [a, b, c] = self.visualization_axes;
        if a == b || b == c || a == c {
            return Err(GeometryError::InvalidConfig(
                "visualization axes must be distinct".to_string(),
            ));
        }
        if self.visualization_axes.iter().any(|&ax| ax >= dimension) {
            return Err(GeometryError::InvalidConfig(format!(
                "visualization axes {:?} exceed dimension {}",
                self.visualization_axes, dimension
            )));
        }
        if self.resolution < 2 {
            return Err(GeometryError::InvalidConfig(
                "resolution must be at least 2".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(GeometryError::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        if !(self.power > 1.0) || !(self.escape_radius > 1.0) {
            return Err(GeometryError::InvalidConfig(
                "power and escape radius must exceed 1".to_string(),
            ));
        }
        let [lo, hi] = self.boundary_threshold;
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
            return Err(GeometryError::InvalidConfig(format!(
                "boundary threshold [{}, {}] is not an ordered band in [0, 1]",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// One evaluated grid point
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    pub point: VecN,
    /// Integer escape time; `max_iterations` means bounded
    pub escape: u32,
    /// Smooth escape time for continuous coloring
    pub smooth: f64,
}

/// Evaluate escape times over the full grid, before any filtering
///
/// Axes outside the visualized three take their coordinate from
/// `parameter_values`; an axis with no supplied value is pinned to the
/// center's coordinate and logged once.
pub fn generate_samples(dimension: usize, config: &HyperbulbConfig) -> Vec<Sample> {
    let mut base = VecN::zeros(dimension);
    for axis in 0..dimension {
        if config.visualization_axes.contains(&axis) {
            continue;
        }
        match config.parameter_values.get(&axis) {
            Some(&value) => base.set(axis, value),
            None => {
                warn!(
                    "no parameter value for pinned axis {}, using center coordinate",
                    axis
                );
                base.set(axis, config.center.get(axis));
            }
        }
    }

    let res = config.resolution;
    let step = 2.0 * config.extent / (res - 1) as f64;
    let mut samples = Vec::with_capacity(res * res * res);

    for ix in 0..res {
        for iy in 0..res {
            for iz in 0..res {
                let mut point = base;
                let offsets = [ix, iy, iz];
                for (slot, &axis) in config.visualization_axes.iter().enumerate() {
                    let coord =
                        config.center.get(axis) - config.extent + offsets[slot] as f64 * step;
                    point.set(axis, coord);
                }
                let escape =
                    escape_time(&point, config.power, config.max_iterations, config.escape_radius);
                let smooth = smooth_escape_time(
                    &point,
                    config.power,
                    config.max_iterations,
                    config.escape_radius,
                );
                samples.push(Sample {
                    point,
                    escape,
                    smooth,
                });
            }
        }
    }
    samples
}

/// Apply the coloring policy as a pure filter over a sample set
pub fn filter_samples(samples: &[Sample], config: &HyperbulbConfig) -> Vec<Sample> {
    let max = config.max_iterations;
    match config.color_mode {
        ColorMode::Raw | ColorMode::Smooth => samples.to_vec(),
        ColorMode::Interior => samples.iter().filter(|s| s.escape >= max).copied().collect(),
        ColorMode::Boundary => {
            let [lo, hi] = config.boundary_threshold;
            samples
                .iter()
                .filter(|s| {
                    let fraction = s.smooth / max as f64;
                    (lo..=hi).contains(&fraction)
                })
                .copied()
                .collect()
        }
    }
}

/// A hyperbulb point cloud with per-vertex escape values
#[derive(Clone, Debug)]
pub struct HyperbulbGeometry {
    pub geometry: NdGeometry,
    /// Smooth escape time per vertex, aligned with `geometry.vertices`
    pub escape_values: Vec<f64>,
}

/// Generate a hyperbulb point cloud for the given dimension
pub fn generate_hyperbulb(
    dimension: usize,
    config: &HyperbulbConfig,
) -> Result<HyperbulbGeometry, GeometryError> {
    config.validate(dimension)?;

    let samples = generate_samples(dimension, config);
    let kept = filter_samples(&samples, config);

    let vertices: Vec<VecN> = kept.iter().map(|s| s.point).collect();
    let escape_values: Vec<f64> = kept.iter().map(|s| s.smooth).collect();

    let geometry = NdGeometry {
        vertices,
        edges: Vec::new(),
        dimension,
        kind: GeometryKind::Hyperbulb,
        faces: None,
        cofaces: Vec::new(),
        is_point_cloud: true,
        metadata: GeometryMetadata::new(
            format!("{}D hyperbulb", dimension),
            format!("z -> z^{} + c", config.power),
        )
        .with_property("power", config.power.to_string())
        .with_property("resolution", config.resolution.to_string())
        .with_property("samples_kept", kept.len().to_string()),
    };
    geometry.validate()?;

    Ok(HyperbulbGeometry {
        geometry,
        escape_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> HyperbulbConfig {
        HyperbulbConfig {
            resolution: 6,
            max_iterations: 16,
            ..HyperbulbConfig::default()
        }
    }

    #[test]
    fn test_sample_grid_size() {
        let samples = generate_samples(4, &small_config());
        assert_eq!(samples.len(), 6 * 6 * 6);
    }

    #[test]
    fn test_samples_span_the_grid() {
        let config = small_config();
        let samples = generate_samples(4, &config);
        for s in &samples {
            for &axis in &config.visualization_axes {
                let offset = (s.point.get(axis) - config.center.get(axis)).abs();
                assert!(offset <= config.extent + 1e-9);
            }
        }
    }

    #[test]
    fn test_pinned_axis_uses_parameter_value() {
        let mut config = small_config();
        config.parameter_values.insert(3, 0.42);
        let samples = generate_samples(4, &config);
        for s in &samples {
            assert_eq!(s.point.get(3), 0.42);
        }
    }

    #[test]
    fn test_interior_filter_is_exact() {
        let config = HyperbulbConfig {
            color_mode: ColorMode::Interior,
            ..small_config()
        };
        let samples = generate_samples(4, &config);
        let kept = filter_samples(&samples, &config);
        let expected = samples.iter().filter(|s| s.escape >= 16).count();
        assert_eq!(kept.len(), expected);
        assert!(kept.iter().all(|s| s.escape >= 16));
    }

    #[test]
    fn test_boundary_filter_is_exact() {
        let config = HyperbulbConfig {
            color_mode: ColorMode::Boundary,
            boundary_threshold: [0.1, 0.9],
            ..small_config()
        };
        let samples = generate_samples(4, &config);
        let kept = filter_samples(&samples, &config);
        for s in &kept {
            let fraction = s.smooth / 16.0;
            assert!((0.1..=0.9).contains(&fraction));
        }
        let expected = samples
            .iter()
            .filter(|s| (0.1..=0.9).contains(&(s.smooth / 16.0)))
            .count();
        assert_eq!(kept.len(), expected);
    }

    #[test]
    fn test_raw_and_smooth_keep_everything() {
        let config = small_config();
        let samples = generate_samples(4, &config);
        assert_eq!(filter_samples(&samples, &config).len(), samples.len());
    }

    #[test]
    fn test_generate_hyperbulb_is_point_cloud() {
        let result = generate_hyperbulb(5, &small_config()).unwrap();
        assert!(result.geometry.is_point_cloud);
        assert!(result.geometry.edges.is_empty());
        assert_eq!(result.escape_values.len(), result.geometry.vertex_count());
        assert!(result.escape_values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_config_validation() {
        let config = small_config();
        assert!(generate_hyperbulb(12, &config).is_err());

        let bad_axes = HyperbulbConfig {
            visualization_axes: [0, 0, 1],
            ..small_config()
        };
        assert!(generate_hyperbulb(4, &bad_axes).is_err());

        let axis_too_high = HyperbulbConfig {
            visualization_axes: [0, 1, 5],
            ..small_config()
        };
        assert!(generate_hyperbulb(4, &axis_too_high).is_err());

        let bad_band = HyperbulbConfig {
            boundary_threshold: [0.9, 0.1],
            ..small_config()
        };
        assert!(generate_hyperbulb(4, &bad_band).is_err());
    }

    #[test]
    fn test_three_dimensional_bulb_supported() {
        // The classic Mandelbulb: no pinned axes at all
        let result = generate_hyperbulb(3, &small_config()).unwrap();
        assert_eq!(result.geometry.dimension, 3);
        assert!(result.geometry.vertex_count() > 0);
    }
}
