//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hypervis_fractal::ColorMode;
use hypervis_geom::RootType;
use hypervis_math::ProjectionMode;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geometry generation configuration
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Rotation configuration
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Projection configuration
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Cross-section configuration
    #[serde(default)]
    pub slice: SliceConfig,
    /// Fractal configuration
    #[serde(default)]
    pub fractal: FractalConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HV_GEOMETRY__DIMENSION=5 -> geometry.dimension = 5
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Geometry generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Geometry to generate (hypercube, simplex, cross-polytope, roots, hyperbulb)
    pub shape: String,
    /// Ambient dimension (3 to 11)
    pub dimension: usize,
    /// Uniform scale applied by the generator
    pub scale: f64,
    /// Root-system family when shape is "roots"
    pub root_type: RootType,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            shape: "hypercube".to_string(),
            dimension: 4,
            scale: 1.0,
            root_type: RootType::A,
        }
    }
}

/// Rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Active rotation planes as "XY = angle" pairs
    pub angles: std::collections::BTreeMap<String, f64>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        let mut angles = std::collections::BTreeMap::new();
        angles.insert("XW".to_string(), 0.6);
        angles.insert("YZ".to_string(), 0.3);
        Self { angles }
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Projection mode (perspective or orthographic)
    pub mode: ProjectionMode,
    /// Viewer distance for perspective projection
    pub distance: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            distance: hypervis_math::DEFAULT_PROJECTION_DISTANCE,
        }
    }
}

/// Cross-section configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Enable slicing of 4D+ geometry
    pub enabled: bool,
    /// Axis to slice along (default: last axis)
    pub axis: Option<usize>,
    /// Slice plane position along the axis
    pub value: f64,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            axis: None,
            value: 0.0,
        }
    }
}

/// Fractal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalConfig {
    /// Power-map exponent
    pub power: f64,
    /// Maximum escape-time iterations
    pub max_iterations: u32,
    /// Bailout radius
    pub escape_radius: f64,
    /// Grid points per visualized axis
    pub resolution: usize,
    /// Half-width of the sample grid
    pub extent: f64,
    /// Sample filtering policy
    pub color_mode: ColorMode,
    /// Escape-fraction band for boundary extraction
    pub boundary_threshold: [f64; 2],
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            power: 8.0,
            max_iterations: 32,
            escape_radius: 2.0,
            resolution: 24,
            extent: 1.2,
            color_mode: ColorMode::Raw,
            boundary_threshold: [0.2, 0.95],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log per-stage geometry statistics
    pub log_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_stats: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
