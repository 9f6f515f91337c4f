//! Geometry error types
//!
//! Contract violations are loud, typed failures: they indicate a programming
//! error in the caller, not a data condition. Degenerate inputs never reach
//! this type; they produce empty/neutral results instead.

use std::fmt;

use crate::roots::RootType;

/// Error type for geometry generation and validation
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Requested dimension outside the supported range
    DimensionOutOfRange {
        dimension: usize,
        min: usize,
        max: usize,
    },
    /// Root system type requested for an unsupported dimension
    RootSystemDimension {
        root_type: RootType,
        dimension: usize,
    },
    /// A generated or supplied record violates its own structural invariants
    InvalidGeometry(String),
    /// A generator configuration is self-contradictory
    InvalidConfig(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DimensionOutOfRange {
                dimension,
                min,
                max,
            } => write!(
                f,
                "dimension {} outside supported range [{}, {}]",
                dimension, min, max
            ),
            GeometryError::RootSystemDimension {
                root_type,
                dimension,
            } => write!(
                f,
                "root system {} is not defined for dimension {}",
                root_type, dimension
            ),
            GeometryError::InvalidGeometry(reason) => {
                write!(f, "invalid geometry: {}", reason)
            }
            GeometryError::InvalidConfig(reason) => {
                write!(f, "invalid generator config: {}", reason)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

impl From<String> for GeometryError {
    fn from(reason: String) -> Self {
        GeometryError::InvalidGeometry(reason)
    }
}
