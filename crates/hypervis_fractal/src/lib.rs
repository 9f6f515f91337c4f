//! Escape-time fractals in 3 to 11 dimensions
//!
//! The hyperbulb generalizes the Mandelbulb through hyperspherical power
//! maps: iterate `z -> z^n + c` in D dimensions and sample escape times over
//! a 3-axis grid slice of the parameter space.

pub mod escape;
pub mod hyperbulb;

pub use escape::{escape_time, power_map, smooth_escape_time};
pub use hyperbulb::{
    filter_samples, generate_hyperbulb, generate_samples, ColorMode, HyperbulbConfig,
    HyperbulbGeometry, Sample,
};
