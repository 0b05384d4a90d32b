//! Parameter definitions with documented ranges and defaults.
//!
//! All tunable numbers live here:
//! - Noise field parameters and their control ranges
//! - Orbit camera limits
//! - Window and projection settings

mod camera;
mod field;
mod render;

// Re-export all types
pub use camera::OrbitCameraConfig;
pub use field::{
    NoiseParameters, ParamRange, AMPLITUDE_RANGE, FREQUENCY_RANGE, GAIN_RANGE, OCTAVES_RANGE,
    SEED_RANGE, WIDTH_RANGE,
};
pub use render::RenderConfig;
