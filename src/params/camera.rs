//! Orbit camera configuration.

/// Orbit camera limits and starting pose (world units: the grid spans [0, 1])
#[derive(Debug, Clone)]
pub struct OrbitCameraConfig {
    /// Initial eye position
    pub position: [f32; 3],

    /// Point the camera orbits around (grid center)
    pub target: [f32; 3],

    /// Closest allowed eye distance to the target
    pub min_distance: f32,

    /// Farthest allowed eye distance to the target
    pub max_distance: f32,

    /// Radians of rotation per full-viewport-height mouse drag
    pub rotate_speed: f32,

    /// Distance scale per wheel line (< 1 zooms in on positive scroll)
    pub zoom_factor_per_line: f32,

    /// Keeps the polar angle off the poles so the Y-up view stays defined
    pub polar_epsilon: f32,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            position: [0.5, 1.0, 0.5], // Straight above the grid center
            target: [0.5, 0.0, 0.5],
            min_distance: 0.5,
            max_distance: 2.0,
            rotate_speed: std::f32::consts::TAU,
            zoom_factor_per_line: 0.95,
            polar_epsilon: 1.0e-3,
        }
    }
}
