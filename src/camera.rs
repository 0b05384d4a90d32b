//! Orbit camera around the center of the point cloud.

use glam::{Mat4, Vec3};

use crate::params::{OrbitCameraConfig, RenderConfig};

/// Spherical-coordinate orbit camera (Y up)
pub struct OrbitCamera {
    config: OrbitCameraConfig,
    target: Vec3,
    /// Eye distance from the target
    radius: f32,
    /// Angle from +Y (0 = straight above)
    polar: f32,
    /// Angle around Y, measured from +Z toward +X
    azimuth: f32,
}

impl OrbitCamera {
    /// Create new orbit camera starting at the configured eye position
    pub fn new(config: OrbitCameraConfig) -> Self {
        let target = Vec3::from_array(config.target);
        let offset = Vec3::from_array(config.position) - target;

        let radius = offset.length();
        let (polar, azimuth) = if radius > 0.0 {
            (
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
                offset.x.atan2(offset.z),
            )
        } else {
            (0.0, 0.0)
        };

        let mut camera = Self {
            config,
            target,
            radius,
            polar,
            azimuth,
        };
        camera.enforce_limits();
        camera
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Current eye position
    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();

        self.target
            + Vec3::new(
                self.radius * sin_polar * sin_azimuth,
                self.radius * cos_polar,
                self.radius * sin_polar * cos_azimuth,
            )
    }

    /// Rotate from a mouse drag of `(dx, dy)` pixels
    ///
    /// A drag across the full viewport height turns by `rotate_speed` radians.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let scale = self.config.rotate_speed / viewport_height.max(1.0);
        self.azimuth -= dx * scale;
        self.polar -= dy * scale;
        self.enforce_limits();
    }

    /// Zoom by wheel lines (positive = closer)
    pub fn zoom(&mut self, lines: f32) {
        self.radius *= self.config.zoom_factor_per_line.powf(lines);
        self.enforce_limits();
    }

    fn enforce_limits(&mut self) {
        let eps = self.config.polar_epsilon;
        self.polar = self.polar.clamp(eps, std::f32::consts::PI - eps);
        self.radius = self
            .radius
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, render_config: &RenderConfig) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        proj * view
    }
}
