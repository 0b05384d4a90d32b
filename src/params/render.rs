//! Rendering configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Background clear color (linear RGB)
    pub clear_color: [f64; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    /// Track a new surface size
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_survives_zero_height() {
        let mut config = RenderConfig::default();
        config.set_window_size(800, 0);
        assert_eq!(config.aspect_ratio(), 800.0);

        config.set_window_size(1280, 720);
        assert!((config.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
