//! Noise field parameters and their advisory control ranges.

/// Inclusive range and step size for one adjustable parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Grid side length (points per row)
pub const WIDTH_RANGE: ParamRange = ParamRange::new(2.0, 1000.0, 1.0);
pub const SEED_RANGE: ParamRange = ParamRange::new(0.0, 10000.0, 1.0);
pub const AMPLITUDE_RANGE: ParamRange = ParamRange::new(0.0, 0.5, 0.01);
pub const FREQUENCY_RANGE: ParamRange = ParamRange::new(0.01, 1.0, 0.01);
pub const OCTAVES_RANGE: ParamRange = ParamRange::new(1.0, 7.0, 1.0);
pub const GAIN_RANGE: ParamRange = ParamRange::new(0.1, 1.0, 0.01);

/// Parameters of the layered noise terrain
///
/// The generator reads these as-is. The ranges above are only applied by
/// control surfaces (keyboard, CLI) via [`NoiseParameters::clamped`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParameters {
    /// Grid side length; a frame holds `width * width` points
    pub width: u32,

    /// Noise permutation seed
    pub seed: u32,

    /// Vertical scale applied to the accumulated noise height
    pub amplitude: f64,

    /// Spatial scale of the base octave (larger = smoother terrain)
    pub frequency: f64,

    /// Number of noise layers (1 = base layer only)
    pub octaves: u32,

    /// Per-octave amplitude decay
    pub gain: f64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            width: 200,
            seed: 1,
            amplitude: 0.1,
            frequency: 0.4,
            octaves: 3,
            gain: 0.5,
        }
    }
}

impl NoiseParameters {
    /// Total number of points in a generated frame
    pub fn point_count(&self) -> usize {
        let width = self.width as usize;
        width * width
    }

    /// Copy with every field pulled into its advisory range
    pub fn clamped(&self) -> Self {
        Self {
            width: WIDTH_RANGE.clamp(self.width as f64) as u32,
            seed: SEED_RANGE.clamp(self.seed as f64) as u32,
            amplitude: AMPLITUDE_RANGE.clamp(self.amplitude),
            frequency: FREQUENCY_RANGE.clamp(self.frequency),
            octaves: OCTAVES_RANGE.clamp(self.octaves as f64) as u32,
            gain: GAIN_RANGE.clamp(self.gain),
        }
    }
}
