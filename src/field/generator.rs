//! Layered noise height field sampled on a square grid.

use super::PointCloudFrame;
use crate::noise::{NoiseSource, SimplexSource};
use crate::params::NoiseParameters;

/// Map an accumulated noise height to a red/green color
///
/// Heights outside [-1, 1] (reachable once octaves stack up) give components
/// outside [0, 1]; they are kept as-is and clamped by the consumer.
pub fn height_to_color(y: f64) -> [f32; 3] {
    let t = 0.5 * (y + 1.0);
    [(1.0 - t) as f32, t as f32, 0.0]
}

/// Generates point-cloud frames from an owned noise source
pub struct NoiseFieldGenerator<S = SimplexSource> {
    source: S,
}

impl NoiseFieldGenerator<SimplexSource> {
    /// Create new generator backed by simplex noise
    pub fn new() -> Self {
        Self::with_source(SimplexSource::default())
    }
}

impl Default for NoiseFieldGenerator<SimplexSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NoiseSource> NoiseFieldGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generate a fresh frame of `width * width` points
    pub fn generate(&mut self, params: &NoiseParameters) -> PointCloudFrame {
        let mut frame = PointCloudFrame::with_capacity(params.point_count());
        self.generate_into(params, &mut frame);
        frame
    }

    /// Regenerate into an existing frame, reusing its allocations
    ///
    /// Parameters are not validated: a zero frequency produces non-finite
    /// heights and colors, a zero width produces an empty frame.
    pub fn generate_into(&mut self, params: &NoiseParameters, frame: &mut PointCloudFrame) {
        // Seed once per pass, never per cell
        self.source.reseed(params.seed);

        frame.clear();
        frame.positions.reserve(params.point_count());
        frame.colors.reserve(params.point_count());

        let width = params.width;
        let spacing = 1.0 / width as f64;

        for z in 0..width {
            for x in 0..width {
                let y = self.sample_height(params, x as f64, z as f64);

                let position = [
                    (x as f64 * spacing) as f32,
                    (params.amplitude * y) as f32,
                    (z as f64 * spacing) as f32,
                ];
                frame.push(position, height_to_color(y));
            }
        }
    }

    /// Accumulated octave height at grid cell `(x, z)`
    ///
    /// Octaves past the first sample at `x*o / (f*w*0.5*o)`, which is a fixed
    /// 2x the base coordinate for every `o`; only the `gain^(o-1)` weight
    /// changes between them. This is not canonical fBm; do not rescale.
    fn sample_height(&self, params: &NoiseParameters, x: f64, z: f64) -> f64 {
        let width = params.width as f64;
        let scale = params.frequency * width;

        let mut y = self.source.sample_2d(x / scale, z / scale);

        for o in 2..=params.octaves {
            let o = o as f64;
            let factor = params.gain.powf(o - 1.0);
            let octave_scale = params.frequency * width * 0.5 * o;

            y += factor * self.source.sample_2d(x * o / octave_scale, z * o / octave_scale);
        }

        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Simplex source that counts samples and reseeds
    struct CountingSource {
        inner: SimplexSource,
        samples: Cell<usize>,
        reseeds: usize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                inner: SimplexSource::default(),
                samples: Cell::new(0),
                reseeds: 0,
            }
        }
    }

    impl NoiseSource for CountingSource {
        fn reseed(&mut self, seed: u32) {
            self.reseeds += 1;
            self.inner.reseed(seed);
        }

        fn sample_2d(&self, x: f64, y: f64) -> f64 {
            self.samples.set(self.samples.get() + 1);
            self.inner.sample_2d(x, y)
        }
    }

    /// Returns the same value everywhere
    struct ConstantSource(f64);

    impl NoiseSource for ConstantSource {
        fn reseed(&mut self, _seed: u32) {}

        fn sample_2d(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    /// Returns `x + y`, so degenerate coordinates show up in the output
    struct PassthroughSource;

    impl NoiseSource for PassthroughSource {
        fn reseed(&mut self, _seed: u32) {}

        fn sample_2d(&self, x: f64, y: f64) -> f64 {
            x + y
        }
    }

    fn params(width: u32) -> NoiseParameters {
        NoiseParameters {
            width,
            ..NoiseParameters::default()
        }
    }

    #[test]
    fn test_frame_has_width_squared_points() {
        let mut generator = NoiseFieldGenerator::new();

        for width in [1, 2, 7, 32] {
            let frame = generator.generate(&params(width));
            assert_eq!(frame.positions.len(), (width * width) as usize);
            assert_eq!(frame.colors.len(), frame.positions.len());
        }
    }

    #[test]
    fn test_zero_width_is_empty() {
        let mut generator = NoiseFieldGenerator::new();
        assert!(generator.generate(&params(0)).is_empty());
    }

    #[test]
    fn test_row_major_layout() {
        let mut generator = NoiseFieldGenerator::new();
        let frame = generator.generate(&params(4));

        // index = z * width + x
        assert_eq!(frame.positions[0][0], 0.0);
        assert_eq!(frame.positions[0][2], 0.0);
        assert_eq!(frame.positions[1][0], 0.25);
        assert_eq!(frame.positions[1][2], 0.0);
        assert_eq!(frame.positions[4][0], 0.0);
        assert_eq!(frame.positions[4][2], 0.25);
        assert_eq!(frame.positions[15][0], 0.75);
        assert_eq!(frame.positions[15][2], 0.75);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let p = params(16);
        let first = NoiseFieldGenerator::new().generate(&p);

        let mut generator = NoiseFieldGenerator::new();
        let second = generator.generate(&p);
        let third = generator.generate(&p);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_reseeding_changes_heights() {
        let mut generator = NoiseFieldGenerator::new();
        let one = generator.generate(&NoiseParameters { seed: 1, ..params(8) });
        let two = generator.generate(&NoiseParameters { seed: 2, ..params(8) });

        assert!(one
            .positions
            .iter()
            .zip(&two.positions)
            .any(|(a, b)| a[1] != b[1]));
    }

    #[test]
    fn test_independent_generators_do_not_share_seed() {
        let p1 = NoiseParameters { seed: 1, ..params(8) };
        let p2 = NoiseParameters { seed: 2, ..params(8) };

        let mut a = NoiseFieldGenerator::new();
        let mut b = NoiseFieldGenerator::new();
        let expected = NoiseFieldGenerator::new().generate(&p1);

        // Interleave: b's reseed must not leak into a
        let _ = a.generate(&p1);
        let _ = b.generate(&p2);
        assert_eq!(a.generate(&p1), expected);
    }

    #[test]
    fn test_each_octave_adds_one_sample_per_cell() {
        let mut generator = NoiseFieldGenerator::with_source(CountingSource::new());

        for octaves in 1..=4u32 {
            generator.source().samples.set(0);
            let p = NoiseParameters {
                octaves,
                ..params(5)
            };
            let _ = generator.generate(&p);
            assert_eq!(generator.source().samples.get(), 25 * octaves as usize);
        }
    }

    #[test]
    fn test_seed_applied_once_per_generation() {
        let mut generator = NoiseFieldGenerator::with_source(CountingSource::new());
        let _ = generator.generate(&params(10));
        assert_eq!(generator.source().reseeds, 1);
    }

    #[test]
    fn test_single_point_grid() {
        let p = NoiseParameters {
            width: 1,
            amplitude: 0.3,
            ..NoiseParameters::default()
        };
        let mut generator = NoiseFieldGenerator::new();
        let frame = generator.generate(&p);

        assert_eq!(frame.len(), 1);
        let [x, y, z] = frame.positions[0];
        assert_eq!(x, 0.0);
        assert_eq!(z, 0.0);
        assert!(y.is_finite());

        // Color pairs with the same height that produced y
        let height = y as f64 / 0.3;
        assert!((frame.colors[0][1] as f64 - 0.5 * (height + 1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_zero_amplitude_flattens_positions_but_not_colors() {
        let p = NoiseParameters {
            width: 2,
            seed: 1,
            amplitude: 0.0,
            frequency: 0.4,
            octaves: 1,
            gain: 0.5,
        };
        let mut generator = NoiseFieldGenerator::new();
        let frame = generator.generate(&p);

        assert!(frame.positions.iter().all(|position| position[1] == 0.0));

        // Colors follow the raw noise sample
        let source = SimplexSource::new(1);
        for z in 0..2u32 {
            for x in 0..2u32 {
                let y = source.sample_2d(x as f64 / 0.8, z as f64 / 0.8);
                assert_eq!(frame.colors[(z * 2 + x) as usize], height_to_color(y));
            }
        }
    }

    #[test]
    fn test_zero_gain_matches_single_octave() {
        let single = NoiseParameters {
            octaves: 1,
            ..params(12)
        };
        let layered = NoiseParameters {
            octaves: 5,
            gain: 0.0,
            ..params(12)
        };

        let mut generator = NoiseFieldGenerator::new();
        assert_eq!(generator.generate(&single), generator.generate(&layered));
    }

    #[test]
    fn test_octave_weights_follow_gain() {
        // With constant noise v: y = v * (1 + g + g^2)
        let p = NoiseParameters {
            width: 3,
            amplitude: 1.0,
            octaves: 3,
            gain: 0.5,
            ..NoiseParameters::default()
        };
        let mut generator = NoiseFieldGenerator::with_source(ConstantSource(0.8));
        let frame = generator.generate(&p);

        let expected = 0.8 * (1.0 + 0.5 + 0.25);
        for position in &frame.positions {
            assert!((position[1] as f64 - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_colors_are_not_clamped() {
        let p = NoiseParameters {
            octaves: 4,
            gain: 1.0,
            ..params(2)
        };
        let mut generator = NoiseFieldGenerator::with_source(ConstantSource(0.9));
        let frame = generator.generate(&p);

        // y = 3.6 -> red = 1 - 2.3 = -1.3, green = 2.3
        let [r, g, b] = frame.colors[0];
        assert!((r + 1.3).abs() < 1e-6);
        assert!((g - 2.3).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_zero_frequency_propagates_non_finite_values() {
        let p = NoiseParameters {
            frequency: 0.0,
            octaves: 1,
            ..params(3)
        };
        let mut generator = NoiseFieldGenerator::with_source(PassthroughSource);
        let frame = generator.generate(&p);

        assert_eq!(frame.len(), 9);
        // Cell (0, 0) samples at 0/0, every other cell at +inf
        assert!(frame.positions[0][1].is_nan());
        assert!(frame.colors[0][0].is_nan());
        assert!(frame.positions[4][1].is_infinite());
    }

    #[test]
    fn test_generate_into_reuses_buffers() {
        let mut generator = NoiseFieldGenerator::new();
        let mut frame = generator.generate(&params(20));
        let capacity = frame.positions.capacity();

        generator.generate_into(&params(10), &mut frame);
        assert_eq!(frame.len(), 100);
        assert_eq!(frame.positions.capacity(), capacity);
        assert_eq!(frame, generator.generate(&params(10)));
    }

    #[test]
    fn test_height_to_color() {
        assert_eq!(height_to_color(-1.0), [1.0, 0.0, 0.0]);
        assert_eq!(height_to_color(0.0), [0.5, 0.5, 0.0]);
        assert_eq!(height_to_color(1.0), [0.0, 1.0, 0.0]);
    }
}
