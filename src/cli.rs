//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::field::RegenerationPolicy;
use crate::params::NoiseParameters;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "pointnoise")]
#[command(about = "Real-time point-cloud terrain from layered simplex noise", long_about = None)]
pub struct Args {
    /// Grid side length (points per row, 2-1000)
    #[arg(long, default_value_t = NoiseParameters::default().width)]
    pub width: u32,

    /// Noise seed (0-10000)
    #[arg(long, default_value_t = NoiseParameters::default().seed)]
    pub seed: u32,

    /// Height scale (0-0.5)
    #[arg(long, default_value_t = NoiseParameters::default().amplitude)]
    pub amplitude: f64,

    /// Base noise frequency (0.01-1)
    #[arg(long, default_value_t = NoiseParameters::default().frequency)]
    pub frequency: f64,

    /// Number of noise layers (1-7)
    #[arg(long, default_value_t = NoiseParameters::default().octaves)]
    pub octaves: u32,

    /// Per-octave amplitude decay (0.1-1)
    #[arg(long, default_value_t = NoiseParameters::default().gain)]
    pub gain: f64,

    /// Only regenerate when a parameter changes
    #[arg(long)]
    pub on_change: bool,

    /// Write one top-down frame to this PNG and exit (no window)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

impl Args {
    /// Noise parameters from the flags, pulled into their advisory ranges
    pub fn noise_parameters(&self) -> NoiseParameters {
        let requested = NoiseParameters {
            width: self.width,
            seed: self.seed,
            amplitude: self.amplitude,
            frequency: self.frequency,
            octaves: self.octaves,
            gain: self.gain,
        };

        let params = requested.clamped();
        if params != requested {
            log::warn!("Parameters clamped to supported ranges: {:?}", params);
        }
        params
    }

    pub fn regeneration_policy(&self) -> RegenerationPolicy {
        if self.on_change {
            RegenerationPolicy::OnChange
        } else {
            RegenerationPolicy::EveryFrame
        }
    }
}
