//! Per-frame field driver with a regeneration policy.

use std::time::{Duration, Instant};

use super::generator::NoiseFieldGenerator;
use super::PointCloudFrame;
use crate::noise::{NoiseSource, SimplexSource};
use crate::params::NoiseParameters;

/// When the field is rebuilt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegenerationPolicy {
    /// Rebuild on every update, whether or not parameters changed
    #[default]
    EveryFrame,

    /// Rebuild only when parameters differ from the last generation
    OnChange,
}

impl RegenerationPolicy {
    pub fn toggled(self) -> Self {
        match self {
            RegenerationPolicy::EveryFrame => RegenerationPolicy::OnChange,
            RegenerationPolicy::OnChange => RegenerationPolicy::EveryFrame,
        }
    }
}

/// Owns the generator and the most recent frame
pub struct FieldSystem<S = SimplexSource> {
    generator: NoiseFieldGenerator<S>,
    frame: PointCloudFrame,
    policy: RegenerationPolicy,
    last_params: Option<NoiseParameters>,
    generations: u64,
    last_generation_time: Duration,
}

impl FieldSystem<SimplexSource> {
    pub fn new(policy: RegenerationPolicy) -> Self {
        Self::with_generator(NoiseFieldGenerator::new(), policy)
    }
}

impl<S: NoiseSource> FieldSystem<S> {
    pub fn with_generator(generator: NoiseFieldGenerator<S>, policy: RegenerationPolicy) -> Self {
        Self {
            generator,
            frame: PointCloudFrame::default(),
            policy,
            last_params: None,
            generations: 0,
            last_generation_time: Duration::ZERO,
        }
    }

    /// Bring the frame up to date with `params`
    ///
    /// # Returns
    /// * `true` if the frame was regenerated
    pub fn update(&mut self, params: &NoiseParameters) -> bool {
        if self.policy == RegenerationPolicy::OnChange && self.last_params.as_ref() == Some(params)
        {
            return false;
        }

        let start = Instant::now();
        self.generator.generate_into(params, &mut self.frame);
        self.last_generation_time = start.elapsed();

        self.last_params = Some(*params);
        self.generations += 1;
        true
    }

    pub fn frame(&self) -> &PointCloudFrame {
        &self.frame
    }

    pub fn policy(&self) -> RegenerationPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RegenerationPolicy) {
        self.policy = policy;
    }

    /// Number of regenerations performed so far
    pub fn generations(&self) -> u64 {
        self.generations
    }

    pub fn last_generation_time(&self) -> Duration {
        self.last_generation_time
    }
}
