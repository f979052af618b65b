//! Shared test utilities for `ddsf-core`.

use std::collections::VecDeque;

use ddsf_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{
    error::{GeneratorError, Result},
    sampler::RandomSampler,
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `DDSF_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSampler`] replaying scripted draws so tests can force specific
/// branches.
///
/// Uniform draws are consumed in order and yield `0.0` once exhausted. Each
/// call to [`RandomSampler::sample_indices`] consumes one scripted position
/// list; once those run out the first `amount` positions are returned.
///
/// # Examples
/// ```ignore
/// use crate::test_utils::ScriptedSampler;
///
/// let mut sampler = ScriptedSampler::new(vec![0.75], vec![vec![2, 0]]);
/// assert_eq!(sampler.uniform01(), 0.75);
/// assert_eq!(sampler.sample_indices(4, 2)?, [2, 0]);
/// ```
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedSampler {
    uniforms: VecDeque<f64>,
    positions: VecDeque<Vec<usize>>,
}

impl ScriptedSampler {
    pub(crate) fn new(uniforms: Vec<f64>, positions: Vec<Vec<usize>>) -> Self {
        Self {
            uniforms: uniforms.into(),
            positions: positions.into(),
        }
    }
}

impl RandomSampler for ScriptedSampler {
    fn uniform01(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(0.0)
    }

    fn sample_indices(&mut self, length: usize, amount: usize) -> Result<Vec<usize>> {
        if amount > length {
            return Err(GeneratorError::InsufficientCandidates {
                requested: amount,
                available: length,
            });
        }
        Ok(self
            .positions
            .pop_front()
            .unwrap_or_else(|| (0..amount).collect()))
    }
}
