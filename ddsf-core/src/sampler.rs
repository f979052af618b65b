//! Uniform sampling capability injected into the generator.
//!
//! The growth algorithm never touches a global RNG. Callers hand it a
//! [`RandomSampler`], usually an [`RngSampler`] seeded for reproducibility, so
//! independent runs can proceed concurrently with private state.

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng, seq::index};

use crate::error::{GeneratorError, Result};

/// Source of the two random primitives the generator consumes.
pub trait RandomSampler {
    /// Draws a value uniformly from `[0, 1)`.
    fn uniform01(&mut self) -> f64;

    /// Draws `amount` distinct positions uniformly from `0..length`.
    ///
    /// The order of the returned positions carries no meaning.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InsufficientCandidates`] when
    /// `amount > length`.
    fn sample_indices(&mut self, length: usize, amount: usize) -> Result<Vec<usize>>;

    /// Draws `amount` entries of `population` by position without replacement.
    ///
    /// Equal values at different positions are distinct draws, so sampling a
    /// list in which a value repeats favours that value proportionally.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InsufficientCandidates`] when `amount`
    /// exceeds `population.len()`, and
    /// [`GeneratorError::PositionOutOfRange`] when
    /// [`RandomSampler::sample_indices`] yields a position past the end.
    ///
    /// # Examples
    /// ```
    /// use ddsf_core::{RandomSampler, RngSampler};
    ///
    /// let mut sampler = RngSampler::seeded(7);
    /// let drawn = sampler.sample_without_replacement(&[4, 4, 9], 3)?;
    /// let mut sorted = drawn.clone();
    /// sorted.sort_unstable();
    /// assert_eq!(sorted, [4, 4, 9]);
    /// # Ok::<(), ddsf_core::GeneratorError>(())
    /// ```
    fn sample_without_replacement<T: Copy>(
        &mut self,
        population: &[T],
        amount: usize,
    ) -> Result<Vec<T>> {
        let length = population.len();
        self.sample_indices(length, amount)?
            .into_iter()
            .map(|position| {
                population
                    .get(position)
                    .copied()
                    .ok_or(GeneratorError::PositionOutOfRange { position, length })
            })
            .collect()
    }
}

/// [`RandomSampler`] backed by any [`rand::Rng`].
///
/// # Examples
/// ```
/// use ddsf_core::{RandomSampler, RngSampler};
///
/// let mut left = RngSampler::seeded(42);
/// let mut right = RngSampler::seeded(42);
/// assert_eq!(left.uniform01(), right.uniform01());
/// ```
#[derive(Clone, Debug)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSampler<SmallRng> {
    /// Creates a sampler over a [`SmallRng`] seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler for RngSampler<R> {
    fn uniform01(&mut self) -> f64 {
        self.rng.sample(Standard)
    }

    fn sample_indices(&mut self, length: usize, amount: usize) -> Result<Vec<usize>> {
        if amount > length {
            return Err(GeneratorError::InsufficientCandidates {
                requested: amount,
                available: length,
            });
        }
        Ok(index::sample(&mut self.rng, length, amount).into_vec())
    }
}
