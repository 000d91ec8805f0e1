//! The resampler capability.

use std::time::Instant;

use claim_common::FeatureSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::Result;
use crate::strategy::SamplingStrategy;

/// Rebalances the classes of a feature set.
///
/// Implementations must be deterministic for a fixed seed: resampling the
/// same input twice with the same [`SamplerParams`] yields the same rows in
/// the same order.
pub trait Resampler: Send + Sync {
    /// Registry name of this method.
    fn name(&self) -> &str;

    /// Returns the rebalanced feature set, originals first.
    fn resample(&self, data: &FeatureSet) -> Result<FeatureSet>;
}

/// Settings shared by every built-in resampler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SamplerParams {
    pub strategy: SamplingStrategy,
    /// Seed for the random generator; `None` draws one from the OS.
    pub random_state: Option<u64>,
}

impl SamplerParams {
    pub fn new(strategy: SamplingStrategy, random_state: Option<u64>) -> Self {
        Self {
            strategy,
            random_state,
        }
    }

    /// A fresh generator, so repeated calls replay the same draws.
    pub(crate) fn rng(&self) -> ChaCha8Rng {
        match self.random_state {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

pub(crate) fn log_resampled(method: &str, before: &FeatureSet, after: &FeatureSet, start: Instant) {
    info!(
        method,
        rows_before = before.height(),
        rows_after = after.height(),
        added = after.height().saturating_sub(before.height()),
        duration_ms = start.elapsed().as_millis(),
        "Resampled training data"
    );
}
