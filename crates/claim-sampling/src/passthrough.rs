//! The `none` method.

use claim_common::FeatureSet;

use crate::error::Result;
use crate::resampler::Resampler;

/// Returns its input unchanged. Strategy and seed are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Resampler for PassThrough {
    fn name(&self) -> &str {
        "none"
    }

    fn resample(&self, data: &FeatureSet) -> Result<FeatureSet> {
        Ok(data.clone())
    }
}
