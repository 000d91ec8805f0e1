//! Random oversampling with replacement.

use std::time::Instant;

use claim_common::FeatureSet;
use polars::prelude::IdxSize;
use rand::Rng;

use crate::error::Result;
use crate::resampler::{Resampler, SamplerParams, log_resampled};
use crate::synthesis::{class_counts, class_indices};

/// Grows classes by duplicating randomly drawn rows of the same class.
///
/// Rows are copied verbatim, so dtypes and nulls are kept.
#[derive(Debug, Clone, Default)]
pub struct RandomOverSampler {
    params: SamplerParams,
}

impl RandomOverSampler {
    pub fn new(params: SamplerParams) -> Self {
        Self { params }
    }
}

impl Resampler for RandomOverSampler {
    fn name(&self) -> &str {
        "random"
    }

    fn resample(&self, data: &FeatureSet) -> Result<FeatureSet> {
        let start = Instant::now();
        let classes = class_indices(data)?;
        let to_add = self.params.strategy.samples_to_add(&class_counts(&classes))?;

        let mut rng = self.params.rng();
        let mut indices: Vec<IdxSize> = (0..data.height()).map(|row| row as IdxSize).collect();
        for (label, count) in &to_add {
            let Some(members) = classes.get(label) else {
                continue;
            };
            for _ in 0..*count {
                let pick = members[rng.gen_range(0..members.len())];
                indices.push(pick as IdxSize);
            }
        }

        let result = data.take_rows(&indices)?;
        log_resampled(self.name(), data, &result, start);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SamplingStrategy;
    use polars::prelude::*;

    #[test]
    fn duplicates_minority_rows_after_originals() {
        let features = df! {
            "length" => [Some(1.0), Some(2.0), Some(3.0), None],
            "make" => ["a", "b", "c", "d"],
        }
        .unwrap();
        let labels = Series::new("is_claim".into(), [0i64, 0, 0, 1]);
        let data = FeatureSet::new(features, labels).unwrap();

        let sampler =
            RandomOverSampler::new(SamplerParams::new(SamplingStrategy::Minority, Some(1)));
        let result = sampler.resample(&data).unwrap();

        assert_eq!(result.height(), 6);
        assert_eq!(result.label_values().unwrap(), vec![0, 0, 0, 1, 1, 1]);
        let make = result.features().column("make").unwrap().str().unwrap();
        assert_eq!(make.get(4), Some("d"));
        assert_eq!(make.get(5), Some("d"));
    }
}
