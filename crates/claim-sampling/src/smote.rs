//! SMOTE oversampling.

use std::time::Instant;

use claim_common::FeatureSet;
use rand::Rng;

use crate::error::Result;
use crate::resampler::{Resampler, SamplerParams, log_resampled};
use crate::synthesis::{
    append_synthetic, class_counts, class_indices, dense_rows, member_neighbors, synthesize,
};

/// Neighbours considered per sample unless overridden.
pub const DEFAULT_K_NEIGHBORS: usize = 5;

/// Synthesises rows on segments between a class member and one of its `k`
/// nearest same-class neighbours.
///
/// For each synthetic row a member is drawn uniformly, then one of its
/// neighbours, then a gap `u` in `[0, 1)`; the row is `x + u * (nn - x)`.
/// `k` is capped at the class size minus one. Features must be numeric or
/// boolean and free of nulls.
#[derive(Debug, Clone)]
pub struct Smote {
    params: SamplerParams,
    k_neighbors: usize,
}

impl Smote {
    pub fn new(params: SamplerParams) -> Self {
        Self {
            params,
            k_neighbors: DEFAULT_K_NEIGHBORS,
        }
    }

    #[must_use]
    pub fn with_k_neighbors(mut self, k: usize) -> Self {
        self.k_neighbors = k.max(1);
        self
    }

    pub fn k_neighbors(&self) -> usize {
        self.k_neighbors
    }
}

impl Default for Smote {
    fn default() -> Self {
        Self::new(SamplerParams::default())
    }
}

impl Resampler for Smote {
    fn name(&self) -> &str {
        "smote"
    }

    fn resample(&self, data: &FeatureSet) -> Result<FeatureSet> {
        let start = Instant::now();
        let classes = class_indices(data)?;
        let to_add = self.params.strategy.samples_to_add(&class_counts(&classes))?;
        if to_add.is_empty() {
            return Ok(data.clone());
        }

        let points = dense_rows(data.features())?;
        let mut rng = self.params.rng();
        let mut rows = Vec::new();
        let mut labels = Vec::new();

        for (&label, &count) in &to_add {
            let Some(members) = classes.get(&label) else {
                continue;
            };
            let k = self.k_neighbors.min(members.len() - 1);
            let neighbors = member_neighbors(&points, members, k);
            for _ in 0..count {
                let origin = rng.gen_range(0..members.len());
                rows.push(synthesize(&points, members, &neighbors, origin, &mut rng));
                labels.push(label);
            }
        }

        let result = append_synthetic(data, &rows, &labels)?;
        log_resampled(self.name(), data, &result, start);
        Ok(result)
    }
}
