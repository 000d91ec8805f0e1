//! ADASYN oversampling.

use std::time::Instant;

use claim_common::FeatureSet;

use crate::error::Result;
use crate::neighbors::nearest;
use crate::resampler::{Resampler, SamplerParams, log_resampled};
use crate::smote::DEFAULT_K_NEIGHBORS;
use crate::synthesis::{
    append_synthetic, class_counts, class_indices, dense_rows, member_neighbors, synthesize,
};

/// SMOTE variant that spends more synthetic rows on hard members.
///
/// A member's hardness is the share of other-class rows among its `k`
/// nearest neighbours in the whole set. Each class quota is split across its
/// members in proportion to hardness (uniformly when no member has an
/// other-class neighbour), then every row is interpolated towards a
/// same-class neighbour exactly as in SMOTE.
#[derive(Debug, Clone)]
pub struct Adasyn {
    params: SamplerParams,
    k_neighbors: usize,
}

impl Adasyn {
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
}

impl Default for Adasyn {
    fn default() -> Self {
        Self::new(SamplerParams::default())
    }
}

impl Resampler for Adasyn {
    fn name(&self) -> &str {
        "adasyn"
    }

    fn resample(&self, data: &FeatureSet) -> Result<FeatureSet> {
        let start = Instant::now();
        let classes = class_indices(data)?;
        let to_add = self.params.strategy.samples_to_add(&class_counts(&classes))?;
        if to_add.is_empty() {
            return Ok(data.clone());
        }

        let points = dense_rows(data.features())?;
        let row_labels = data.label_values()?;
        let everyone: Vec<usize> = (0..points.len()).collect();
        let k_all = self.k_neighbors.min(points.len() - 1);
        let mut rng = self.params.rng();
        let mut rows = Vec::new();
        let mut labels = Vec::new();

        for (&label, &count) in &to_add {
            let Some(members) = classes.get(&label) else {
                continue;
            };
            let hardness: Vec<f64> = members
                .iter()
                .map(|&member| {
                    let around = nearest(&points, member, &everyone, k_all);
                    let foreign = around.iter().filter(|&&n| row_labels[n] != label).count();
                    foreign as f64 / k_all as f64
                })
                .collect();
            let quotas = allocate(count, &hardness);

            let k = self.k_neighbors.min(members.len() - 1);
            let neighbors = member_neighbors(&points, members, k);
            for (origin, quota) in quotas.into_iter().enumerate() {
                for _ in 0..quota {
                    rows.push(synthesize(&points, members, &neighbors, origin, &mut rng));
                    labels.push(label);
                }
            }
        }

        let result = append_synthetic(data, &rows, &labels)?;
        log_resampled(self.name(), data, &result, start);
        Ok(result)
    }
}

/// Splits `total` into integer shares proportional to `weights`.
///
/// Uses largest remainders so the shares always sum to `total`; equal
/// remainders favour the earlier member. All-zero weights split uniformly.
fn allocate(total: usize, weights: &[f64]) -> Vec<usize> {
    if weights.is_empty() {
        return Vec::new();
    }
    let sum: f64 = weights.iter().sum();
    let uniform = vec![1.0; weights.len()];
    let (weights, sum) = if sum > 0.0 {
        (weights, sum)
    } else {
        (uniform.as_slice(), weights.len() as f64)
    };

    let exact: Vec<f64> = weights.iter().map(|w| w / sum * total as f64).collect();
    let mut shares: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();
    let assigned: usize = shares.iter().sum();

    let mut order: Vec<usize> = (0..exact.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &idx in order.iter().take(total.saturating_sub(assigned)) {
        shares[idx] += 1;
    }
    shares
}
