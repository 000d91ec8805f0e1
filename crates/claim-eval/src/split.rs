//! Stratified train/test split.

use std::collections::BTreeMap;

use claim_common::FeatureSet;
use polars::prelude::IdxSize;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::{EvalError, Result};

/// Splits `data` into `(train, test)`, stratified by label.
///
/// Each class is shuffled with a generator seeded from `seed` (classes in
/// ascending label order) and `round(test_size * class_rows)` of its rows go
/// to the test split. A class with at least two rows always keeps one row on
/// each side; a single-row class stays in training. Both splits keep the
/// original row order.
///
/// # Errors
///
/// - [`EvalError::InvalidTestSize`] unless `0 < test_size < 1`
/// - [`EvalError::MissingLabels`] when a label is null
pub fn train_test_split(
    data: &FeatureSet,
    test_size: f64,
    seed: u64,
) -> Result<(FeatureSet, FeatureSet)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(EvalError::InvalidTestSize { value: test_size });
    }
    if data.labels().null_count() > 0 {
        return Err(EvalError::MissingLabels {
            column: data.labels().name().to_string(),
        });
    }

    let mut classes: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (row, label) in data.label_values()?.into_iter().enumerate() {
        classes.entry(label).or_default().push(row);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut train: Vec<IdxSize> = Vec::with_capacity(data.height());
    let mut test: Vec<IdxSize> = Vec::new();
    for rows in classes.values_mut() {
        rows.shuffle(&mut rng);
        let held_out = held_out_rows(rows.len(), test_size);
        test.extend(rows[..held_out].iter().map(|&r| r as IdxSize));
        train.extend(rows[held_out..].iter().map(|&r| r as IdxSize));
    }
    train.sort_unstable();
    test.sort_unstable();

    info!(
        train_rows = train.len(),
        test_rows = test.len(),
        classes = classes.len(),
        "Split dataset"
    );
    Ok((data.take_rows(&train)?, data.take_rows(&test)?))
}

fn held_out_rows(class_rows: usize, test_size: f64) -> usize {
    if class_rows < 2 {
        return 0;
    }
    let wanted = (test_size * class_rows as f64).round() as usize;
    wanted.clamp(1, class_rows - 1)
}
