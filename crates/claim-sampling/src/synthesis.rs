//! Helpers shared by the resamplers: class bookkeeping, dense feature rows,
//! neighbour interpolation and appending synthetic rows.

use std::collections::BTreeMap;

use claim_common::{FeatureSet, from_row_major, is_numeric_dtype, to_row_major};
use polars::prelude::*;
use rand::Rng;

use crate::error::{Result, SamplingError};
use crate::neighbors::nearest;

/// Row positions per label, in ascending label order.
pub(crate) fn class_indices(data: &FeatureSet) -> Result<BTreeMap<i64, Vec<usize>>> {
    let labels = data.labels();
    if labels.null_count() > 0 {
        return Err(SamplingError::MissingValues {
            column: labels.name().to_string(),
        });
    }
    let mut indices: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (row, label) in data.label_values()?.into_iter().enumerate() {
        indices.entry(label).or_default().push(row);
    }
    Ok(indices)
}

pub(crate) fn class_counts(indices: &BTreeMap<i64, Vec<usize>>) -> BTreeMap<i64, usize> {
    indices
        .iter()
        .map(|(&label, rows)| (label, rows.len()))
        .collect()
}

/// Features as dense `f64` rows, rejecting nulls and text columns.
pub(crate) fn dense_rows(features: &DataFrame) -> Result<Vec<Vec<f64>>> {
    for column in features.get_columns() {
        if !is_numeric_dtype(column.dtype()) {
            return Err(SamplingError::NonNumericColumn {
                column: column.name().to_string(),
                dtype: column.dtype().to_string(),
            });
        }
        if column.null_count() > 0 {
            return Err(SamplingError::MissingValues {
                column: column.name().to_string(),
            });
        }
    }
    let rows = to_row_major(features)?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(|v| v.unwrap_or_default()).collect())
        .collect())
}

/// Same-class neighbours of every member, as row indices into `points`.
pub(crate) fn member_neighbors(points: &[Vec<f64>], members: &[usize], k: usize) -> Vec<Vec<usize>> {
    members
        .iter()
        .map(|&member| nearest(points, member, members, k))
        .collect()
}

/// One synthetic row on the segment between member `origin` and a random
/// one of its neighbours. A member without neighbours is copied.
pub(crate) fn synthesize<R: Rng>(
    points: &[Vec<f64>],
    members: &[usize],
    neighbors: &[Vec<usize>],
    origin: usize,
    rng: &mut R,
) -> Vec<f64> {
    let sample = &points[members[origin]];
    let candidates = &neighbors[origin];
    if candidates.is_empty() {
        return sample.clone();
    }
    let neighbor = &points[candidates[rng.gen_range(0..candidates.len())]];
    let gap: f64 = rng.gen_range(0.0..1.0);
    sample
        .iter()
        .zip(neighbor)
        .map(|(&s, &n)| s + gap * (n - s))
        .collect()
}

/// Appends synthetic rows and their labels after the originals.
///
/// Synthetic values are cast back to each column's dtype; integer and
/// boolean columns are rounded first.
pub(crate) fn append_synthetic(
    data: &FeatureSet,
    rows: &[Vec<f64>],
    labels: &[i64],
) -> Result<FeatureSet> {
    if rows.is_empty() {
        return Ok(data.clone());
    }
    let features = if data.width() == 0 {
        DataFrame::empty_with_height(data.height() + rows.len())
    } else {
        let synthetic = from_row_major(data.features(), rows)?;
        let mut features = data.features().clone();
        features.vstack_mut(&synthetic)?;
        features
    };

    let mut y = data.labels().cast(&DataType::Int64)?;
    let extra = Series::new(y.name().clone(), labels);
    y.append(&extra)?;
    Ok(FeatureSet::new(features, y)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn synthetic_rows_lie_between_sample_and_neighbour() {
        let points = vec![vec![0.0, 0.0], vec![10.0, 20.0]];
        let members = vec![0, 1];
        let neighbors = member_neighbors(&points, &members, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let row = synthesize(&points, &members, &neighbors, 0, &mut rng);
            assert!((0.0..=10.0).contains(&row[0]));
            assert!((row[1] - 2.0 * row[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn dense_rows_reject_nulls() {
        let df = df! { "length" => [Some(1.0), None] }.unwrap();
        assert!(matches!(
            dense_rows(&df),
            Err(SamplingError::MissingValues { .. })
        ));
    }

    #[test]
    fn append_to_featureless_set_grows_both_sides() {
        let labels = Series::new("is_claim".into(), [0i64, 0, 1]);
        let data = FeatureSet::new(DataFrame::empty_with_height(3), labels).unwrap();

        let grown = append_synthetic(&data, &[Vec::new()], &[1]).unwrap();
        assert_eq!(grown.features().height(), 4);
        assert_eq!(grown.label_values().unwrap(), vec![0, 0, 1, 1]);
    }

    #[test]
    fn append_restores_dtypes() {
        let features = df! {
            "airbags" => [2i64, 6],
            "is_esc" => [true, false],
        }
        .unwrap();
        let labels = Series::new("is_claim".into(), [0i64, 1]);
        let data = FeatureSet::new(features, labels).unwrap();

        let grown = append_synthetic(&data, &[vec![4.4, 0.7]], &[1]).unwrap();
        assert_eq!(grown.height(), 3);
        let airbags = grown.features().column("airbags").unwrap();
        assert_eq!(airbags.dtype(), &DataType::Int64);
        assert_eq!(airbags.i64().unwrap().get(2), Some(4));
        assert_eq!(grown.label_values().unwrap(), vec![0, 1, 1]);
    }
}
