//! Feature matrix and label vector pair.
//!
//! Every stage after feature transformation (splitting, resampling, scaling,
//! evaluation) exchanges a [`FeatureSet`] so the row alignment between `X`
//! and `y` is checked once, at construction.

use std::collections::BTreeMap;

use polars::prelude::*;

/// A model-ready feature matrix with its row-aligned binary label vector.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    features: DataFrame,
    labels: Series,
}

impl FeatureSet {
    /// Pairs a feature matrix with a label vector.
    ///
    /// # Errors
    ///
    /// Returns a shape mismatch when the matrix height differs from the
    /// label count. A matrix without columns still carries a height.
    pub fn new(features: DataFrame, labels: Series) -> PolarsResult<Self> {
        polars_ensure!(
            features.height() == labels.len(),
            ShapeMismatch: "feature matrix has {} rows but label vector has {}",
            features.height(),
            labels.len()
        );
        Ok(Self { features, labels })
    }

    /// The feature matrix `X`.
    pub fn features(&self) -> &DataFrame {
        &self.features
    }

    /// The label vector `y`.
    pub fn labels(&self) -> &Series {
        &self.labels
    }

    /// Number of rows (policies).
    pub fn height(&self) -> usize {
        self.labels.len()
    }

    /// Number of feature columns.
    pub fn width(&self) -> usize {
        self.features.width()
    }

    /// Splits the pair back into `(X, y)`.
    pub fn into_parts(self) -> (DataFrame, Series) {
        (self.features, self.labels)
    }

    /// Labels as `i64` values; nulls are skipped.
    pub fn label_values(&self) -> PolarsResult<Vec<i64>> {
        let labels = self.labels.cast(&DataType::Int64)?;
        Ok(labels.i64()?.into_iter().flatten().collect())
    }

    /// Row count per label, in ascending label order.
    pub fn class_counts(&self) -> PolarsResult<BTreeMap<i64, usize>> {
        let mut counts = BTreeMap::new();
        for label in self.label_values()? {
            *counts.entry(label).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Selects rows by position, keeping column dtypes.
    pub fn take_rows(&self, indices: &[IdxSize]) -> PolarsResult<Self> {
        let idx = IdxCa::from_vec("idx".into(), indices.to_vec());
        let features = if self.features.width() == 0 {
            DataFrame::empty_with_height(indices.len())
        } else {
            self.features.take(&idx)?
        };
        let labels = self.labels.take(&idx)?;
        Self::new(features, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureSet {
        let features = df! {
            "length" => [4000.0, 4200.0, 3900.0],
            "is_esc" => [true, false, true],
        }
        .unwrap();
        let labels = Series::new("is_claim".into(), vec![1i64, 0, 0]);
        FeatureSet::new(features, labels).unwrap()
    }

    #[test]
    fn rejects_mismatched_heights() {
        let features = df! { "length" => [1.0, 2.0] }.unwrap();
        let labels = Series::new("is_claim".into(), vec![1i64]);
        assert!(FeatureSet::new(features, labels).is_err());
    }

    #[test]
    fn featureless_matrix_keeps_row_count() {
        let labels = Series::new("is_claim".into(), vec![0i64, 1, 0]);
        assert!(FeatureSet::new(DataFrame::empty(), labels.clone()).is_err());

        let data = FeatureSet::new(DataFrame::empty_with_height(3), labels).unwrap();
        let subset = data.take_rows(&[2, 1]).unwrap();
        assert_eq!(subset.width(), 0);
        assert_eq!(subset.features().height(), 2);
        assert_eq!(subset.label_values().unwrap(), vec![0, 1]);
    }

    #[test]
    fn counts_classes_in_label_order() {
        let counts = sample().class_counts().unwrap();
        assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![(0, 2), (1, 1)]);
    }

    #[test]
    fn take_rows_keeps_alignment_and_dtypes() {
        let subset = sample().take_rows(&[2, 0]).unwrap();
        assert_eq!(subset.height(), 2);
        assert_eq!(subset.label_values().unwrap(), vec![0, 1]);
        let esc = subset.features().column("is_esc").unwrap();
        assert_eq!(esc.dtype(), &DataType::Boolean);
        let length = subset.features().column("length").unwrap().f64().unwrap();
        assert_eq!(length.get(0), Some(3900.0));
    }
}
