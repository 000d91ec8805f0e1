//! Baseline classifier.

use claim_common::FeatureSet;
use polars::prelude::DataFrame;

use crate::classifier::Classifier;
use crate::error::{EvalError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fitted {
    majority: i64,
    positive_rate: f64,
}

/// Always predicts the most frequent training label.
///
/// Scores are the positive rate seen in training, so its ROC-AUC is 0.5 on
/// any split holding both classes. Useful as the floor any real model has
/// to beat. Ties go to the lower label.
#[derive(Debug, Clone, Default)]
pub struct MajorityClassifier {
    fitted: Option<Fitted>,
}

impl MajorityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label predicted for every row, once trained.
    pub fn majority_label(&self) -> Option<i64> {
        self.fitted.map(|f| f.majority)
    }

    fn fitted(&self) -> Result<Fitted> {
        self.fitted.ok_or_else(|| EvalError::NotTrained {
            model: self.name().to_string(),
        })
    }
}

impl Classifier for MajorityClassifier {
    fn name(&self) -> &str {
        "majority"
    }

    fn train(&mut self, data: &FeatureSet) -> Result<()> {
        let counts = data.class_counts()?;
        let total: usize = counts.values().sum();
        if total == 0 {
            return Err(EvalError::EmptyTrainingSet);
        }

        let mut majority: Option<(i64, usize)> = None;
        for (&label, &count) in &counts {
            if majority.is_none_or(|(_, best)| count > best) {
                majority = Some((label, count));
            }
        }
        let Some((majority, _)) = majority else {
            return Err(EvalError::EmptyTrainingSet);
        };
        let positives = counts.get(&1).copied().unwrap_or(0);

        self.fitted = Some(Fitted {
            majority,
            positive_rate: positives as f64 / total as f64,
        });
        Ok(())
    }

    fn predict(&self, features: &DataFrame) -> Result<Vec<i64>> {
        let fitted = self.fitted()?;
        Ok(vec![fitted.majority; features.height()])
    }

    fn predict_scores(&self, features: &DataFrame) -> Result<Option<Vec<f64>>> {
        let fitted = self.fitted()?;
        Ok(Some(vec![fitted.positive_rate; features.height()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn data(labels: &[i64]) -> FeatureSet {
        let features = DataFrame::new(vec![Column::new(
            "length".into(),
            vec![1.0; labels.len()],
        )])
        .unwrap();
        FeatureSet::new(features, Series::new("is_claim".into(), labels)).unwrap()
    }

    #[test]
    fn predicts_most_frequent_label() {
        let mut model = MajorityClassifier::new();
        model.train(&data(&[0, 0, 1, 0])).unwrap();
        assert_eq!(model.majority_label(), Some(0));

        let test = data(&[1, 1]);
        assert_eq!(model.predict(test.features()).unwrap(), vec![0, 0]);
        assert_eq!(
            model.predict_scores(test.features()).unwrap(),
            Some(vec![0.25, 0.25])
        );
    }

    #[test]
    fn ties_go_to_lower_label() {
        let mut model = MajorityClassifier::new();
        model.train(&data(&[1, 0])).unwrap();
        assert_eq!(model.majority_label(), Some(0));
    }

    #[test]
    fn predict_requires_training() {
        let model = MajorityClassifier::new();
        let err = model.predict(data(&[0]).features()).unwrap_err();
        assert!(matches!(err, EvalError::NotTrained { .. }));
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let mut model = MajorityClassifier::new();
        assert!(matches!(
            model.train(&data(&[])),
            Err(EvalError::EmptyTrainingSet)
        ));
    }
}
