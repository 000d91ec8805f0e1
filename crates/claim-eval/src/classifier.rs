//! The model adapter contract.

use claim_common::FeatureSet;
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::metrics::{ClassificationMetrics, evaluate};

/// A binary classifier trained on prepared features.
///
/// Wrap any external model in this trait to plug it into the pipeline.
/// Predictions are labels in `{0, 1}`, one per row of the input.
pub trait Classifier: Send + Sync {
    /// Name reported alongside metrics.
    fn name(&self) -> &str;

    fn train(&mut self, data: &FeatureSet) -> Result<()>;

    fn predict(&self, features: &DataFrame) -> Result<Vec<i64>>;

    /// Positive-class scores, when the model produces them.
    ///
    /// ROC-AUC is computed from these if present and from the predicted
    /// labels otherwise.
    fn predict_scores(&self, _features: &DataFrame) -> Result<Option<Vec<f64>>> {
        Ok(None)
    }
}

/// Predicts on `test` and scores the result against its labels.
pub fn evaluate_model(model: &dyn Classifier, test: &FeatureSet) -> Result<ClassificationMetrics> {
    let predicted = model.predict(test.features())?;
    let scores = model.predict_scores(test.features())?;
    let actual = test.label_values()?;
    Ok(evaluate(&actual, &predicted, model.name(), scores.as_deref()))
}
