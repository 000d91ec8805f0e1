//! Model hand-off and evaluation.
//!
//! Prepared data leaves the pipeline through the [`Classifier`] trait. This
//! crate supplies the pieces around it: a seeded stratified
//! [`train_test_split`], a [`MajorityClassifier`] baseline and the
//! [`evaluate`] metric set. Metrics that cannot be computed are reported as
//! NaN rather than failing the whole evaluation.

mod classifier;
mod error;
mod majority;
mod metrics;
mod split;

pub use classifier::{Classifier, evaluate_model};
pub use error::{EvalError, Result};
pub use majority::MajorityClassifier;
pub use metrics::{ClassificationMetrics, ConfusionMatrix, evaluate};
pub use split::train_test_split;
