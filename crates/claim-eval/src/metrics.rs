//! Binary classification metrics.

use serde::Serialize;
use tracing::debug;

/// Counts of a 2x2 confusion matrix over labels `{0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConfusionMatrix {
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_positives: usize,
}

impl ConfusionMatrix {
    /// Tallies paired labels; `None` if lengths differ, the input is empty
    /// or a label is outside `{0, 1}`.
    pub fn from_labels(y_true: &[i64], y_pred: &[i64]) -> Option<Self> {
        if y_true.is_empty() || y_true.len() != y_pred.len() {
            return None;
        }
        let mut matrix = Self::default();
        for (&actual, &predicted) in y_true.iter().zip(y_pred) {
            match (actual, predicted) {
                (0, 0) => matrix.true_negatives += 1,
                (0, 1) => matrix.false_positives += 1,
                (1, 0) => matrix.false_negatives += 1,
                (1, 1) => matrix.true_positives += 1,
                _ => return None,
            }
        }
        Some(matrix)
    }

    pub fn total(&self) -> usize {
        self.true_negatives + self.false_positives + self.false_negatives + self.true_positives
    }
}

/// Metric set for one model on one evaluation split.
///
/// Undefined values are NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationMetrics {
    pub model: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub roc_auc: f64,
    pub false_negative_rate: f64,
}

impl ClassificationMetrics {
    /// Every metric NaN.
    pub fn unavailable(model: &str) -> Self {
        Self {
            model: model.to_string(),
            accuracy: f64::NAN,
            precision: f64::NAN,
            recall: f64::NAN,
            f1_score: f64::NAN,
            roc_auc: f64::NAN,
            false_negative_rate: f64::NAN,
        }
    }
}

fn ratio_or_zero(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Scores predicted labels against true labels.
///
/// - precision, recall and F1 are 0 when their denominator is 0
/// - false-negative rate is `FN / (FN + TP)`, or 0 without positives
/// - ROC-AUC uses `y_score` when given, else `y_pred`, and is NaN when
///   `y_true` holds a single class or the scores are unusable
///
/// Mismatched lengths, empty input or labels outside `{0, 1}` make every
/// metric NaN.
pub fn evaluate(
    y_true: &[i64],
    y_pred: &[i64],
    model: &str,
    y_score: Option<&[f64]>,
) -> ClassificationMetrics {
    let Some(cm) = ConfusionMatrix::from_labels(y_true, y_pred) else {
        debug!(model, "Metrics unavailable for malformed labels");
        return ClassificationMetrics::unavailable(model);
    };

    let precision = ratio_or_zero(cm.true_positives, cm.true_positives + cm.false_positives);
    let recall = ratio_or_zero(cm.true_positives, cm.true_positives + cm.false_negatives);
    let f1_score = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    let roc_auc = match y_score {
        Some(scores) => roc_auc(y_true, scores),
        None => {
            let as_scores: Vec<f64> = y_pred.iter().map(|&p| p as f64).collect();
            roc_auc(y_true, &as_scores)
        }
    };

    ClassificationMetrics {
        model: model.to_string(),
        accuracy: ratio_or_zero(cm.true_positives + cm.true_negatives, cm.total()),
        precision,
        recall,
        f1_score,
        roc_auc,
        false_negative_rate: ratio_or_zero(
            cm.false_negatives,
            cm.false_negatives + cm.true_positives,
        ),
    }
}

/// Area under the ROC curve via the Mann-Whitney rank statistic, with tied
/// scores sharing their average rank.
fn roc_auc(y_true: &[i64], scores: &[f64]) -> f64 {
    if y_true.len() != scores.len() || scores.iter().any(|s| !s.is_finite()) {
        return f64::NAN;
    }
    let positives = y_true.iter().filter(|&&y| y == 1).count();
    let negatives = y_true.len() - positives;
    if positives == 0 || negatives == 0 {
        return f64::NAN;
    }

    let n = scores.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && scores[order[end + 1]] == scores[order[start]] {
            end += 1;
        }
        let average = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = average;
        }
        start = end + 1;
    }

    let positive_rank_sum: f64 = y_true
        .iter()
        .zip(&ranks)
        .filter(|&(&y, _)| y == 1)
        .map(|(_, &r)| r)
        .sum();
    let p = positives as f64;
    (positive_rank_sum - p * (p + 1.0) / 2.0) / (p * negatives as f64)
}
