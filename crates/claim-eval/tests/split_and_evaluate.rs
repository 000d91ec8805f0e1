//! Splitting prepared data and scoring a baseline model on it.

use claim_common::FeatureSet;
use claim_eval::{
    Classifier, EvalError, MajorityClassifier, evaluate, evaluate_model, train_test_split,
};
use polars::prelude::*;
use proptest::prelude::*;

fn dataset(negatives: usize, positives: usize) -> FeatureSet {
    let n = negatives + positives;
    let length: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let labels: Vec<i64> = (0..n).map(|i| i64::from(i >= negatives)).collect();
    let features = DataFrame::new(vec![Column::new("length".into(), length)]).unwrap();
    FeatureSet::new(features, Series::new("is_claim".into(), labels)).unwrap()
}

#[test]
fn split_is_stratified_and_seeded() {
    let data = dataset(80, 20);
    let (train, test) = train_test_split(&data, 0.2, 11).unwrap();

    assert_eq!(train.height(), 80);
    assert_eq!(test.height(), 20);
    let test_counts: Vec<(i64, usize)> = test.class_counts().unwrap().into_iter().collect();
    assert_eq!(test_counts, vec![(0, 16), (1, 4)]);

    let (_, again) = train_test_split(&data, 0.2, 11).unwrap();
    assert!(test.features().equals(again.features()));

    let (_, other) = train_test_split(&data, 0.2, 12).unwrap();
    assert!(!test.features().equals(other.features()));
}

#[test]
fn split_rejects_bad_test_size() {
    let data = dataset(5, 5);
    for size in [0.0, 1.0, -0.5, f64::NAN] {
        assert!(matches!(
            train_test_split(&data, size, 1),
            Err(EvalError::InvalidTestSize { .. })
        ));
    }
}

#[test]
fn baseline_scores_on_held_out_split() {
    let data = dataset(80, 20);
    let (train, test) = train_test_split(&data, 0.2, 11).unwrap();

    let mut model = MajorityClassifier::new();
    model.train(&train).unwrap();
    let metrics = evaluate_model(&model, &test).unwrap();

    assert_eq!(metrics.model, "majority");
    assert!((metrics.accuracy - 0.8).abs() < 1e-12);
    assert_eq!(metrics.precision, 0.0);
    assert_eq!(metrics.recall, 0.0);
    assert_eq!(metrics.false_negative_rate, 1.0);
    assert!((metrics.roc_auc - 0.5).abs() < 1e-12);
}

#[test]
fn unavailable_metrics_serialize_as_null() {
    let metrics = evaluate(&[0, 1], &[1], "broken", None);
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["model"], "broken");
    assert!(json["accuracy"].is_null());
}

proptest! {
    #[test]
    fn split_partitions_rows_and_keeps_each_class_on_both_sides(
        negatives in 2usize..60,
        positives in 2usize..20,
        test_size in 0.05f64..0.95,
        seed in any::<u64>(),
    ) {
        let data = dataset(negatives, positives);
        let (train, test) = train_test_split(&data, test_size, seed).unwrap();

        prop_assert_eq!(train.height() + test.height(), data.height());
        let train_counts = train.class_counts().unwrap();
        let test_counts = test.class_counts().unwrap();
        for label in [0i64, 1] {
            prop_assert!(train_counts.get(&label).copied().unwrap_or(0) >= 1);
            prop_assert!(test_counts.get(&label).copied().unwrap_or(0) >= 1);
        }

        let mut seen: Vec<f64> = train
            .features()
            .column("length")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .chain(test.features().column("length").unwrap().f64().unwrap().into_iter())
            .flatten()
            .collect();
        seen.sort_by(f64::total_cmp);
        let expected: Vec<f64> = (0..data.height()).map(|i| i as f64).collect();
        prop_assert_eq!(seen, expected);
    }
}
