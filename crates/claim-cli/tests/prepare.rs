//! End-to-end runs of the `prepare` pipeline on a small policy table.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use claim_cli::pipeline::{METRICS_FILE, TEST_FILE, TRAIN_FILE, run_prepare};
use claim_ingest::CsvLoader;
use claim_model::{AppConfig, ColumnRoles};

/// 15 non-claims and 5 claims; claims are the shorter cars.
fn write_policies(dir: &Path) -> PathBuf {
    let mut csv = String::from("policy_id,is_esc,length,ncap_rating,fuel_type,is_claim\n");
    let fuels = ["Petrol", "Diesel", "CNG"];
    for i in 0..20 {
        let claim = i >= 15;
        let length = if claim { 3400 + i * 10 } else { 4000 + i * 10 };
        let esc = if i % 2 == 0 { "Yes" } else { "No" };
        writeln!(
            csv,
            "ID{i:05},{esc},{length},{},{},{}",
            i % 6,
            fuels[i % 3],
            u8::from(claim)
        )
        .unwrap();
    }
    let path = dir.join("policies.csv");
    std::fs::write(&path, csv).unwrap();
    path
}

fn config(data_path: PathBuf) -> AppConfig {
    let mut config = AppConfig {
        data_path,
        columns: ColumnRoles::new("is_claim")
            .with_identifiers(["policy_id"])
            .with_booleans(["is_esc"])
            .with_numerics(["length"])
            .with_ordinal("ncap_rating", ["0", "1", "2", "3", "4", "5"])
            .with_nominals(["fuel_type"]),
        ..AppConfig::default()
    };
    config.sampling.method = "smote".to_string();
    config.scaling.method = "minmax".to_string();
    config
}

#[test]
fn prepare_balances_train_split_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(write_policies(dir.path()));

    let outcome = run_prepare(&config, None).unwrap();

    assert_eq!(outcome.raw_rows, 20);
    assert_eq!(outcome.raw_columns, 6);
    // is_esc, length, ncap_rating_rank and two fuel_type indicators
    assert_eq!(outcome.feature_columns, 5);
    assert_eq!(outcome.test_rows, 4);
    assert_eq!(
        outcome.balance_before.into_iter().collect::<Vec<_>>(),
        vec![(0, 12), (1, 4)]
    );
    assert_eq!(
        outcome.balance_after.into_iter().collect::<Vec<_>>(),
        vec![(0, 12), (1, 12)]
    );
    assert_eq!(outcome.train_rows, 24);
    assert_eq!(outcome.sampler, "smote");
    assert_eq!(outcome.scaler, "minmax");
    assert!(outcome.written.is_empty());
}

#[test]
fn prepare_writes_labelled_splits() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(write_policies(dir.path()));
    let out = dir.path().join("prepared");

    let outcome = run_prepare(&config, Some(&out)).unwrap();
    assert_eq!(outcome.written.len(), 3);

    let train = CsvLoader::new(out.join(TRAIN_FILE)).load().unwrap();
    assert_eq!(train.height(), 24);
    let names: Vec<String> = train
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names.last().map(String::as_str), Some("is_claim"));
    assert!(!names.iter().any(|name| name == "policy_id"));

    let length = train.column("length").unwrap().f64().unwrap();
    assert!(length.into_iter().flatten().all(|v| (0.0..=1.0).contains(&v)));

    let test = CsvLoader::new(out.join(TEST_FILE)).load().unwrap();
    assert_eq!(test.height(), 4);

    let metrics = std::fs::read_to_string(out.join(METRICS_FILE)).unwrap();
    assert!(metrics.contains("\"model\": \"majority\""));
}

#[test]
fn prepare_is_reproducible_for_a_seed() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(write_policies(dir.path()));
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    run_prepare(&config, Some(&first)).unwrap();
    run_prepare(&config, Some(&second)).unwrap();

    let a = CsvLoader::new(first.join(TRAIN_FILE)).load().unwrap();
    let b = CsvLoader::new(second.join(TRAIN_FILE)).load().unwrap();
    assert!(a.equals_missing(&b));
}

#[test]
fn prepare_reports_unknown_sampler() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(write_policies(dir.path()));
    config.sampling.method = "tomek".to_string();

    let err = run_prepare(&config, None).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("tomek"));
    assert!(message.contains("smote"));
}

#[test]
fn prepare_reports_missing_label_column() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(write_policies(dir.path()));
    config.columns.label_column = "claim_status".to_string();

    let err = run_prepare(&config, None).unwrap_err();
    assert!(format!("{err:#}").contains("claim_status"));
}

#[test]
fn prepare_reports_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path().join("absent.csv"));

    let err = run_prepare(&config, None).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load dataset"));
}
