//! The `prepare` pipeline: load, transform, split, resample, scale, evaluate.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, IntoColumn, PolarsResult};
use tracing::info;

use claim_common::FeatureSet;
use claim_eval::{
    ClassificationMetrics, Classifier, MajorityClassifier, evaluate_model, train_test_split,
};
use claim_ingest::{CsvLoader, write_csv};
use claim_model::AppConfig;
use claim_sampling::{SamplingStrategy, create_strategy};
use claim_scaling::create_scaler;
use claim_transform::FeatureTransformer;

/// File names written into the output directory.
pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";
pub const METRICS_FILE: &str = "metrics.json";

/// Everything the summary tables report about one run.
#[derive(Debug, Clone)]
pub struct PrepareOutcome {
    pub data_path: PathBuf,
    pub raw_rows: usize,
    pub raw_columns: usize,
    pub feature_columns: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    /// Training class counts before resampling.
    pub balance_before: BTreeMap<i64, usize>,
    /// Training class counts after resampling.
    pub balance_after: BTreeMap<i64, usize>,
    pub sampler: String,
    pub strategy: String,
    pub scaler: String,
    pub metrics: ClassificationMetrics,
    pub written: Vec<PathBuf>,
}

/// Loads a configuration file, or the built-in defaults when `path` is None.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// Runs the pipeline described by `config`.
///
/// Only the training split is resampled; the scaler is fitted on the
/// resampled training split and applied unchanged to the test split.
pub fn run_prepare(config: &AppConfig, output_dir: Option<&Path>) -> Result<PrepareOutcome> {
    let start = Instant::now();
    config.validate().context("invalid configuration")?;
    let strategy: SamplingStrategy = config
        .sampling
        .strategy
        .parse()
        .context("invalid sampling strategy")?;
    let sampler = create_strategy(&config.sampling.method, strategy, Some(config.random_state))
        .context("failed to create sampler")?;
    let mut scaler = create_scaler(&config.scaling.method).context("failed to create scaler")?;

    let raw = CsvLoader::new(&config.data_path)
        .load()
        .context("failed to load dataset")?;
    let transformer = FeatureTransformer::new(Arc::new(config.columns.clone()));
    let prepared = transformer
        .process(&raw)
        .context("failed to transform features")?;

    let (train, test) = train_test_split(&prepared, config.test_size, config.random_state)
        .context("failed to split dataset")?;
    let balance_before = train.class_counts().context("failed to count classes")?;

    let resampled = sampler
        .resample(&train)
        .context("failed to resample training split")?;
    let balance_after = resampled
        .class_counts()
        .context("failed to count classes")?;

    let (train_x, train_y) = resampled.into_parts();
    let (test_x, test_y) = test.into_parts();
    let train_x = scaler
        .fit_transform(&train_x)
        .context("failed to scale training split")?;
    let test_x = scaler
        .transform(&test_x)
        .context("failed to scale test split")?;
    let train = FeatureSet::new(train_x, train_y).context("scaled training split misaligned")?;
    let test = FeatureSet::new(test_x, test_y).context("scaled test split misaligned")?;

    let mut baseline = MajorityClassifier::new();
    baseline.train(&train).context("failed to train baseline")?;
    let metrics = evaluate_model(&baseline, &test).context("failed to evaluate baseline")?;

    let written = match output_dir {
        Some(dir) => write_outputs(dir, &train, &test, &metrics)?,
        None => Vec::new(),
    };

    info!(
        rows = raw.height(),
        features = prepared.width(),
        train_rows = train.height(),
        test_rows = test.height(),
        sampler = sampler.name(),
        scaler = scaler.name(),
        duration_ms = start.elapsed().as_millis(),
        "Prepared dataset"
    );

    Ok(PrepareOutcome {
        data_path: config.data_path.clone(),
        raw_rows: raw.height(),
        raw_columns: raw.width(),
        feature_columns: prepared.width(),
        train_rows: train.height(),
        test_rows: test.height(),
        balance_before,
        balance_after,
        sampler: sampler.name().to_string(),
        strategy: strategy.to_string(),
        scaler: scaler.name().to_string(),
        metrics,
        written,
    })
}

fn write_outputs(
    dir: &Path,
    train: &FeatureSet,
    test: &FeatureSet,
    metrics: &ClassificationMetrics,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(3);
    for (name, split) in [(TRAIN_FILE, train), (TEST_FILE, test)] {
        let path = dir.join(name);
        let mut frame = labelled_frame(split).context("failed to attach labels")?;
        write_csv(&mut frame, &path).with_context(|| format!("failed to write {name}"))?;
        written.push(path);
    }

    let path = dir.join(METRICS_FILE);
    let json = serde_json::to_string_pretty(metrics).context("failed to serialize metrics")?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    written.push(path);
    Ok(written)
}

/// Feature matrix with the label vector appended as the last column.
pub fn labelled_frame(split: &FeatureSet) -> PolarsResult<DataFrame> {
    let mut frame = split.features().clone();
    frame.with_column(split.labels().clone().into_column())?;
    Ok(frame)
}
