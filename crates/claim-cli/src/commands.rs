//! Subcommand handlers.

use anyhow::{Context, Result};

use claim_cli::pipeline::{PrepareOutcome, load_config, run_prepare};
use claim_model::AppConfig;
use claim_sampling::list_available_strategies;
use claim_scaling::{get_description, list_available_scalers};

use crate::cli::{ConfigArgs, PrepareArgs};
use crate::summary::registry_table;

pub fn run_prepare_command(args: &PrepareArgs) -> Result<PrepareOutcome> {
    let config = effective_config(args)?;
    run_prepare(&config, args.output_dir.as_deref())
}

pub fn run_scalers() -> Result<()> {
    let entries: Vec<(String, String)> = list_available_scalers()
        .into_iter()
        .map(|name| {
            let description = get_description(&name);
            (name, description)
        })
        .collect();
    println!("{}", registry_table("Scaler", &entries));
    Ok(())
}

pub fn run_samplers() -> Result<()> {
    let entries: Vec<(String, String)> = list_available_strategies()
        .into_iter()
        .map(|name| {
            let description = sampler_description(&name).to_string();
            (name, description)
        })
        .collect();
    println!("{}", registry_table("Sampler", &entries));
    Ok(())
}

pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let text = config
        .to_toml_string()
        .context("failed to render configuration")?;
    print!("{text}");
    Ok(())
}

/// Configuration file (or defaults) with command-line overrides applied.
fn effective_config(args: &PrepareArgs) -> Result<AppConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if let Some(scaler) = &args.scaler {
        config.scaling.method = scaler.clone();
    }
    if let Some(sampler) = &args.sampler {
        config.sampling.method = sampler.clone();
    }
    if let Some(strategy) = &args.strategy {
        config.sampling.strategy = strategy.clone();
    }
    if let Some(seed) = args.seed {
        config.random_state = seed;
    }
    if let Some(test_size) = args.test_size {
        config.test_size = test_size;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn sampler_description(name: &str) -> &'static str {
    match name {
        "none" => "No resampling",
        "random" => "Duplicate randomly chosen rows of smaller classes",
        "smote" => "Interpolate between same-class nearest neighbours",
        "adasyn" => "Interpolation weighted towards hard-to-learn rows",
        _ => "Custom sampler",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let args = PrepareArgs {
            data: Some(PathBuf::from("other.csv")),
            sampler: Some("random".to_string()),
            strategy: Some("0.5".to_string()),
            seed: Some(3),
            ..PrepareArgs::default()
        };
        let config = effective_config(&args).unwrap();
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.sampling.method, "random");
        assert_eq!(config.sampling.strategy, "0.5");
        assert_eq!(config.random_state, 3);
        assert_eq!(config.scaling.method, "standard");
    }

    #[test]
    fn invalid_test_size_override_is_rejected() {
        let args = PrepareArgs {
            test_size: Some(1.5),
            ..PrepareArgs::default()
        };
        assert!(effective_config(&args).is_err());
    }

    #[test]
    fn unknown_sampler_gets_generic_description() {
        assert_eq!(sampler_description("tomek"), "Custom sampler");
    }
}
