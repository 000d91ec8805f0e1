//! Training-set rebalancing.
//!
//! A [`Resampler`] takes a [`FeatureSet`](claim_common::FeatureSet) and
//! returns a new one with extra minority-class rows appended after the
//! originals. Built-in methods:
//!
//! - `none`: returns the input unchanged
//! - `random`: duplicates existing rows of under-represented classes
//! - `smote`: interpolates between same-class nearest neighbours
//! - `adasyn`: SMOTE weighted towards rows surrounded by other classes
//!
//! Resample the training split only. Rebalancing before the train/test split
//! leaks synthetic copies of training rows into evaluation and inflates every
//! metric.
//!
//! # Example
//!
//! ```ignore
//! use claim_sampling::{SamplingStrategy, create_strategy};
//!
//! let sampler = create_strategy("smote", SamplingStrategy::Minority, Some(11))?;
//! let balanced = sampler.resample(&train)?;
//! ```

mod adasyn;
mod error;
mod neighbors;
mod passthrough;
mod random;
mod registry;
mod resampler;
mod smote;
mod strategy;
mod synthesis;

pub use adasyn::Adasyn;
pub use error::{Result, SamplingError};
pub use passthrough::PassThrough;
pub use random::RandomOverSampler;
pub use registry::{
    SamplerConstructor, SamplerRegistry, create_strategy, list_available_strategies,
    register_strategy,
};
pub use resampler::{Resampler, SamplerParams};
pub use smote::{DEFAULT_K_NEIGHBORS, Smote};
pub use strategy::SamplingStrategy;
