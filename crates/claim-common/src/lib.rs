//! Shared utilities for the claim preparation crates.
//!
//! This crate provides the Polars `AnyValue` helpers used by every stage and
//! the [`FeatureSet`] pair that carries a feature matrix together with its
//! label vector, plus row-major conversions for distance-based samplers.

pub mod any_value;
pub mod feature_set;
pub mod matrix;

pub use feature_set::FeatureSet;
pub use matrix::{from_row_major, to_row_major};
pub use any_value::{
    any_to_f64, any_to_i64, any_to_string, column_names, format_numeric, is_numeric_dtype,
    parse_f64, parse_i64,
};
