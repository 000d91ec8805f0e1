//! Pass-through scaler.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::scaler::Scaler;

/// Leaves features untouched. Registered as `none`.
///
/// `transform` returns a clone of the input, which shares every column
/// buffer with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScaler;

impl Scaler for IdentityScaler {
    fn name(&self) -> &str {
        "none"
    }

    fn fit(&mut self, _features: &DataFrame) -> Result<()> {
        Ok(())
    }

    fn transform(&self, features: &DataFrame) -> Result<DataFrame> {
        Ok(features.clone())
    }
}
