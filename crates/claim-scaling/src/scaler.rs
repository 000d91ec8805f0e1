//! The scaler capability.

use polars::prelude::DataFrame;

use crate::error::Result;

/// A per-column feature transformation fitted on one frame and applied to
/// others.
///
/// Implementations hold their own fit state; a registry hands out a fresh,
/// unfitted instance on every lookup.
///
/// # Example
///
/// ```ignore
/// struct Halve;
///
/// impl Scaler for Halve {
///     fn name(&self) -> &str {
///         "halve"
///     }
///
///     fn fit(&mut self, _features: &DataFrame) -> Result<()> {
///         Ok(())
///     }
///
///     fn transform(&self, features: &DataFrame) -> Result<DataFrame> {
///         // ...
///     }
/// }
/// ```
pub trait Scaler: Send + Sync {
    /// Registry name of this scaler.
    fn name(&self) -> &str;

    /// Learns per-column parameters from `features`.
    fn fit(&mut self, features: &DataFrame) -> Result<()>;

    /// Applies the fitted parameters, returning a new frame.
    fn transform(&self, features: &DataFrame) -> Result<DataFrame>;

    /// Fits on `features` and transforms the same frame.
    fn fit_transform(&mut self, features: &DataFrame) -> Result<DataFrame> {
        self.fit(features)?;
        self.transform(features)
    }
}
