//! Centre-and-scale transformations.
//!
//! Standard, min-max and robust scaling all compute `(x - center) / scale`
//! per column and differ only in how the two parameters are estimated.

use claim_common::is_numeric_dtype;
use polars::prelude::*;
use tracing::debug;

use crate::error::{Result, ScalingError};
use crate::scaler::Scaler;

/// How the centre and scale of a column are estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    /// Mean and population standard deviation.
    Standard,
    /// Minimum and range.
    MinMax,
    /// Median and interquartile range (linear quantiles).
    Robust,
}

impl ScaleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::MinMax => "minmax",
            Self::Robust => "robust",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ColumnParams {
    center: f64,
    scale: f64,
}

/// Scaler applying `(x - center) / scale` to every numeric column.
///
/// Booleans are treated as 0/1. Nulls are ignored while fitting and stay
/// null. A zero scale is replaced by 1 so constant columns are only
/// centred.
#[derive(Debug, Clone)]
pub struct AffineScaler {
    kind: ScaleKind,
    params: Option<Vec<(String, ColumnParams)>>,
}

impl AffineScaler {
    pub fn new(kind: ScaleKind) -> Self {
        Self { kind, params: None }
    }

    pub fn standard() -> Self {
        Self::new(ScaleKind::Standard)
    }

    pub fn minmax() -> Self {
        Self::new(ScaleKind::MinMax)
    }

    pub fn robust() -> Self {
        Self::new(ScaleKind::Robust)
    }

    /// Fitted `(center, scale)` for a column, if any.
    pub fn params_for(&self, column: &str) -> Option<(f64, f64)> {
        self.params
            .as_ref()?
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, p)| (p.center, p.scale))
    }

    fn compute_params(&self, values: &Float64Chunked) -> Result<ColumnParams> {
        let (center, scale) = match self.kind {
            ScaleKind::Standard => (values.mean().unwrap_or(0.0), values.std(0).unwrap_or(1.0)),
            ScaleKind::MinMax => {
                let min = values.min().unwrap_or(0.0);
                let max = values.max().unwrap_or(1.0);
                (min, max - min)
            }
            ScaleKind::Robust => {
                let median = values.median().unwrap_or(0.0);
                let q1 = values.quantile(0.25, QuantileMethod::Linear)?.unwrap_or(0.0);
                let q3 = values.quantile(0.75, QuantileMethod::Linear)?.unwrap_or(1.0);
                (median, q3 - q1)
            }
        };
        let scale = if scale == 0.0 || !scale.is_finite() {
            1.0
        } else {
            scale
        };
        Ok(ColumnParams { center, scale })
    }
}

fn numeric_values(column: &Column) -> Result<Float64Chunked> {
    if !is_numeric_dtype(column.dtype()) {
        return Err(ScalingError::NonNumericColumn {
            column: column.name().to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast.f64()?.clone())
}

impl Scaler for AffineScaler {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn fit(&mut self, features: &DataFrame) -> Result<()> {
        let mut params = Vec::with_capacity(features.width());
        for column in features.get_columns() {
            let values = numeric_values(column)?;
            params.push((column.name().to_string(), self.compute_params(&values)?));
        }
        debug!(scaler = self.kind.as_str(), columns = params.len(), "Fitted scaler");
        self.params = Some(params);
        Ok(())
    }

    fn transform(&self, features: &DataFrame) -> Result<DataFrame> {
        let params = self.params.as_ref().ok_or_else(|| ScalingError::NotFitted {
            scaler: self.kind.as_str().to_string(),
        })?;

        let mut result = features.clone();
        for (name, p) in params {
            let column = features
                .column(name)
                .map_err(|_| ScalingError::MissingFeature {
                    column: name.clone(),
                })?;
            let values = &numeric_values(column)?;
            let scaled: Float64Chunked = values
                .into_iter()
                .map(|opt| opt.map(|v| (v - p.center) / p.scale))
                .collect();
            result.with_column(scaled.with_name(column.name().clone()).into_column())?;
        }
        Ok(result)
    }
}
