//! Role-driven table processing.

use std::sync::Arc;
use std::time::Instant;

use claim_common::FeatureSet;
use claim_model::{ColumnRole, ColumnRoles};
use polars::prelude::*;
use tracing::{debug, info};

use crate::encode::{
    encode_boolean, encode_nominal, encode_numeric, encode_ordinal, extract_labels,
};
use crate::error::{Result, TransformError};

/// Turns raw policy tables into `(X, y)` under a fixed role schema.
///
/// The schema is shared read-only, so one transformer can serve any number
/// of tables (training data and later scoring batches alike).
#[derive(Debug, Clone)]
pub struct FeatureTransformer {
    roles: Arc<ColumnRoles>,
}

impl FeatureTransformer {
    pub fn new(roles: Arc<ColumnRoles>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &ColumnRoles {
        &self.roles
    }

    /// Processes a raw table into a feature matrix and label vector.
    ///
    /// Steps run in a fixed order: drop identifiers, booleans, numerics,
    /// ordinals, nominals, then label extraction. The input is never
    /// modified.
    ///
    /// # Errors
    ///
    /// - [`TransformError::MissingColumn`] when the label column is absent
    /// - [`TransformError::InvalidLabel`] when a label is not 0 or 1
    pub fn process(&self, table: &DataFrame) -> Result<FeatureSet> {
        let start = Instant::now();
        let roles = self.roles.as_ref();

        if table.get_column_index(&roles.label_column).is_none() {
            return Err(TransformError::MissingColumn {
                column: roles.label_column.clone(),
            });
        }

        let mut df = table.clone();

        for column in &roles.identifier_columns {
            replace_if_present(&mut df, column, ColumnRole::Identifier, |_| Ok(Vec::new()))?;
        }

        for column in &roles.boolean_columns {
            replace_if_present(&mut df, column, ColumnRole::Boolean, |raw| {
                let (encoded, unrecognised) = encode_boolean(raw, &roles.boolean_labels);
                if unrecognised > 0 {
                    debug!(column = %column, unrecognised, "Unrecognised boolean labels set to false");
                }
                Ok(vec![encoded])
            })?;
        }

        for column in &roles.numeric_columns {
            replace_if_present(&mut df, column, ColumnRole::Numeric, |raw| {
                let (encoded, unparsed) = encode_numeric(raw)?;
                if unparsed > 0 {
                    debug!(column = %column, unparsed, "Unparseable numeric values set to null");
                }
                Ok(vec![encoded])
            })?;
        }

        for (column, categories) in &roles.ordinal_columns {
            replace_if_present(&mut df, column, ColumnRole::Ordinal, |raw| {
                let (encoded, unknown) = encode_ordinal(raw, categories);
                if unknown > 0 {
                    debug!(column = %column, unknown, "Unknown ordinal categories given null rank");
                }
                Ok(vec![encoded])
            })?;
        }

        for column in &roles.nominal_columns {
            replace_if_present(&mut df, column, ColumnRole::Nominal, |raw| {
                let indicators = encode_nominal(raw);
                debug!(column = %column, indicators = indicators.len(), "Expanded nominal column");
                Ok(indicators)
            })?;
        }

        let label = df.drop_in_place(&roles.label_column)?;
        let labels = extract_labels(&label)?;
        if df.width() == 0 {
            df = DataFrame::empty_with_height(labels.len());
        }
        let features = FeatureSet::new(df, labels)?;

        info!(
            rows = features.height(),
            features = features.width(),
            duration_ms = start.elapsed().as_millis(),
            "Processed feature table"
        );
        Ok(features)
    }
}

/// Replaces `column` with the output of `encode` at the same position, or
/// does nothing when the column is absent.
///
/// Every role goes through here so a missing column is handled the same way
/// regardless of its role. A replacement whose name is already taken gets the
/// first free `_2`, `_3`, ... suffix. Returns whether the column was present.
fn replace_if_present<F>(
    df: &mut DataFrame,
    column: &str,
    role: ColumnRole,
    encode: F,
) -> Result<bool>
where
    F: FnOnce(&Column) -> Result<Vec<Column>>,
{
    let Some(position) = df.get_column_index(column) else {
        debug!(column, role = %role, "Column absent, skipping");
        return Ok(false);
    };
    let original = df.drop_in_place(column)?;
    let replacements = encode(&original)?;
    for (offset, mut replacement) in replacements.into_iter().enumerate() {
        if df.get_column_index(replacement.name()).is_some() {
            let taken = replacement.name().to_string();
            let renamed = free_name(df, &taken);
            debug!(column, taken = %taken, renamed = %renamed, "Generated name taken, suffixing");
            replacement.rename(renamed.into());
        }
        df.insert_column(position + offset, replacement)?;
    }
    Ok(true)
}

fn free_name(df: &DataFrame, base: &str) -> String {
    let mut suffix = 2usize;
    loop {
        let candidate = format!("{base}_{suffix}");
        if df.get_column_index(&candidate).is_none() {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_keeps_column_position() {
        let mut df = df! {
            "a" => [1i64, 2],
            "fuel_type" => ["CNG", "Petrol"],
            "z" => [0i64, 1],
        }
        .unwrap();
        let present = replace_if_present(&mut df, "fuel_type", ColumnRole::Nominal, |raw| {
            Ok(encode_nominal(raw))
        })
        .unwrap();
        assert!(present);
        let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["a", "fuel_type_Petrol", "z"]);
    }

    #[test]
    fn taken_names_get_numeric_suffix() {
        let mut df = df! {
            "fuel_type_x" => [true, false],
            "fuel_type_x_2" => [false, true],
            "fuel_type" => ["w", "x"],
        }
        .unwrap();
        replace_if_present(&mut df, "fuel_type", ColumnRole::Nominal, |raw| {
            Ok(encode_nominal(raw))
        })
        .unwrap();
        let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["fuel_type_x", "fuel_type_x_2", "fuel_type_x_3"]);
    }

    #[test]
    fn replace_skips_absent_column() {
        let mut df = df! { "a" => [1i64] }.unwrap();
        let present = replace_if_present(&mut df, "policy_id", ColumnRole::Identifier, |_| {
            panic!("encoder must not run for an absent column")
        })
        .unwrap();
        assert!(!present);
        assert_eq!(df.width(), 1);
    }

    #[test]
    fn input_table_is_not_modified() {
        let roles = ColumnRoles::new("is_claim")
            .with_identifiers(["policy_id"])
            .with_booleans(["is_esc"]);
        let table = df! {
            "policy_id" => ["1", "2"],
            "is_esc" => ["Yes", "No"],
            "is_claim" => [1i64, 0],
        }
        .unwrap();
        let before = table.clone();

        FeatureTransformer::new(Arc::new(roles)).process(&table).unwrap();
        assert!(table.equals_missing(&before));
    }
}
