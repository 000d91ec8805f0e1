//! Column alignment against a fixed feature schema.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Reorders `features` to exactly the `expected` columns.
///
/// Columns missing from `features` are added as all-`false` indicators;
/// columns not in `expected` are dropped. Use this before scoring a batch
/// whose nominal categories differ from the training table.
pub fn align_columns(features: &DataFrame, expected: &[String]) -> Result<DataFrame> {
    let height = features.height();
    let mut added = 0usize;
    let columns: Vec<Column> = expected
        .iter()
        .map(|name| match features.column(name) {
            Ok(column) => column.clone(),
            Err(_) => {
                added += 1;
                Column::new(name.as_str().into(), vec![false; height])
            }
        })
        .collect();

    let dropped = features
        .get_column_names()
        .iter()
        .filter(|name| !expected.iter().any(|e| e == name.as_str()))
        .count();
    if added > 0 || dropped > 0 {
        debug!(added, dropped, "Aligned feature columns");
    }

    Ok(DataFrame::new_with_height(height, columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn fills_missing_indicators_with_false() {
        let batch = df! {
            "length" => [4000.0, 4100.0],
            "fuel_type_Petrol" => [true, false],
            "fuel_type_LPG" => [false, true],
        }
        .unwrap();
        let expected: Vec<String> = ["fuel_type_Diesel", "fuel_type_Petrol", "length"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();

        let aligned = align_columns(&batch, &expected).unwrap();
        assert_eq!(names(&aligned), expected);
        let diesel: Vec<Option<bool>> = aligned
            .column("fuel_type_Diesel")
            .unwrap()
            .bool()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(diesel, vec![Some(false), Some(false)]);
    }
}
