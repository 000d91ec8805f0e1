//! Dense row-major views of numeric feature frames.

use polars::prelude::*;

/// Copies every column of `df` into a row-major `f64` matrix.
///
/// Booleans become `0.0` / `1.0`. Nulls are kept as `None` so callers can
/// decide how to treat them.
///
/// # Errors
///
/// Returns a schema error when a column cannot be cast to `Float64`.
pub fn to_row_major(df: &DataFrame) -> PolarsResult<Vec<Vec<Option<f64>>>> {
    let mut rows = vec![Vec::with_capacity(df.width()); df.height()];
    for column in df.get_columns() {
        let values = column.cast(&DataType::Float64)?;
        for (row, value) in rows.iter_mut().zip(values.f64()?.into_iter()) {
            row.push(value);
        }
    }
    Ok(rows)
}

/// Builds a frame from row-major values, casting each column back to the
/// dtype of the matching column in `template`.
///
/// Integer and boolean targets are rounded first, so interpolated values land
/// on the nearest representable value. A template without columns yields a
/// columnless frame of `rows.len()` rows.
pub fn from_row_major(template: &DataFrame, rows: &[Vec<f64>]) -> PolarsResult<DataFrame> {
    let mut columns = Vec::with_capacity(template.width());
    for (idx, column) in template.get_columns().iter().enumerate() {
        let dtype = column.dtype();
        let rounds = !matches!(dtype, DataType::Float32 | DataType::Float64);
        let values: Vec<f64> = rows
            .iter()
            .map(|row| if rounds { row[idx].round() } else { row[idx] })
            .collect();
        let built = Column::new(column.name().clone(), values);
        let built = match dtype {
            DataType::Boolean => built.cast(&DataType::Int64)?.cast(&DataType::Boolean)?,
            DataType::Float64 => built,
            other => built.cast(other)?,
        };
        columns.push(built);
    }
    DataFrame::new_with_height(rows.len(), columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_keeps_nulls_and_booleans() {
        let df = df! {
            "length" => [Some(4000.0), None],
            "is_esc" => [true, false],
        }
        .unwrap();
        let rows = to_row_major(&df).unwrap();
        assert_eq!(rows, vec![vec![Some(4000.0), Some(1.0)], vec![None, Some(0.0)]]);
    }

    #[test]
    fn rebuild_without_columns_keeps_height() {
        let template = DataFrame::empty_with_height(2);
        let rebuilt = from_row_major(&template, &[Vec::new(), Vec::new(), Vec::new()]).unwrap();
        assert_eq!(rebuilt.shape(), (3, 0));
    }

    #[test]
    fn rebuild_restores_template_dtypes() {
        let template = df! {
            "airbags" => [2i64],
            "is_esc" => [true],
            "length" => [4000.0],
        }
        .unwrap();
        let rebuilt =
            from_row_major(&template, &[vec![5.6, 0.8, 4100.5], vec![1.2, 0.1, 3900.0]]).unwrap();

        assert_eq!(rebuilt.column("airbags").unwrap().dtype(), &DataType::Int64);
        let airbags = rebuilt.column("airbags").unwrap().i64().unwrap();
        assert_eq!(airbags.get(0), Some(6));
        assert_eq!(airbags.get(1), Some(1));

        let esc = rebuilt.column("is_esc").unwrap().bool().unwrap();
        assert_eq!(esc.get(0), Some(true));
        assert_eq!(esc.get(1), Some(false));

        let length = rebuilt.column("length").unwrap().f64().unwrap();
        assert_eq!(length.get(0), Some(4100.5));
    }
}
