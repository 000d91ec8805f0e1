//! Per-role column encoders.
//!
//! Each encoder reads one raw column and returns its replacement(s). None of
//! them fail on malformed values; only label extraction is strict.

use std::collections::BTreeSet;

use claim_common::{any_to_f64, any_to_i64, any_to_string, is_numeric_dtype, parse_f64};
use claim_model::BooleanLabels;
use polars::prelude::*;

use crate::error::{Result, TransformError};

/// Name of the rank column written for an ordinal column.
pub fn ordinal_name(column: &str) -> String {
    format!("{column}_rank")
}

/// Name of the indicator column for one category of a nominal column.
pub fn indicator_name(column: &str, category: &str) -> String {
    format!("{column}_{category}")
}

/// Cell rendered as text, untrimmed. Nulls yield `None`.
fn cell_raw(column: &Column, idx: usize) -> Option<String> {
    match column.get(idx).unwrap_or(AnyValue::Null) {
        AnyValue::Null => None,
        value => Some(any_to_string(value)),
    }
}

/// Cell rendered as trimmed text. Nulls and blank strings yield `None`.
fn cell_text(column: &Column, idx: usize) -> Option<String> {
    let raw = cell_raw(column, idx)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Maps a two-valued text column to strict booleans.
///
/// Only the exact affirmative label becomes `true`. Anything else, the
/// negative label, nulls and unrecognised text alike, becomes `false`. An
/// already boolean column keeps its values with nulls set to `false`. Also
/// returns how many non-null values were neither label.
pub(crate) fn encode_boolean(column: &Column, labels: &BooleanLabels) -> (Column, usize) {
    if column.dtype() == &DataType::Boolean {
        let values: Vec<bool> = (0..column.len())
            .map(|idx| matches!(column.get(idx), Ok(AnyValue::Boolean(true))))
            .collect();
        return (Column::new(column.name().clone(), values), 0);
    }
    let mut unrecognised = 0;
    let values: Vec<bool> = (0..column.len())
        .map(|idx| {
            let raw = cell_raw(column, idx);
            if raw.as_deref().is_some_and(|value| !labels.is_recognised(value)) {
                unrecognised += 1;
            }
            labels.resolve(raw.as_deref())
        })
        .collect();
    (Column::new(column.name().clone(), values), unrecognised)
}

/// Coerces a column to `Float64`, returning the count of values that failed
/// to parse and were set to null.
pub(crate) fn encode_numeric(column: &Column) -> Result<(Column, usize)> {
    if is_numeric_dtype(column.dtype()) {
        return Ok((column.cast(&DataType::Float64)?, 0));
    }
    let mut unparsed = 0;
    let values: Vec<Option<f64>> = (0..column.len())
        .map(|idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if value.is_null() {
                return None;
            }
            let parsed = any_to_f64(value);
            if parsed.is_none() {
                unparsed += 1;
            }
            parsed
        })
        .collect();
    Ok((Column::new(column.name().clone(), values), unparsed))
}

/// Ranks each value by its position in `categories`.
///
/// Values are compared as trimmed text, so `3`, `3.0` and `"3"` all match the
/// category `"3"`. Values outside the list get a null rank; their count is
/// returned alongside the column.
pub(crate) fn encode_ordinal(column: &Column, categories: &[String]) -> (Column, usize) {
    let mut unknown = 0;
    let ranks: Vec<Option<f64>> = (0..column.len())
        .map(|idx| {
            let text = cell_text(column, idx)?;
            let rank = categories.iter().position(|c| c.trim() == text);
            if rank.is_none() {
                unknown += 1;
            }
            rank.map(|r| r as f64)
        })
        .collect();
    let name = ordinal_name(column.name().as_str());
    (Column::new(name.into(), ranks), unknown)
}

/// Expands a column into one boolean indicator per observed category except
/// the first.
///
/// Categories sort numerically when every observed value parses as a number
/// and lexicographically otherwise. Nulls and blanks get no indicator, so
/// their rows are `false` everywhere.
pub(crate) fn encode_nominal(column: &Column) -> Vec<Column> {
    let cells: Vec<Option<String>> = (0..column.len())
        .map(|idx| cell_text(column, idx))
        .collect();
    let categories = sorted_categories(cells.iter().flatten().map(String::as_str));
    let name = column.name().as_str();

    categories
        .iter()
        .skip(1)
        .map(|category| {
            let flags: Vec<bool> = cells
                .iter()
                .map(|cell| cell.as_deref() == Some(category.as_str()))
                .collect();
            Column::new(indicator_name(name, category).into(), flags)
        })
        .collect()
}

fn sorted_categories<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = values.collect();
    let mut keyed: Vec<(f64, &str)> = distinct
        .iter()
        .filter_map(|c| parse_f64(c).map(|key| (key, *c)))
        .collect();
    if keyed.len() == distinct.len() {
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        keyed.into_iter().map(|(_, c)| c.to_string()).collect()
    } else {
        distinct.into_iter().map(str::to_string).collect()
    }
}

/// Casts the label column to `Int64`, requiring every value to be 0 or 1.
pub(crate) fn extract_labels(column: &Column) -> Result<Series> {
    let mut labels = Vec::with_capacity(column.len());
    for row in 0..column.len() {
        let value = column.get(row)?;
        match any_to_i64(value.clone()) {
            Some(label @ (0 | 1)) => labels.push(label),
            _ => {
                let value = if value.is_null() {
                    "null".to_string()
                } else {
                    any_to_string(value)
                };
                return Err(TransformError::InvalidLabel { row, value });
            }
        }
    }
    Ok(Series::new(column.name().clone(), labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_column(name: &str, values: &[Option<&str>]) -> Column {
        Column::new(name.into(), values.to_vec())
    }

    fn bools(column: &Column) -> Vec<Option<bool>> {
        column.bool().unwrap().into_iter().collect()
    }

    #[test]
    fn boolean_defaults_to_false() {
        let raw = text_column(
            "is_esc",
            &[Some("Yes"), Some("No"), None, Some("yes"), Some(" Yes"), Some("maybe")],
        );
        let (encoded, unrecognised) = encode_boolean(&raw, &BooleanLabels::default());
        assert_eq!(encoded.dtype(), &DataType::Boolean);
        assert_eq!(
            bools(&encoded),
            vec![Some(true), Some(false), Some(false), Some(false), Some(false), Some(false)]
        );
        assert_eq!(unrecognised, 3);
    }

    #[test]
    fn boolean_keeps_native_booleans() {
        let raw = Column::new("is_esc".into(), [Some(true), None, Some(false)]);
        let (encoded, unrecognised) = encode_boolean(&raw, &BooleanLabels::default());
        assert_eq!(bools(&encoded), vec![Some(true), Some(false), Some(false)]);
        assert_eq!(unrecognised, 0);
    }

    #[test]
    fn numeric_text_is_coerced_with_nulls() {
        let raw = text_column("length", &[Some("4000"), Some(" 4200.5 "), Some("n/a"), None]);
        let (encoded, unparsed) = encode_numeric(&raw).unwrap();
        let values: Vec<Option<f64>> = encoded.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(4000.0), Some(4200.5), None, None]);
        assert_eq!(unparsed, 1);
    }

    #[test]
    fn numeric_integers_are_cast() {
        let raw = Column::new("airbags".into(), [2i64, 6]);
        let (encoded, unparsed) = encode_numeric(&raw).unwrap();
        assert_eq!(encoded.dtype(), &DataType::Float64);
        assert_eq!(unparsed, 0);
    }

    #[test]
    fn ordinal_ranks_follow_declared_order() {
        let categories: Vec<String> = ["0", "1", "2", "3", "4", "5"]
            .iter()
            .map(|c| (*c).to_string())
            .collect();
        let raw = Column::new("ncap_rating".into(), [Some(3i64), Some(5), Some(9), None]);
        let (encoded, unknown) = encode_ordinal(&raw, &categories);
        assert_eq!(encoded.name().as_str(), "ncap_rating_rank");
        let ranks: Vec<Option<f64>> = encoded.f64().unwrap().into_iter().collect();
        assert_eq!(ranks, vec![Some(3.0), Some(5.0), None, None]);
        assert_eq!(unknown, 1);
    }

    #[test]
    fn nominal_drops_first_category() {
        let raw = text_column(
            "transmission_type",
            &[Some("Manual"), Some("Automatic"), None, Some("Manual")],
        );
        let encoded = encode_nominal(&raw);
        assert_eq!(encoded.len(), 1);
        assert_eq!(encoded[0].name().as_str(), "transmission_type_Manual");
        assert_eq!(
            bools(&encoded[0]),
            vec![Some(true), Some(false), Some(false), Some(true)]
        );
    }

    #[test]
    fn nominal_sorts_numeric_categories_by_value() {
        let raw = Column::new("cylinder".into(), [10i64, 9, 3, 4]);
        let names: Vec<String> = encode_nominal(&raw)
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["cylinder_4", "cylinder_9", "cylinder_10"]);
    }

    #[test]
    fn nominal_single_category_yields_nothing() {
        let raw = text_column("fuel_type", &[Some("CNG"), Some("CNG")]);
        assert!(encode_nominal(&raw).is_empty());
    }

    #[test]
    fn labels_accept_binary_values() {
        let raw = text_column("is_claim", &[Some("1"), Some("0"), Some("1.0")]);
        let labels = extract_labels(&raw).unwrap();
        let values: Vec<Option<i64>> = labels.i64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn labels_reject_other_values() {
        let raw = Column::new("is_claim".into(), [Some(1i64), Some(2)]);
        assert!(matches!(
            extract_labels(&raw),
            Err(TransformError::InvalidLabel { row: 1, .. })
        ));

        let raw = Column::new("is_claim".into(), [None, Some(0i64)]);
        match extract_labels(&raw) {
            Err(TransformError::InvalidLabel { row, value }) => {
                assert_eq!(row, 0);
                assert_eq!(value, "null");
            }
            other => panic!("expected invalid label, got {other:?}"),
        }
    }
}
