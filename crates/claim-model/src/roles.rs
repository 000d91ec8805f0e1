//! Column role schema.
//!
//! A [`ColumnRoles`] value declares, per dataset, how each raw column is
//! treated by the feature transformer. It is pure data: constructed once at
//! startup (usually from [`crate::AppConfig`]) and then shared read-only.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Transformation role of a raw column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Row key, never a feature.
    Identifier,
    /// Two-valued text label turned into a strict boolean.
    Boolean,
    /// Coerced to floating point.
    Numeric,
    /// Ranked by an explicit category order.
    Ordinal,
    /// Expanded into indicator columns.
    Nominal,
}

impl ColumnRole {
    /// Lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Boolean => "boolean",
            Self::Numeric => "numeric",
            Self::Ordinal => "ordinal",
            Self::Nominal => "nominal",
        }
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The affirmative/negative text pair recognised in boolean columns.
///
/// Only `true_label` maps to `true`. Every other value, `false_label`
/// included, maps to `false`; unrecognised text and nulls therefore
/// resolve to the negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanLabels {
    pub true_label: String,
    pub false_label: String,
}

impl Default for BooleanLabels {
    fn default() -> Self {
        Self {
            true_label: "Yes".to_string(),
            false_label: "No".to_string(),
        }
    }
}

impl BooleanLabels {
    /// Resolves a raw text value under the default-to-false policy.
    pub fn resolve(&self, raw: Option<&str>) -> bool {
        raw.is_some_and(|value| value == self.true_label)
    }

    /// Whether a value is exactly one of the two labels. Anything else still
    /// resolves to `false` but is worth reporting.
    pub fn is_recognised(&self, raw: &str) -> bool {
        raw == self.true_label || raw == self.false_label
    }
}

/// Per-dataset declaration of column roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnRoles {
    /// Binary outcome column; required in every processed table.
    pub label_column: String,
    /// Columns discarded before any other step.
    pub identifier_columns: Vec<String>,
    /// Columns mapped to strict booleans.
    pub boolean_columns: Vec<String>,
    /// Columns coerced to `Float64`.
    pub numeric_columns: Vec<String>,
    /// Columns expanded to `<column>_<category>` indicators.
    pub nominal_columns: Vec<String>,
    /// Text pair recognised in boolean columns.
    pub boolean_labels: BooleanLabels,
    /// Column name to categories in rank order (rank 0 first).
    pub ordinal_columns: BTreeMap<String, Vec<String>>,
}

impl Default for ColumnRoles {
    fn default() -> Self {
        Self {
            identifier_columns: strings(&["policy_id"]),
            boolean_columns: strings(&[
                "is_parking_camera",
                "is_tpms",
                "is_adjustable_steering",
                "is_esc",
                "is_parking_sensors",
                "is_front_fog_lights",
                "is_rear_window_wiper",
                "is_rear_window_washer",
                "is_rear_window_defogger",
                "is_brake_assist",
                "is_power_door_locks",
                "is_power_steering",
                "is_central_locking",
                "is_driver_seat_height_adjustable",
                "is_day_night_rear_view_mirror",
                "is_ecw",
                "is_speed_alert",
            ]),
            boolean_labels: BooleanLabels::default(),
            numeric_columns: strings(&[
                "length",
                "width",
                "height",
                "gross_weight",
                "airbags",
                "population_density",
            ]),
            ordinal_columns: BTreeMap::from([(
                "ncap_rating".to_string(),
                strings(&["0", "1", "2", "3", "4", "5"]),
            )]),
            nominal_columns: strings(&[
                "transmission_type",
                "cylinder",
                "gear_box",
                "rear_brakes_type",
                "steering_type",
                "fuel_type",
                "make",
                "segment",
                "model",
                "engine_type",
                "max_torque",
                "max_power",
                "area_cluster",
                "displacement",
            ]),
            label_column: "is_claim".to_string(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl ColumnRoles {
    /// An empty schema with only the label column set.
    pub fn new(label_column: impl Into<String>) -> Self {
        Self {
            identifier_columns: Vec::new(),
            boolean_columns: Vec::new(),
            boolean_labels: BooleanLabels::default(),
            numeric_columns: Vec::new(),
            ordinal_columns: BTreeMap::new(),
            nominal_columns: Vec::new(),
            label_column: label_column.into(),
        }
    }

    #[must_use]
    pub fn with_identifiers<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_booleans<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boolean_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_boolean_labels(mut self, true_label: &str, false_label: &str) -> Self {
        self.boolean_labels = BooleanLabels {
            true_label: true_label.to_string(),
            false_label: false_label.to_string(),
        };
        self
    }

    #[must_use]
    pub fn with_numerics<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_ordinal<I, S>(mut self, column: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ordinal_columns
            .insert(column.into(), categories.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_nominals<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nominal_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Every declared column with its role, in role order.
    pub fn declared(&self) -> Vec<(&str, ColumnRole)> {
        let mut declared = Vec::new();
        declared.extend(
            self.identifier_columns
                .iter()
                .map(|c| (c.as_str(), ColumnRole::Identifier)),
        );
        declared.extend(
            self.boolean_columns
                .iter()
                .map(|c| (c.as_str(), ColumnRole::Boolean)),
        );
        declared.extend(
            self.numeric_columns
                .iter()
                .map(|c| (c.as_str(), ColumnRole::Numeric)),
        );
        declared.extend(
            self.ordinal_columns
                .keys()
                .map(|c| (c.as_str(), ColumnRole::Ordinal)),
        );
        declared.extend(
            self.nominal_columns
                .iter()
                .map(|c| (c.as_str(), ColumnRole::Nominal)),
        );
        declared
    }

    /// Role declared for a column, if any.
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        self.declared()
            .into_iter()
            .find(|(name, _)| *name == column)
            .map(|(_, role)| role)
    }

    /// Checks the schema invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::OverlappingRoles`] when a column has two roles
    /// - [`ConfigError::LabelInRole`] when the label column has a feature role
    /// - [`ConfigError::InvalidOrdinal`] for empty or duplicated category lists
    pub fn validate(&self) -> Result<()> {
        if self.label_column.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "label_column",
                reason: "must not be empty".to_string(),
            });
        }

        let mut seen: BTreeMap<&str, ColumnRole> = BTreeMap::new();
        for (column, role) in self.declared() {
            if column == self.label_column {
                return Err(ConfigError::LabelInRole {
                    column: column.to_string(),
                    role: role.as_str(),
                });
            }
            if let Some(first) = seen.insert(column, role) {
                return Err(ConfigError::OverlappingRoles {
                    column: column.to_string(),
                    first: first.as_str(),
                    second: role.as_str(),
                });
            }
        }

        for (column, categories) in &self.ordinal_columns {
            if categories.is_empty() {
                return Err(ConfigError::InvalidOrdinal {
                    column: column.clone(),
                    reason: "no categories declared".to_string(),
                });
            }
            let mut unique = BTreeSet::new();
            for category in categories {
                if !unique.insert(category.as_str()) {
                    return Err(ConfigError::InvalidOrdinal {
                        column: column.clone(),
                        reason: format!("category '{category}' is listed twice"),
                    });
                }
            }
        }
        Ok(())
    }
}
