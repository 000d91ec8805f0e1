//! Feature transformation for claim prediction.
//!
//! Turns a raw policy table into a feature matrix `X` and label vector `y`
//! according to a [`ColumnRoles`](claim_model::ColumnRoles) schema.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use claim_model::ColumnRoles;
//! use claim_transform::FeatureTransformer;
//!
//! let transformer = FeatureTransformer::new(Arc::new(ColumnRoles::default()));
//! let features = transformer.process(&raw)?;
//! let (x, y) = features.into_parts();
//! ```
//!
//! # Degradation policy
//!
//! Only a missing or malformed label column is an error. Every other role
//! degrades quietly: absent columns are skipped, unparseable numbers become
//! null, unrecognised boolean text becomes `false` and unknown ordinal
//! categories get a null rank.

mod align;
mod encode;
mod error;
mod transformer;

pub use align::align_columns;
pub use encode::{indicator_name, ordinal_name};
pub use error::{Result, TransformError};
pub use transformer::FeatureTransformer;
