//! Feature scaling for prepared claim data.
//!
//! Scalers are looked up by name in a [`ScalerRegistry`]. Four are built in:
//!
//! | Name       | Effect                                      |
//! |------------|---------------------------------------------|
//! | `none`     | identity                                    |
//! | `standard` | zero mean, unit population variance         |
//! | `minmax`   | linear rescale to `[0, 1]`                  |
//! | `robust`   | centre on the median, divide by the IQR     |
//!
//! The free functions ([`create_scaler`], [`register_scaler`], ...) work on a
//! process-wide registry that is meant to be extended once at startup.
//!
//! # Example
//!
//! ```ignore
//! use claim_scaling::create_scaler;
//!
//! let mut scaler = create_scaler("Robust")?;
//! let train = scaler.fit_transform(&x_train)?;
//! let test = scaler.transform(&x_test)?;
//! ```

mod affine;
mod error;
mod identity;
mod registry;
mod scaler;

pub use affine::{AffineScaler, ScaleKind};
pub use error::{Result, ScalingError};
pub use identity::IdentityScaler;
pub use registry::{
    ScalerConstructor, ScalerRegistry, UNKNOWN_SCALER_DESCRIPTION, create_scaler,
    get_description, list_available_scalers, register_scaler,
};
pub use scaler::Scaler;
