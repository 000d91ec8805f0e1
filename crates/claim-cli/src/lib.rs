//! Library side of the `claimprep` binary.
//!
//! Exposes logging setup and the `prepare` pipeline so both can be driven
//! from integration tests.

pub mod logging;
pub mod pipeline;
