//! Bill splitting and rounding-remainder reconciliation.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::SplitEngine;
pub use error::SplitError;
pub use types::{BillInput, BillSplit, RoundingMode};
