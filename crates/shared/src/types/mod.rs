//! Common types used across the application.

pub mod currency;
pub mod money;
pub mod rounding;

pub use currency::Currency;
pub use money::Money;
pub use rounding::RoundingMode;
