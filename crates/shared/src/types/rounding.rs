//! Rounding policy for per-person amounts.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Policy for converting the raw per-person share into a two-decimal amount.
///
/// The mode only changes how individual shares are rounded before
/// reconciliation; the grand total is never affected by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero at cent granularity.
    #[default]
    Nearest,
    /// Always round toward positive infinity (ceiling at cent granularity).
    Up,
    /// Always round toward negative infinity (floor at cent granularity).
    Down,
}

impl RoundingMode {
    /// The `rust_decimal` strategy implementing this mode.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Nearest => RoundingStrategy::MidpointAwayFromZero,
            Self::Up => RoundingStrategy::ToPositiveInfinity,
            Self::Down => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(format!("Unknown rounding mode: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rounding_mode_display_round_trips() {
        for mode in [RoundingMode::Nearest, RoundingMode::Up, RoundingMode::Down] {
            assert_eq!(RoundingMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_rounding_mode_from_str_rejects_unknown() {
        assert!(RoundingMode::from_str("bankers").is_err());
        assert!(RoundingMode::from_str("").is_err());
    }

    #[test]
    fn test_rounding_mode_default_is_nearest() {
        assert_eq!(RoundingMode::default(), RoundingMode::Nearest);
    }
}
