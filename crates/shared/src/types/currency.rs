//! Supported currencies and the static symbol table.
//!
//! The symbol table is read-only process-wide configuration; there is no
//! mutable global currency state anywhere in the system.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    #[default]
    Inr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Self; 4] = [Self::Inr, Self::Usd, Self::Eur, Self::Gbp];

    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "\u{20b9}",
            Self::Usd => "$",
            Self::Eur => "\u{20ac}",
            Self::Gbp => "\u{a3}",
        }
    }

    /// The full currency name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inr => "Indian Rupee",
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "Pound Sterling",
        }
    }

    /// Number of decimal places in the minor unit.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Inr | Self::Usd | Self::Eur | Self::Gbp => 2,
        }
    }

    /// Looks up a currency by its display symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '\u{20b9}' => Some(Self::Inr),
            '$' => Some(Self::Usd),
            '\u{20ac}' => Some(Self::Eur),
            '\u{a3}' => Some(Self::Gbp),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inr => write!(f, "INR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
