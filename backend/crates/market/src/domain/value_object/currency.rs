//! Currency Value Object
//!
//! The closed set of currencies a [`Money`](super::money::Money) can be
//! denominated in.

use kernel::DomainValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Ils,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Ils, Currency::Gbp];

    /// ISO 4217 code
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Currency::*;
        match self {
            Usd => "USD",
            Eur => "EUR",
            Ils => "ILS",
            Gbp => "GBP",
        }
    }

    /// Create from an exact ISO code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Currency::*;
        match code {
            "USD" => Some(Usd),
            "EUR" => Some(Eur),
            "ILS" => Some(Ils),
            "GBP" => Some(Gbp),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = DomainValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| DomainValueError::new("currency must be an instance of Currency"))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
