//! Asset Type Value Object
//!
//! Instrument classification. Textual input is matched case-insensitively
//! against the lowercase codes.

use kernel::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AssetType {
    Stock,
    Etf,
    Bond,
    Crypto,
}

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::Stock,
        AssetType::Etf,
        AssetType::Bond,
        AssetType::Crypto,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use AssetType::*;
        match self {
            Stock => "stock",
            Etf => "etf",
            Bond => "bond",
            Crypto => "crypto",
        }
    }

    /// Create from a code, ignoring case
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|asset_type| asset_type.code().eq_ignore_ascii_case(code))
    }
}

impl FromStr for AssetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DomainError::new("Invalid asset type"))
    }
}

impl TryFrom<String> for AssetType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Coerce loosely typed input: strings are parsed, anything else is rejected
impl TryFrom<&serde_json::Value> for AssetType {
    type Error = DomainError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(code) => code.parse(),
            _ => Err(DomainError::new(
                "Asset type must be an AssetType or valid string",
            )),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
