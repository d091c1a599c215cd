//! Asset Entity
//!
//! A listed instrument on an [`Exchange`].
//!
//! ## Construction
//! - [`Asset::new`] for fully typed input
//! - [`AssetBuilder`] when the asset type arrives as text (`"etf"`, `"ETF"`)
//! - `TryFrom<serde_json::Value>` / `Deserialize` for loosely typed input
//!
//! All three go through [`AssetBuilder::build`], which checks the fields in
//! order (symbol, name, exchange, asset type), coerces the asset type, and
//! only then creates the record.

use kernel::{DomainError, OptionExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::exchange::{Exchange, ExchangeRecord};
use crate::domain::value_object::asset_type::AssetType;

const EXCHANGE_REQUIRED: &str = "Asset exchange must be an Exchange instance";
const ASSET_TYPE_REQUIRED: &str = "Asset type must be an AssetType or valid string";

/// Listed instrument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Asset {
    symbol: String,
    name: String,
    exchange: Exchange,
    asset_type: AssetType,
}

impl Asset {
    /// Create a new asset with validation
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        exchange: Exchange,
        asset_type: AssetType,
    ) -> Result<Self, DomainError> {
        Self::builder()
            .symbol(symbol)
            .name(name)
            .exchange(exchange)
            .asset_type(asset_type)
            .build()
    }

    pub fn builder() -> AssetBuilder {
        AssetBuilder::default()
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }
}

#[derive(Debug, Clone)]
enum ExchangeInput {
    Typed(Exchange),
    Raw(Value),
}

#[derive(Debug, Clone)]
enum AssetTypeInput {
    Typed(AssetType),
    Raw(Value),
}

/// Collects asset fields; nothing is validated until [`AssetBuilder::build`]
///
/// ## Examples
/// ```rust
/// use market::{Asset, AssetType, Exchange};
///
/// let nasdaq = Exchange::new("NASDAQ", "Nasdaq", "America/New_York").unwrap();
/// let qqq = Asset::builder()
///     .symbol("QQQ")
///     .name("Invesco QQQ")
///     .exchange(nasdaq)
///     .asset_type_code("etf")
///     .build()
///     .unwrap();
///
/// assert_eq!(qqq.asset_type(), AssetType::Etf);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetBuilder {
    symbol: Option<String>,
    name: Option<String>,
    exchange: Option<ExchangeInput>,
    asset_type: Option<AssetTypeInput>,
}

impl AssetBuilder {
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn exchange(mut self, exchange: Exchange) -> Self {
        self.exchange = Some(ExchangeInput::Typed(exchange));
        self
    }

    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = Some(AssetTypeInput::Typed(asset_type));
        self
    }

    /// Asset type as text, matched case-insensitively at build time
    pub fn asset_type_code(mut self, code: impl Into<String>) -> Self {
        self.asset_type = Some(AssetTypeInput::Raw(Value::String(code.into())));
        self
    }

    /// Validate every field in order and create the asset
    pub fn build(self) -> Result<Asset, DomainError> {
        let symbol = self.symbol.unwrap_or_default();
        if symbol.trim().is_empty() {
            return Err(DomainError::new("Asset symbol must be non-empty"));
        }

        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(DomainError::new("Asset name must be non-empty"));
        }

        let exchange = match self.exchange.ok_or_domain_err(EXCHANGE_REQUIRED)? {
            ExchangeInput::Typed(exchange) => exchange,
            ExchangeInput::Raw(value) => exchange_from_value(value)?,
        };

        let asset_type = match self.asset_type.ok_or_domain_err(ASSET_TYPE_REQUIRED)? {
            AssetTypeInput::Typed(asset_type) => asset_type,
            AssetTypeInput::Raw(value) => AssetType::try_from(&value)?,
        };

        Ok(Asset {
            symbol,
            name,
            exchange,
            asset_type,
        })
    }
}

fn exchange_from_value(value: Value) -> Result<Exchange, DomainError> {
    if !value.is_object() {
        return Err(DomainError::new(EXCHANGE_REQUIRED));
    }
    let record: ExchangeRecord =
        serde_json::from_value(value).map_err(|_| DomainError::new(EXCHANGE_REQUIRED))?;
    Exchange::from_record(record)
}

/// Build from loosely typed JSON
///
/// Non-string `symbol`/`name` count as empty, a non-object `exchange` is
/// rejected, and a non-string `asset_type` (e.g. `123`) is rejected.
impl TryFrom<Value> for Asset {
    type Error = DomainError;

    fn try_from(mut value: Value) -> Result<Self, Self::Error> {
        let mut builder = Asset::builder();

        if let Some(symbol) = value.get("symbol").and_then(Value::as_str) {
            builder = builder.symbol(symbol);
        }
        if let Some(name) = value.get("name").and_then(Value::as_str) {
            builder = builder.name(name);
        }
        if let Some(exchange) = value.get_mut("exchange").map(Value::take) {
            builder.exchange = Some(ExchangeInput::Raw(exchange));
        }
        if let Some(asset_type) = value.get_mut("asset_type").map(Value::take) {
            builder.asset_type = Some(AssetTypeInput::Raw(asset_type));
        }

        builder.build()
    }
}
