//! Exchange Entity
//!
//! A trading venue identified by a short id (`"NYSE"`, `"XNAS"`).

use kernel::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// Trading venue
///
/// Every field must contain something other than whitespace. Values are
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Exchange {
    id: String,
    name: String,
    timezone: String,
}

/// Unvalidated exchange fields, as read from the wire
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExchangeRecord {
    id: String,
    name: String,
    timezone: String,
}

impl Exchange {
    /// Create a new exchange with validation
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::new("Exchange id must be non-empty"));
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::new("Exchange name must be non-empty"));
        }

        let timezone = timezone.into();
        if timezone.trim().is_empty() {
            return Err(DomainError::new("Exchange timezone must be non-empty"));
        }

        Ok(Self { id, name, timezone })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// IANA timezone name, e.g. `America/New_York`
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub(crate) fn from_record(record: ExchangeRecord) -> Result<Self, DomainError> {
        Exchange::new(record.id, record.name, record.timezone)
    }
}

impl<'de> Deserialize<'de> for Exchange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = ExchangeRecord::deserialize(deserializer)?;
        Exchange::from_record(record).map_err(serde::de::Error::custom)
    }
}
