use kernel::DomainValueError;
use serde::{Deserialize, Serialize};

/// Minimal example value object for demonstration and testing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExampleValue(String);

impl ExampleValue {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainValueError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainValueError::new("name must be non-empty"));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Greeting that includes the configured name
    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.0)
    }
}

impl TryFrom<String> for ExampleValue {
    type Error = DomainValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExampleValue> for String {
    fn from(value: ExampleValue) -> Self {
        value.0
    }
}
