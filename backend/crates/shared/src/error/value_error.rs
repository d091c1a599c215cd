//! Value Error - Value object input violations
//!
//! [`DomainValueError`] is its own family: it does not convert into
//! [`CommonError`](super::common_error::CommonError). Money, currency and
//! example values report through it; exchanges and assets use
//! [`DomainError`](super::domain_error::DomainError).

use std::borrow::Cow;

use thiserror::Error;

/// Raised when value object inputs violate invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainValueError {
    message: Cow<'static, str>,
}

impl DomainValueError {
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DomainValueError::new("name must be non-empty");
        assert_eq!(err.to_string(), "name must be non-empty");
        assert_eq!(err.message(), "name must be non-empty");
    }
}
