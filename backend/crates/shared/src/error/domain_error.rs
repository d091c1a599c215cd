//! Domain Error - Business invariant violations
//!
//! Defines [`DomainError`], raised by entities such as exchanges and assets
//! when a constructor invariant does not hold.

use std::borrow::Cow;

use thiserror::Error;

/// Business-rule violation
///
/// Carries nothing but a message. Converts into
/// [`CommonError`](super::common_error::CommonError) with `?`.
///
/// ## Examples
/// ```rust
/// use kernel::DomainError;
///
/// let err = DomainError::new("Exchange id must be non-empty");
/// assert_eq!(err.to_string(), "Exchange id must be non-empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainError {
    message: Cow<'static, str>,
}

impl DomainError {
    /// Create a new domain error
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
