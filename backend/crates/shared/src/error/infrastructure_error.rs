//! Infrastructure Error - Environment and runtime failures
//!
//! Defines [`InfrastructureError`], used by configuration and logging
//! helpers.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Environment/runtime failure
///
/// ## Fields
/// * `message` - user-facing message, this is the whole `Display`
/// * `source` - underlying error (optional, for debugging)
///
/// ## Examples
/// ```rust
/// use kernel::InfrastructureError;
///
/// let err = InfrastructureError::missing_env_var("DATABASE_URL");
/// assert_eq!(
///     err.to_string(),
///     "Missing required environment variable: DATABASE_URL"
/// );
/// ```
pub struct InfrastructureError {
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl InfrastructureError {
    /// Create a new infrastructure error
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Required environment variable is not set
    #[inline]
    pub fn missing_env_var(name: &str) -> Self {
        Self::new(format!("Missing required environment variable: {name}"))
    }

    /// Attach the underlying error
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::InfrastructureError;
    /// use std::error::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, ".env not found");
    /// let err = InfrastructureError::new("Failed to load .env").with_source(io);
    /// assert!(err.source().is_some());
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the message
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for InfrastructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("InfrastructureError");
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for InfrastructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for InfrastructureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
