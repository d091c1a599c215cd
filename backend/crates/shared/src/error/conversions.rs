//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from standard library errors to
//! [`InfrastructureError`].

use super::infrastructure_error::InfrastructureError;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::new("I/O operation failed").with_source(err)
    }
}

impl From<std::env::VarError> for InfrastructureError {
    fn from(err: std::env::VarError) -> Self {
        let message = match err {
            std::env::VarError::NotPresent => "Environment variable not present",
            std::env::VarError::NotUnicode(_) => "Environment variable is not valid unicode",
        };
        InfrastructureError::new(message).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::ffi::OsString;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InfrastructureError = io_err.into();
        assert_eq!(err.message(), "I/O operation failed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_var_error_conversion() {
        let err: InfrastructureError = std::env::VarError::NotPresent.into();
        assert_eq!(err.message(), "Environment variable not present");

        let err: InfrastructureError =
            std::env::VarError::NotUnicode(OsString::from("x")).into();
        assert_eq!(err.message(), "Environment variable is not valid unicode");
    }
}
