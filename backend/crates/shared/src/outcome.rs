//! Outcome - Explicit success-or-failure values
//!
//! [`Outcome`] is an opt-in convention for callers that prefer carrying
//! failures as values. Nothing else in the workspace returns it; value
//! objects report through plain `Result`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure raised when an [`Outcome`] is unwrapped the wrong way
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// `unwrap_err` called on `Ok`
    #[error("Cannot unwrap_err from Ok")]
    UnwrapErrOnOk,

    /// `Err` holding a value that is not itself an error
    #[error("{0}")]
    Failed(String),
}

/// Either a success (`Ok`) or a failure (`Err`)
///
/// Exactly one variant is ever live. Equality is structural: two `Ok`s are
/// equal when their payloads are, two `Err`s likewise, and an `Ok` never
/// equals an `Err`.
///
/// ## Examples
/// ```rust
/// use kernel::{DomainError, Outcome};
///
/// let ok: Outcome<&str, DomainError> = Outcome::Ok("value");
/// assert!(ok.is_ok());
/// assert_eq!(ok.unwrap(), Ok("value"));
///
/// let err: Outcome<&str, DomainError> = Outcome::Err(DomainError::new("problem"));
/// assert!(err.is_err());
/// assert!(!bool::from(&err));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// Success value
    Ok(T),
    /// Failure value
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// `true` for `Ok`
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// `true` for `Err`
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Return the success payload, or propagate the stored error unchanged
    ///
    /// The error comes back as the very value that was stored, so an
    /// error payload can be bubbled with `?`.
    #[inline]
    pub fn unwrap(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Return the success payload, or a generic [`OutcomeError::Failed`]
    /// carrying the rendered failure value
    ///
    /// Use this when `E` is a plain value (a string, a code) rather than an
    /// error type.
    pub fn unwrap_or_fail(self) -> Result<T, OutcomeError>
    where
        E: fmt::Display,
    {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(OutcomeError::Failed(error.to_string())),
        }
    }

    /// Return the failure payload; fails on `Ok`
    #[inline]
    pub fn unwrap_err(self) -> Result<E, OutcomeError> {
        match self {
            Outcome::Ok(_) => Err(OutcomeError::UnwrapErrOnOk),
            Outcome::Err(error) => Ok(error),
        }
    }

    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }
}

/// Truthiness: an outcome is `true` exactly when it is `Ok`
impl<T, E> From<&Outcome<T, E>> for bool {
    #[inline]
    fn from(outcome: &Outcome<T, E>) -> Self {
        outcome.is_ok()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.unwrap()
    }
}
