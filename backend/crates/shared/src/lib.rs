//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the common vocabulary:
//! - The error taxonomy ([`error::common_error::CommonError`] and its children)
//! - The value-object error family ([`error::value_error::DomainValueError`])
//! - A generic success-or-failure container ([`outcome::Outcome`])
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod common_error;
    pub mod conversions;
    pub mod domain_error;
    pub mod infrastructure_error;
    pub mod kind;
    pub mod value_error;
}
pub mod outcome;

pub use error::common_error::{CommonError, CommonResult, OptionExt, ResultExt};
pub use error::domain_error::DomainError;
pub use error::infrastructure_error::InfrastructureError;
pub use error::kind::ErrorKind;
pub use error::value_error::DomainValueError;
pub use outcome::{Outcome, OutcomeError};
