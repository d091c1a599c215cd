//! Market Domain Module
//!
//! Immutable, self-validating value objects shared across services:
//! - `Money` / `Currency` - exact decimal amounts in a fixed set of currencies
//! - `Exchange` - a trading venue (id, name, timezone)
//! - `Asset` / `AssetType` - a listed instrument on an exchange
//! - `ExampleValue` - minimal illustrative value object
//!
//! ## Validation Model
//! - Every invariant is checked once, at construction
//! - The first violated invariant is reported; nothing is accumulated
//! - A failed construction never hands out a partially built value
//! - `Exchange` and `Asset` fail with [`kernel::DomainError`];
//!   `Money`, `Currency` and `ExampleValue` fail with [`kernel::DomainValueError`]

pub mod domain;

// Re-exports for convenience
pub use domain::entity::{
    asset::{Asset, AssetBuilder},
    exchange::Exchange,
};
pub use domain::value_object::{
    asset_type::AssetType, currency::Currency, example_value::ExampleValue, money::Money,
};

// Re-export kernel error types for unified error handling
pub use kernel::{CommonError, DomainError, DomainValueError};

#[cfg(test)]
mod tests;
