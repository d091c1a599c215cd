//! Value Object Module

pub mod asset_type;
pub mod currency;
pub mod example_value;
pub mod money;
