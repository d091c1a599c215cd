//! Entity Module

pub mod asset;
pub mod exchange;
