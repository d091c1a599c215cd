//! Domain Layer
//!
//! Contains entities and value objects.

pub mod entity;
pub mod value_object;
