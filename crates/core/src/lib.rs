//! `worklog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the timekeeping and
//! invoicing modules (no IO, no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
