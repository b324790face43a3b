//! Shared types used across aggregates

pub mod datetime;
pub mod validation;

pub use validation::{FieldError, FieldKind, FieldSpec, ValidationError};
