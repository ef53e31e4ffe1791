//! Middleware and request extractors.

pub mod error;
pub mod validation;
