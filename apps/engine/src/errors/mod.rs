//! Error handling for the Dudo engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
