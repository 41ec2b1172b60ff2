//! Core types, values, and persistent collections for tmplkit.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value every expression evaluates to
//! - [`Type`] and [`Arity`] - Type and arity descriptors for diagnostics
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`LtVec`], [`LtMap`])
//! - Conversion between decoded JSON documents and [`Value`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod json;
pub mod types;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::{Arity, Type};
pub use value::Value;

/// Result type alias using tmplkit's Error type.
pub type Result<T> = std::result::Result<T, Error>;
