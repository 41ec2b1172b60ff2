//! Numeric normalization for tmplkit.
//!
//! Values arrive with many numeric representations: native integers and
//! floats of two widths each, and JSON numbers that are still decimal text.
//! This crate provides:
//! - [`Kind`] and [`classify`] - what representation a value carries
//! - [`Number`] - a resolved number tagged with its width, or `NaN`
//! - [`normalize`] - promotion of two values to a common kind
//! - Arithmetic ([`add`], [`subtract`], [`multiply`], [`divide`], [`modulo`])
//!   and comparisons ([`is_less`], [`is_greater`], [`is_equal`])
//! - [`coerce`] and the `to_*` helpers for one-way conversion
//!
//! Nothing here returns an error. Text that does not parse becomes integer
//! zero, and operations without a defined result (division by zero, modulo
//! on floats) produce [`Number::NaN`], which every later operation
//! propagates and every comparison rejects.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod kind;
mod number;
mod ops;

pub use kind::{Kind, classify};
pub use number::{Number, coerce, normalize, to_f32, to_f64, to_i32, to_i64};
pub use ops::{
    add, compare, divide, is_equal, is_greater, is_greater_or_equal, is_less, is_less_or_equal,
    modulo, multiply, subtract,
};

/// Log target for numeric diagnostics.
const LOG_TARGET: &str = "tmplkit::numeric";
