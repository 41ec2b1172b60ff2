//! tmplkit - Template helper functions and a record filter language
//!
//! This crate re-exports all layers of the tmplkit system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tmplkit_runtime    - Record sessions, JSON input, CLI
//! Layer 2: tmplkit_stdlib     - Helper families: math, logic, time, page,
//!                               text, iterables, path
//!          tmplkit_language   - Lexer, parser, registry, expressions, filters
//! Layer 1: tmplkit_numeric    - Mixed-representation number normalization
//! Layer 0: tmplkit_foundation - Core types (Value, Type, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use tmplkit::foundation::Value;
//! use tmplkit::language::Filter;
//!
//! let registry = tmplkit::stdlib::all();
//! let filter = Filter::compile("(gt (int .cnt2014) 2)", &registry).unwrap();
//! let record = Value::record([("cnt2014", Value::json_number("3"))]);
//! assert!(filter.apply(&record).unwrap());
//! ```

pub use tmplkit_foundation as foundation;
pub use tmplkit_language as language;
pub use tmplkit_numeric as numeric;
pub use tmplkit_runtime as runtime;
pub use tmplkit_stdlib as stdlib;
