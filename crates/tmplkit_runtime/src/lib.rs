//! Record sessions and the command-line tool for tmplkit.
//!
//! This crate provides:
//! - [`read_records`] - JSON arrays and JSON-lines streams as [`Value`] records
//! - [`Session`] - a registry and evaluation options applied to many records
//! - The `tmplkit` binary (`filter` and `eval` subcommands)
//!
//! [`Value`]: tmplkit_foundation::Value

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod records;
pub mod session;

pub use records::read_records;
pub use session::Session;

/// Log target for session diagnostics.
const LOG_TARGET: &str = "tmplkit::runtime";
