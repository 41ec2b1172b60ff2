//! Expression language for tmplkit.
//!
//! This crate provides:
//! - Lexer: text → tokens
//! - Parser: tokens → AST (`pipeline := command ('|' command)*`)
//! - [`FunctionRegistry`]: named native functions, combined per family
//! - [`Expression`]: an AST bound to a registry, evaluated against a record
//! - [`Filter`]: an expression used as a yes/no condition over records
//!
//! ```text
//! (gt (int .cnt2014) 2)      call with a nested call and a field
//! .title | slug              pipeline; .title becomes slug's last argument
//! and .one (eq .three false) bare call at top level
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod config;
pub mod context;
pub mod eval;
pub mod filter;
pub mod lexer;
pub mod parser;
pub mod registry;
pub mod span;
pub mod token;

pub use ast::Ast;
pub use config::{EvalConfig, MissingKey};
pub use context::{FieldAccessor, dotted_path};
pub use eval::{Expression, eval};
pub use filter::Filter;
pub use parser::parse;
pub use registry::{FunctionRegistry, NativeFn, NativeFnPtr};
pub use span::Span;

/// Log target for compilation and filter diagnostics.
const LOG_TARGET: &str = "tmplkit::language";
