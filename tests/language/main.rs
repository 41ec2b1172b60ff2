//! Integration tests for Layer 2: Language
//!
//! Tests for the lexer, parser, registry, expressions, and filters.

mod expressions;
mod filters;
mod syntax;
