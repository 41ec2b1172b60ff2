//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Type, Error, JSON conversion, and persistent
//! collections.

mod collections;
mod errors;
mod json;
mod values;
