//! Integration tests for Layer 1: Numeric
//!
//! Tests for classification, promotion, coercion, arithmetic, and comparison
//! across native and text-backed numbers.

mod arithmetic;
mod normalization;
